//! Rendering configuration.

use std::str::FromStr;

use crate::color::Color;
use crate::error::RenderError;

/// One compositional map layer.
///
/// Layers are drawn in the order the settings list them; the same order is
/// used for the route-restricted layers of a route map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MapLayer {
    BusLines,
    BusLabels,
    StopPoints,
    StopLabels,
}

impl MapLayer {
    pub fn as_str(self) -> &'static str {
        match self {
            MapLayer::BusLines => "bus_lines",
            MapLayer::BusLabels => "bus_labels",
            MapLayer::StopPoints => "stop_points",
            MapLayer::StopLabels => "stop_labels",
        }
    }
}

impl FromStr for MapLayer {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bus_lines" => Ok(MapLayer::BusLines),
            "bus_labels" => Ok(MapLayer::BusLabels),
            "stop_points" => Ok(MapLayer::StopPoints),
            "stop_labels" => Ok(MapLayer::StopLabels),
            other => Err(RenderError::UnknownLayer(other.to_owned())),
        }
    }
}

impl std::fmt::Display for MapLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable map-rendering parameters.
///
/// All lengths are SVG user units; font sizes are whole points; offsets are
/// `(dx, dy)` pairs applied to label anchors.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Margin of the translucent underlayer drawn behind route maps.
    pub outer_margin: f64,

    pub line_width: f64,
    pub stop_radius: f64,

    pub stop_label_font_size: u32,
    pub stop_label_offset: (f64, f64),
    pub bus_label_font_size: u32,
    pub bus_label_offset: (f64, f64),

    pub underlayer_color: Color,
    pub underlayer_width: f64,

    /// Bus stroke colors, cycled in bus-name order.
    pub color_palette: Vec<Color>,
    pub layers: Vec<MapLayer>,
}
