//! JSON wire schema.
//!
//! Mirrors the request document consumed on stdin: `base_requests`,
//! `stat_requests`, `routing_settings`, `render_settings`, and
//! `serialization_settings`.  Everything here converts into the typed
//! records of `tg-guide`/`tg-render`; no JSON crosses the engine boundary.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use tg_core::RoutingSettings;
use tg_guide::{BaseCommand, StatRequest};
use tg_render::{Color, MapLayer, RenderSettings};

#[derive(Deserialize)]
pub struct InputDoc {
    #[serde(default)]
    pub base_requests: Vec<BaseRequestWire>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequestWire>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettingsWire>,
    #[serde(default)]
    pub render_settings: Option<RenderSettingsWire>,
    #[serde(default)]
    pub serialization_settings: Option<SerializationSettingsWire>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequestWire {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

impl From<BaseRequestWire> for BaseCommand {
    fn from(wire: BaseRequestWire) -> Self {
        match wire {
            BaseRequestWire::Stop { name, latitude, longitude, road_distances } => {
                BaseCommand::AddStop {
                    name,
                    latitude,
                    longitude,
                    distances: road_distances.into_iter().collect(),
                }
            }
            BaseRequestWire::Bus { name, stops, is_roundtrip } => {
                BaseCommand::AddBus { name, stops, round_trip: is_roundtrip }
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
pub enum StatRequestWire {
    Stop { name: String, id: i64 },
    Bus { name: String, id: i64 },
    Route { from: String, to: String, id: i64 },
    Map { id: i64 },
}

impl From<StatRequestWire> for StatRequest {
    fn from(wire: StatRequestWire) -> Self {
        match wire {
            StatRequestWire::Stop { name, id } => StatRequest::Stop { name, request_id: id },
            StatRequestWire::Bus { name, id } => StatRequest::Bus { name, request_id: id },
            StatRequestWire::Route { from, to, id } => {
                StatRequest::Route { from, to, request_id: id }
            }
            StatRequestWire::Map { id } => StatRequest::Map { request_id: id },
        }
    }
}

#[derive(Deserialize)]
pub struct RoutingSettingsWire {
    pub bus_wait_time: u32,
    pub bus_velocity: f64,
}

impl From<RoutingSettingsWire> for RoutingSettings {
    fn from(wire: RoutingSettingsWire) -> Self {
        RoutingSettings { bus_wait_time: wire.bus_wait_time, bus_velocity: wire.bus_velocity }
    }
}

/// A color is either a named string, `[r, g, b]`, or `[r, g, b, alpha]`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ColorWire {
    Named(String),
    Channels(Vec<f64>),
}

impl TryFrom<ColorWire> for Color {
    type Error = String;

    fn try_from(wire: ColorWire) -> Result<Self, Self::Error> {
        match wire {
            ColorWire::Named(name) => Ok(Color::Named(name)),
            ColorWire::Channels(c) => match c.as_slice() {
                [r, g, b] => Ok(Color::Rgb(*r as u8, *g as u8, *b as u8)),
                [r, g, b, a] => Ok(Color::Rgba(*r as u8, *g as u8, *b as u8, *a)),
                other => Err(format!("color array must have 3 or 4 entries, got {}", other.len())),
            },
        }
    }
}

#[derive(Deserialize)]
pub struct RenderSettingsWire {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    #[serde(default)]
    pub outer_margin: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub underlayer_color: ColorWire,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorWire>,
    pub layers: Vec<String>,
}

impl TryFrom<RenderSettingsWire> for RenderSettings {
    type Error = Box<dyn std::error::Error>;

    fn try_from(wire: RenderSettingsWire) -> Result<Self, Self::Error> {
        let color_palette = wire
            .color_palette
            .into_iter()
            .map(Color::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let layers = wire
            .layers
            .iter()
            .map(|name| name.parse::<MapLayer>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RenderSettings {
            width: wire.width,
            height: wire.height,
            padding: wire.padding,
            outer_margin: wire.outer_margin,
            line_width: wire.line_width,
            stop_radius: wire.stop_radius,
            stop_label_font_size: wire.stop_label_font_size,
            stop_label_offset: (wire.stop_label_offset[0], wire.stop_label_offset[1]),
            bus_label_font_size: wire.bus_label_font_size,
            bus_label_offset: (wire.bus_label_offset[0], wire.bus_label_offset[1]),
            underlayer_color: Color::try_from(wire.underlayer_color)?,
            underlayer_width: wire.underlayer_width,
            color_palette,
            layers,
        })
    }
}

#[derive(Deserialize)]
pub struct SerializationSettingsWire {
    pub file: PathBuf,
}
