//! Layered map construction.
//!
//! The full map is assembled once per catalog: the four layers are drawn in
//! settings order into one SVG document, and the rendered body is kept.
//! Route maps re-use that body verbatim — a translucent underlayer
//! rectangle is painted over it, then the same four layers are drawn again
//! restricted to the stops and ride spans of one itinerary.

use svg::node::element::{Circle, Polyline, Rectangle, Text};
use svg::Document;

use tg_catalog::{Bus, Catalog};
use tg_core::StopId;
use tg_routing::RouteItem;

use crate::color::Color;
use crate::projector::{MapPoint, ScanlineProjector};
use crate::settings::{MapLayer, RenderSettings};

/// Renders the full network map and per-route maps.
///
/// Holds no borrow of the catalog: the projector and the cached body are
/// owned, and methods take the catalog by reference when they need names
/// and canonical sequences.
pub struct MapRenderer {
    settings: RenderSettings,
    projector: ScanlineProjector,
    /// Stop ids in name order — the order stop layers are drawn in.
    stops_by_name: Vec<StopId>,
    /// The complete rendered full map (`<svg …>…</svg>`).
    full_map: String,
}

impl MapRenderer {
    pub fn new(catalog: &Catalog, settings: &RenderSettings) -> Self {
        let projector =
            ScanlineProjector::new(catalog, settings.width, settings.height, settings.padding);
        let mut renderer = MapRenderer {
            settings: settings.clone(),
            projector,
            stops_by_name: catalog.stops_by_name(),
            full_map: String::new(),
        };

        let mut doc = Document::new();
        for layer in renderer.settings.layers.clone() {
            doc = match layer {
                MapLayer::BusLines => renderer.add_bus_lines(doc, catalog),
                MapLayer::BusLabels => renderer.add_bus_labels(doc, catalog),
                MapLayer::StopPoints => renderer.add_stop_points(doc, catalog),
                MapLayer::StopLabels => renderer.add_stop_labels(doc, catalog),
            };
        }
        renderer.full_map = doc.to_string();
        renderer
    }

    /// The cached full map document.
    pub fn full_map(&self) -> &str {
        &self.full_map
    }

    /// A route map: the full-map body, dimmed by the underlayer rectangle,
    /// with the itinerary's own lines, labels, points, and stop names
    /// re-drawn on top in layer order.
    pub fn route_map(&self, catalog: &Catalog, items: &[RouteItem]) -> String {
        // Reuse the rendered body; an empty document renders self-closing
        // and must be reopened before children can be appended.
        let mut out = match self.full_map.strip_suffix("</svg>") {
            Some(body) => body.to_owned(),
            None => {
                let mut reopened = self.full_map.trim_end_matches("/>").to_owned();
                reopened.push('>');
                reopened
            }
        };

        let m = self.settings.outer_margin;
        let cover = Rectangle::new()
            .set("x", -m)
            .set("y", -m)
            .set("width", self.settings.width + 2.0 * m)
            .set("height", self.settings.height + 2.0 * m)
            .set("fill", self.settings.underlayer_color.to_string())
            .set("stroke", "none");
        out.push('\n');
        out.push_str(&cover.to_string());

        for layer in &self.settings.layers {
            let elements = match layer {
                MapLayer::BusLines => self.route_bus_lines(catalog, items),
                MapLayer::BusLabels => self.route_bus_labels(catalog, items),
                MapLayer::StopPoints => self.route_stop_points(catalog, items),
                MapLayer::StopLabels => self.route_stop_labels(catalog, items),
            };
            for element in elements {
                out.push('\n');
                out.push_str(&element);
            }
        }

        out.push_str("\n</svg>");
        out
    }

    // ── Styling helpers ───────────────────────────────────────────────────

    /// Palette color of the `index`-th bus (bus-name order), cycling.
    fn palette_color(&self, index: usize) -> Color {
        if self.settings.color_palette.is_empty() {
            Color::None
        } else {
            self.settings.color_palette[index % self.settings.color_palette.len()].clone()
        }
    }

    fn polyline(&self, points: &[MapPoint], stroke: &Color) -> Polyline {
        let path: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
        Polyline::new()
            .set("fill", "none")
            .set("stroke", stroke.to_string())
            .set("stroke-width", self.settings.line_width)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round")
            .set("points", path.join(" "))
    }

    fn stop_circle(&self, at: MapPoint) -> Circle {
        Circle::new()
            .set("cx", at.x)
            .set("cy", at.y)
            .set("r", self.settings.stop_radius)
            .set("fill", "white")
    }

    /// The two stacked text elements every label is drawn with: an
    /// underlayer halo below, the payload text above.
    fn label_pair(
        &self,
        content: &str,
        at: MapPoint,
        fill: &Color,
        font_size: u32,
        offset: (f64, f64),
        bold: bool,
    ) -> (Text, Text) {
        let base = || {
            let text = Text::new(content)
                .set("x", at.x)
                .set("y", at.y)
                .set("dx", offset.0)
                .set("dy", offset.1)
                .set("font-size", font_size)
                .set("font-family", "Verdana");
            if bold { text.set("font-weight", "bold") } else { text }
        };

        let halo = base()
            .set("fill", self.settings.underlayer_color.to_string())
            .set("stroke", self.settings.underlayer_color.to_string())
            .set("stroke-width", self.settings.underlayer_width)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round");
        let payload = base().set("fill", fill.to_string());
        (halo, payload)
    }

    fn bus_label_pair(&self, bus: &Bus, at: MapPoint, color: &Color) -> (Text, Text) {
        self.label_pair(
            &bus.name,
            at,
            color,
            self.settings.bus_label_font_size,
            self.settings.bus_label_offset,
            true,
        )
    }

    fn stop_label_pair(&self, name: &str, at: MapPoint) -> (Text, Text) {
        self.label_pair(
            name,
            at,
            &Color::Named("black".to_owned()),
            self.settings.stop_label_font_size,
            self.settings.stop_label_offset,
            false,
        )
    }

    // ── Full-map layers ───────────────────────────────────────────────────

    fn add_bus_lines(&self, mut doc: Document, catalog: &Catalog) -> Document {
        for (index, bus) in catalog.buses.iter().enumerate() {
            let points: Vec<MapPoint> =
                bus.stops.iter().map(|&stop| self.projector.project(stop)).collect();
            doc = doc.add(self.polyline(&points, &self.palette_color(index)));
        }
        doc
    }

    fn add_bus_labels(&self, mut doc: Document, catalog: &Catalog) -> Document {
        for (index, bus) in catalog.buses.iter().enumerate() {
            let color = self.palette_color(index);
            let (first, far) = bus.endpoints();
            for stop in std::iter::once(first).chain(far) {
                let (halo, payload) =
                    self.bus_label_pair(bus, self.projector.project(stop), &color);
                doc = doc.add(halo).add(payload);
            }
        }
        doc
    }

    fn add_stop_points(&self, mut doc: Document, _catalog: &Catalog) -> Document {
        for &stop in &self.stops_by_name {
            doc = doc.add(self.stop_circle(self.projector.project(stop)));
        }
        doc
    }

    fn add_stop_labels(&self, mut doc: Document, catalog: &Catalog) -> Document {
        for &stop in &self.stops_by_name {
            let (halo, payload) =
                self.stop_label_pair(&catalog.stop(stop).name, self.projector.project(stop));
            doc = doc.add(halo).add(payload);
        }
        doc
    }

    // ── Route-restricted layers ───────────────────────────────────────────

    /// The canonical positions a ride item covers, inclusive on both ends.
    fn ride_span(item: &RouteItem) -> Option<(tg_core::BusId, usize, usize)> {
        match item {
            RouteItem::Ride { bus, span_count, start_position, .. } => {
                let start = *start_position as usize;
                Some((*bus, start, start + *span_count as usize))
            }
            RouteItem::Wait { .. } => None,
        }
    }

    fn route_bus_lines(&self, catalog: &Catalog, items: &[RouteItem]) -> Vec<String> {
        items
            .iter()
            .filter_map(Self::ride_span)
            .map(|(bus_id, start, end)| {
                let bus = catalog.bus(bus_id);
                let points: Vec<MapPoint> = bus.stops[start..=end]
                    .iter()
                    .map(|&stop| self.projector.project(stop))
                    .collect();
                self.polyline(&points, &self.palette_color(bus_id.index())).to_string()
            })
            .collect()
    }

    fn route_bus_labels(&self, catalog: &Catalog, items: &[RouteItem]) -> Vec<String> {
        let mut elements = Vec::new();
        for (bus_id, start, end) in items.iter().filter_map(Self::ride_span) {
            let bus = catalog.bus(bus_id);
            let color = self.palette_color(bus_id.index());
            for position in [start, end] {
                let stop = bus.stops[position];
                if bus.is_endpoint(stop) {
                    let (halo, payload) =
                        self.bus_label_pair(bus, self.projector.project(stop), &color);
                    elements.push(halo.to_string());
                    elements.push(payload.to_string());
                }
            }
        }
        elements
    }

    fn route_stop_points(&self, catalog: &Catalog, items: &[RouteItem]) -> Vec<String> {
        let mut elements = Vec::new();
        for (bus_id, start, end) in items.iter().filter_map(Self::ride_span) {
            if end == start {
                continue;
            }
            let bus = catalog.bus(bus_id);
            for &stop in &bus.stops[start..=end] {
                elements.push(self.stop_circle(self.projector.project(stop)).to_string());
            }
        }
        elements
    }

    fn route_stop_labels(&self, catalog: &Catalog, items: &[RouteItem]) -> Vec<String> {
        let mut labelled: Vec<StopId> = items
            .iter()
            .filter_map(|item| match item {
                RouteItem::Wait { stop, .. } => Some(*stop),
                RouteItem::Ride { .. } => None,
            })
            .collect();
        // The itinerary ends on a ride; its alighting stop gets a label too.
        if let Some((bus_id, _, end)) = items.iter().filter_map(Self::ride_span).last() {
            labelled.push(catalog.bus(bus_id).stops[end]);
        }

        let mut elements = Vec::new();
        for stop in labelled {
            let (halo, payload) =
                self.stop_label_pair(&catalog.stop(stop).name, self.projector.project(stop));
            elements.push(halo.to_string());
            elements.push(payload.to_string());
        }
        elements
    }
}
