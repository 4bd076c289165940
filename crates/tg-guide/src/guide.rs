//! The `TransportGuide` façade.

use std::path::Path;
use std::sync::OnceLock;

use tg_catalog::CatalogBuilder;
use tg_core::RoutingSettings;
use tg_persist::GuideSnapshot;
use tg_render::{MapRenderer, RenderSettings};
use tg_routing::{RouteCache, RouteItem, TimeGraph};

use crate::command::{BaseCommand, StatRequest};
use crate::error::GuideResult;
use crate::result::{BusInfo, ItineraryItem, MapInfo, RouteInfo, StopInfo};

/// A built (or restored) transport guide, ready to answer queries.
///
/// The snapshot is the single owner of all catalog data; the renderer and
/// every query method borrow it read-only.  The full map is rendered at
/// most once per guide and reused by map queries and route maps alike.
pub struct TransportGuide {
    snapshot: GuideSnapshot,
    render: RenderSettings,
    renderer: OnceLock<MapRenderer>,
}

impl TransportGuide {
    /// Build mode: apply the base commands, precompute the routing tables,
    /// and freeze.
    pub fn build(commands: &[BaseCommand], routing: RoutingSettings) -> GuideResult<Self> {
        let mut builder = CatalogBuilder::new();
        for command in commands {
            match command {
                BaseCommand::AddStop { name, latitude, longitude, distances } => {
                    builder.add_stop(name, *latitude, *longitude, distances)?;
                }
                BaseCommand::AddBus { name, stops, round_trip } => {
                    builder.add_bus(name, stops, *round_trip)?;
                }
            }
        }
        let catalog = builder.finish()?;

        let (graph, activities) = TimeGraph::build(&catalog, routing)?;
        let cache = RouteCache::build(&graph, catalog.stop_count());

        Ok(Self::from_snapshot(GuideSnapshot { catalog, routing, activities, cache }))
    }

    /// Wrap an already-restored snapshot.
    pub fn from_snapshot(snapshot: GuideSnapshot) -> Self {
        Self { snapshot, render: RenderSettings::default(), renderer: OnceLock::new() }
    }

    /// Query mode: restore the artifact written by [`save`](Self::save).
    pub fn load(path: &Path) -> GuideResult<Self> {
        Ok(Self::from_snapshot(GuideSnapshot::load(path)?))
    }

    /// Persist the frozen guide as a self-contained binary artifact.
    pub fn save(&self, path: &Path) -> GuideResult<()> {
        Ok(self.snapshot.save(path)?)
    }

    /// Install the presentation parameters used by map and route queries.
    /// Resets the cached full map.
    pub fn with_render_settings(mut self, render: RenderSettings) -> Self {
        self.render = render;
        self.renderer = OnceLock::new();
        self
    }

    pub fn snapshot(&self) -> &GuideSnapshot {
        &self.snapshot
    }

    fn renderer(&self) -> &MapRenderer {
        self.renderer.get_or_init(|| MapRenderer::new(&self.snapshot.catalog, &self.render))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Which buses serve `name`, sorted lexicographically.
    pub fn stop_info(&self, name: &str, request_id: i64) -> StopInfo {
        let catalog = &self.snapshot.catalog;
        let Some(stop_id) = catalog.stop_id(name) else {
            return StopInfo::not_found(request_id);
        };
        let buses = catalog
            .stop(stop_id)
            .buses
            .iter()
            .map(|&bus| catalog.bus(bus).name.clone())
            .collect();
        StopInfo { request_id, buses, error_message: None }
    }

    /// The stored statistics of bus `name`.
    pub fn bus_info(&self, name: &str, request_id: i64) -> BusInfo {
        let catalog = &self.snapshot.catalog;
        let Some(bus_id) = catalog.bus_id(name) else {
            return BusInfo::not_found(request_id);
        };
        let stats = catalog.bus(bus_id).stats;
        BusInfo {
            request_id,
            route_length: stats.route_length,
            curvature: stats.curvature,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
            error_message: None,
        }
    }

    /// The precomputed fastest route from `from` to `to`, with its map.
    pub fn route_info(&self, from: &str, to: &str, request_id: i64) -> RouteInfo {
        let catalog = &self.snapshot.catalog;
        let (Some(from_id), Some(to_id)) = (catalog.stop_id(from), catalog.stop_id(to)) else {
            return RouteInfo::not_found(request_id);
        };
        let Some(itinerary) = self.snapshot.cache.itinerary(
            from_id,
            to_id,
            &self.snapshot.activities,
            self.snapshot.routing,
        ) else {
            return RouteInfo::not_found(request_id);
        };

        let map = self.renderer().route_map(catalog, &itinerary.items);
        let items = itinerary
            .items
            .iter()
            .map(|item| match item {
                RouteItem::Wait { stop, time } => ItineraryItem::Wait {
                    stop_name: catalog.stop(*stop).name.clone(),
                    time: *time,
                },
                RouteItem::Ride { bus, time, span_count, .. } => ItineraryItem::Ride {
                    bus: catalog.bus(*bus).name.clone(),
                    time: *time,
                    span_count: *span_count,
                },
            })
            .collect();

        RouteInfo {
            request_id,
            total_time: itinerary.total_time,
            items,
            map,
            error_message: None,
        }
    }

    /// The full network map.
    pub fn map(&self, request_id: i64) -> MapInfo {
        MapInfo { request_id, map: self.renderer().full_map().to_owned() }
    }

    /// Convenience dispatcher for a parsed request record.
    pub fn answer(&self, request: &StatRequest) -> Answer {
        match request {
            StatRequest::Stop { name, request_id } => {
                Answer::Stop(self.stop_info(name, *request_id))
            }
            StatRequest::Bus { name, request_id } => Answer::Bus(self.bus_info(name, *request_id)),
            StatRequest::Route { from, to, request_id } => {
                Answer::Route(self.route_info(from, to, *request_id))
            }
            StatRequest::Map { request_id } => Answer::Map(self.map(*request_id)),
        }
    }
}

/// One answer record, mirroring the request kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Answer {
    Stop(StopInfo),
    Bus(BusInfo),
    Route(RouteInfo),
    Map(MapInfo),
}
