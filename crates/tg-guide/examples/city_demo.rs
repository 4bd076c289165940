//! Build a miniature network, answer a few queries, and print the results.
//!
//! Run with: `cargo run -p tg-guide --example city_demo`

use tg_core::RoutingSettings;
use tg_guide::{BaseCommand, ItineraryItem, TransportGuide};
use tg_render::{Color, MapLayer, RenderSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let commands = vec![
        BaseCommand::AddStop {
            name: "Harbour".into(),
            latitude: 55.574371,
            longitude: 37.6517,
            distances: vec![("Market Square".into(), 2600)],
        },
        BaseCommand::AddStop {
            name: "Market Square".into(),
            latitude: 55.587655,
            longitude: 37.645687,
            distances: vec![("Observatory".into(), 2200)],
        },
        BaseCommand::AddStop {
            name: "Observatory".into(),
            latitude: 55.592028,
            longitude: 37.653656,
            distances: vec![],
        },
        BaseCommand::AddBus {
            name: "14".into(),
            stops: vec!["Harbour".into(), "Market Square".into()],
            round_trip: false,
        },
        BaseCommand::AddBus {
            name: "24".into(),
            stops: vec!["Market Square".into(), "Observatory".into()],
            round_trip: false,
        },
    ];

    let routing = RoutingSettings { bus_wait_time: 6, bus_velocity: 40.0 };
    let render = RenderSettings {
        width: 600.0,
        height: 400.0,
        padding: 50.0,
        outer_margin: 100.0,
        line_width: 10.0,
        stop_radius: 5.0,
        stop_label_font_size: 20,
        stop_label_offset: (7.0, -3.0),
        bus_label_font_size: 20,
        bus_label_offset: (7.0, 15.0),
        underlayer_color: Color::Rgba(255, 255, 255, 0.85),
        underlayer_width: 3.0,
        color_palette: vec![Color::Named("green".into()), Color::Rgb(255, 160, 0)],
        layers: vec![
            MapLayer::BusLines,
            MapLayer::BusLabels,
            MapLayer::StopPoints,
            MapLayer::StopLabels,
        ],
    };

    let guide = TransportGuide::build(&commands, routing)?.with_render_settings(render);

    let bus = guide.bus_info("14", 1);
    println!(
        "bus 14: {} stops ({} unique), {} m, curvature {:.4}",
        bus.stop_count, bus.unique_stop_count, bus.route_length, bus.curvature
    );

    let stop = guide.stop_info("Market Square", 2);
    println!("Market Square is served by: {}", stop.buses.join(", "));

    let route = guide.route_info("Harbour", "Observatory", 3);
    println!("Harbour -> Observatory, {:.2} min:", route.total_time);
    for item in &route.items {
        match item {
            ItineraryItem::Wait { stop_name, time } => {
                println!("  wait {time} min at {stop_name}");
            }
            ItineraryItem::Ride { bus, time, span_count } => {
                println!("  ride bus {bus} for {span_count} stop(s), {time:.2} min");
            }
        }
    }

    let map = guide.map(4);
    println!("full map: {} bytes of SVG", map.map.len());
    Ok(())
}
