//! `tg` — transport-guide command line.
//!
//! Two run modes over a JSON document on stdin:
//!
//! - `tg make_base` — apply `base_requests` and `routing_settings`, build
//!   the all-pairs routing tables, and write the binary catalog to
//!   `serialization_settings.file`.
//! - `tg process_requests` — restore the catalog from that file and answer
//!   `stat_requests`, printing a JSON array of results on stdout.
//!
//! Exit codes: 0 on success, 5 on argument misuse, 1 on any runtime
//! failure.

mod wire;


use std::error::Error;
use std::io::Read;
use std::process::ExitCode;

use serde_json::{json, Value};

use tg_guide::{
    Answer, BaseCommand, BusInfo, ItineraryItem, MapInfo, RouteInfo, StopInfo, TransportGuide,
};

use crate::wire::InputDoc;

fn usage() {
    eprintln!("Usage: tg [make_base|process_requests]");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        usage();
        return ExitCode::from(5);
    }

    let result = match args[1].as_str() {
        "make_base" => make_base(),
        "process_requests" => process_requests(),
        _ => {
            eprintln!("invalid argument: run mode");
            usage();
            return ExitCode::from(5);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input() -> Result<InputDoc, Box<dyn Error>> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}

fn make_base() -> Result<(), Box<dyn Error>> {
    let doc = read_input()?;
    let file = doc
        .serialization_settings
        .ok_or("serialization_settings.file is required for make_base")?
        .file;

    let commands: Vec<BaseCommand> = doc.base_requests.into_iter().map(Into::into).collect();
    let routing = doc.routing_settings.map(Into::into).unwrap_or_default();

    let guide = TransportGuide::build(&commands, routing)?;
    guide.save(&file)?;
    Ok(())
}

fn process_requests() -> Result<(), Box<dyn Error>> {
    let doc = read_input()?;
    let file = doc
        .serialization_settings
        .ok_or("serialization_settings.file is required for process_requests")?
        .file;

    let mut guide = TransportGuide::load(&file)?;
    if let Some(render) = doc.render_settings {
        guide = guide.with_render_settings(render.try_into()?);
    }

    let answers: Vec<Value> = doc
        .stat_requests
        .into_iter()
        .map(|request| answer_to_json(guide.answer(&request.into())))
        .collect();

    serde_json::to_writer(std::io::stdout().lock(), &Value::Array(answers))?;
    println!();
    Ok(())
}

fn answer_to_json(answer: Answer) -> Value {
    match answer {
        Answer::Stop(StopInfo { request_id, buses, error_message }) => match error_message {
            Some(message) => json!({ "request_id": request_id, "error_message": message }),
            None => json!({ "request_id": request_id, "buses": buses }),
        },
        Answer::Bus(BusInfo {
            request_id,
            route_length,
            curvature,
            stop_count,
            unique_stop_count,
            error_message,
        }) => match error_message {
            Some(message) => json!({ "request_id": request_id, "error_message": message }),
            None => json!({
                "request_id": request_id,
                "route_length": route_length,
                "curvature": curvature,
                "stop_count": stop_count,
                "unique_stop_count": unique_stop_count,
            }),
        },
        Answer::Route(RouteInfo { request_id, total_time, items, map, error_message }) => {
            match error_message {
                Some(message) => json!({ "request_id": request_id, "error_message": message }),
                None => json!({
                    "request_id": request_id,
                    "total_time": total_time,
                    "items": items.iter().map(item_to_json).collect::<Vec<_>>(),
                    "map": map,
                }),
            }
        }
        Answer::Map(MapInfo { request_id, map }) => {
            json!({ "request_id": request_id, "map": map })
        }
    }
}

fn item_to_json(item: &ItineraryItem) -> Value {
    match item {
        ItineraryItem::Wait { stop_name, time } => {
            json!({ "type": "Wait", "stop_name": stop_name, "time": time })
        }
        ItineraryItem::Ride { bus, time, span_count } => {
            json!({ "type": "Bus", "bus": bus, "time": time, "span_count": span_count })
        }
    }
}
