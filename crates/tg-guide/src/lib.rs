//! `tg-guide` — the engine façade.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`command`] | `BaseCommand`, `StatRequest` — the typed input records    |
//! | [`result`]  | `StopInfo`, `BusInfo`, `RouteInfo`, `MapInfo`             |
//! | [`guide`]   | `TransportGuide` — build, persist, load, answer           |
//! | [`error`]   | `GuideError`, `GuideResult<T>`                            |
//!
//! # Two modes, one data model
//!
//! *Build mode* consumes base commands plus routing settings, precomputes
//! the all-pairs route cache, and saves one binary artifact.  *Query mode*
//! loads the artifact and answers stop/bus/route/map queries without ever
//! seeing the original input.  Both modes meet in [`TransportGuide`].

pub mod command;
pub mod error;
pub mod guide;
pub mod result;


pub use command::{BaseCommand, StatRequest};
pub use error::{GuideError, GuideResult};
pub use guide::{Answer, TransportGuide};
pub use result::{BusInfo, ItineraryItem, MapInfo, RouteInfo, StopInfo};
