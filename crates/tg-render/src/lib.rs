//! `tg-render` — map projection and scalable-vector rendering.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`color`]     | `Color` — named / rgb / rgba / none                     |
//! | [`settings`]  | `RenderSettings`, `MapLayer`                            |
//! | [`projector`] | Reference-point alignment + scanline bucket compression |
//! | [`map`]       | `MapRenderer` — four layers, full map and route maps    |
//! | [`error`]     | `RenderError`                                           |
//!
//! # Rendering model
//!
//! Geographic coordinates are first re-aligned along reference stops, then
//! compressed per axis into integer buckets such that stops which are never
//! adjacent on any route may share a bucket.  The four map layers are drawn
//! in the order the render settings dictate; a route map re-uses the full
//! map's rendered body under a translucent overlay and re-draws only the
//! queried route.

pub mod color;
pub mod error;
pub mod map;
pub mod projector;
pub mod settings;


pub use color::Color;
pub use error::RenderError;
pub use map::MapRenderer;
pub use projector::{MapPoint, ScanlineProjector};
pub use settings::{MapLayer, RenderSettings};
