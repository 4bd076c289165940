//! SVG color model.

use std::fmt;

/// A stroke or fill color.
///
/// Absence (`Color::None`) renders as the literal `none`, which SVG treats
/// as "do not paint".
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Color {
    #[default]
    None,
    /// A named SVG color such as `"white"` or `"red"`.
    Named(String),
    Rgb(u8, u8, u8),
    /// RGB plus an alpha in `[0, 1]`.
    Rgba(u8, u8, u8, f64),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_owned())
    }
}
