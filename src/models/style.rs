//! Plot Style Definitions
//!
//! The closed set of gnuplot rendering styles a session accepts.
//! Holding the style as an enum keeps the session from ever carrying
//! a name gnuplot would reject.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering mode applied to a data series (`with <style>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlotStyle {
    Lines,
    /// Safe default, also the fallback for unrecognized names
    #[default]
    Points,
    LinesPoints,
    Impulses,
    Dots,
    Steps,
    ErrorBars,
    Boxes,
    BoxErrorBars,
    Pm3d,
}

impl PlotStyle {
    /// Every recognized style, in gnuplot documentation order
    pub const ALL: [PlotStyle; 10] = [
        PlotStyle::Lines,
        PlotStyle::Points,
        PlotStyle::LinesPoints,
        PlotStyle::Impulses,
        PlotStyle::Dots,
        PlotStyle::Steps,
        PlotStyle::ErrorBars,
        PlotStyle::Boxes,
        PlotStyle::BoxErrorBars,
        PlotStyle::Pm3d,
    ];

    /// The keyword gnuplot expects after `with`
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotStyle::Lines => "lines",
            PlotStyle::Points => "points",
            PlotStyle::LinesPoints => "linespoints",
            PlotStyle::Impulses => "impulses",
            PlotStyle::Dots => "dots",
            PlotStyle::Steps => "steps",
            PlotStyle::ErrorBars => "errorbars",
            PlotStyle::Boxes => "boxes",
            PlotStyle::BoxErrorBars => "boxerrorbars",
            PlotStyle::Pm3d => "pm3d",
        }
    }

    /// Exact, case-sensitive lookup of a style keyword
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|style| style.as_str() == name)
    }

    /// Names of all recognized styles
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(PlotStyle::as_str).collect()
    }
}

impl fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotStyle {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::error::Error::InvalidStyle {
            style: s.to_string(),
        })
    }
}
