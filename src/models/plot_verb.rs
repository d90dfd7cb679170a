//! Plot command verbs and axis names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Command keyword selecting 2-D (`plot`) or 3-D (`splot`) rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlotVerb {
    #[default]
    Plot,
    Splot,
}

impl PlotVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotVerb::Plot => "plot",
            PlotVerb::Splot => "splot",
        }
    }
}

impl fmt::Display for PlotVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotVerb {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plot" => Ok(PlotVerb::Plot),
            "splot" => Ok(PlotVerb::Splot),
            _ => Err(crate::error::Error::InvalidPlotCommand {
                command: s.to_string(),
            }),
        }
    }
}

/// Axis addressed by a `set <axis>label` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axes in the order positional labels are applied
    pub const ORDER: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
