//! Plot statement construction
//!
//! Turns a plotting intent into the single gnuplot line that is sent for
//! it. Nothing here touches the process or the filesystem.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Axis, PlotStyle, PlotVerb};

/// Keyword used to replot on top of the existing plot
pub const REPLOT: &str = "replot";

/// Dimensionality of a data plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dims {
    One,
    Two,
    Three,
}

impl Dims {
    /// Map a series or label count onto 1..=3
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Dims::One),
            2 => Ok(Dims::Two),
            3 => Ok(Dims::Three),
            _ => Err(Error::InvalidDimension { count }),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Dims::One => 1,
            Dims::Two => 2,
            Dims::Three => 3,
        }
    }
}

/// Leading keyword of a plot statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKeyword {
    Verb(PlotVerb),
    Replot,
}

impl PlotKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotKeyword::Verb(verb) => verb.as_str(),
            PlotKeyword::Replot => REPLOT,
        }
    }
}

impl fmt::Display for PlotKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<keyword> "<path>" [title "<title>"] with <style>`
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStatement<'a> {
    pub keyword: PlotKeyword,
    pub path: &'a Path,
    pub title: &'a str,
    pub style: PlotStyle,
}

impl fmt::Display for PlotStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.keyword, self.path.display())?;
        // An empty title means no title clause at all
        if !self.title.is_empty() {
            write!(f, " title \"{}\"", self.title)?;
        }
        write!(f, " with {}", self.style)
    }
}

/// Builds the lines sent for plots and axis labels
pub struct CommandBuilder;

impl CommandBuilder {
    /// Pick the leading keyword for the next plot
    ///
    /// Once anything has been plotted, later plots accumulate with
    /// `replot`. Otherwise 3-D data always uses `splot`, and lower
    /// dimensions use the configured verb.
    pub fn keyword(configured: PlotVerb, dims: Dims, plots_so_far: usize) -> PlotKeyword {
        if plots_so_far > 0 {
            PlotKeyword::Replot
        } else if dims == Dims::Three {
            PlotKeyword::Verb(PlotVerb::Splot)
        } else {
            PlotKeyword::Verb(configured)
        }
    }

    /// Full plot line for a staged data file
    pub fn plot_statement(
        keyword: PlotKeyword,
        path: &Path,
        title: &str,
        style: PlotStyle,
    ) -> String {
        PlotStatement {
            keyword,
            path,
            title,
            style,
        }
        .to_string()
    }

    /// `set <axis>label '<text>'`, text passed through verbatim
    pub fn axis_label(axis: Axis, text: &str) -> String {
        format!("set {}label '{}'", axis, text)
    }
}
