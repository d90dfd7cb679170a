//! Unit tests for plot command construction
//!
//! These tests cover keyword selection, title handling and label
//! commands through the public builder API.

use gnuplot_pipe::commands::{CommandBuilder, Dims, PlotKeyword, PlotStatement};
use gnuplot_pipe::{Axis, PlotStyle, PlotVerb};
use std::path::Path;

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        let cases = [
            (PlotVerb::Plot, Dims::One, 0, "plot"),
            (PlotVerb::Plot, Dims::Two, 0, "plot"),
            (PlotVerb::Plot, Dims::Three, 0, "splot"),
            (PlotVerb::Splot, Dims::One, 0, "splot"),
            (PlotVerb::Splot, Dims::Three, 0, "splot"),
            (PlotVerb::Plot, Dims::One, 1, "replot"),
            (PlotVerb::Splot, Dims::Two, 2, "replot"),
            (PlotVerb::Plot, Dims::Three, 9, "replot"),
        ];

        for (verb, dims, plots, expected) in cases {
            let keyword = CommandBuilder::keyword(verb, dims, plots);
            assert_eq!(
                keyword.as_str(),
                expected,
                "verb={} dims={:?} plots={}",
                verb,
                dims,
                plots
            );
        }
    }

    #[test]
    fn test_dims_counts() {
        for n in 1..=3 {
            assert_eq!(Dims::from_count(n).unwrap().count(), n);
        }
        for n in [0, 4, 100] {
            assert!(Dims::from_count(n).is_err());
        }
    }
}

#[cfg(test)]
mod statement_tests {
    use super::*;

    #[test]
    fn test_statement_display_matches_builder() {
        let path = Path::new("/tmp/go-gnuplot-123");
        let statement = PlotStatement {
            keyword: PlotKeyword::Verb(PlotVerb::Splot),
            path,
            title: "surface",
            style: PlotStyle::Pm3d,
        };
        assert_eq!(
            statement.to_string(),
            "splot \"/tmp/go-gnuplot-123\" title \"surface\" with pm3d"
        );
        assert_eq!(
            statement.to_string(),
            CommandBuilder::plot_statement(statement.keyword, path, "surface", PlotStyle::Pm3d)
        );
    }

    #[test]
    fn test_each_style_in_statement() {
        let path = Path::new("/tmp/data");
        for style in PlotStyle::ALL {
            let line = CommandBuilder::plot_statement(PlotKeyword::Replot, path, "", style);
            assert_eq!(line, format!("replot \"/tmp/data\" with {}", style.as_str()));
        }
    }

    #[test]
    fn test_title_passed_verbatim() {
        let line = CommandBuilder::plot_statement(
            PlotKeyword::Verb(PlotVerb::Plot),
            Path::new("/tmp/data"),
            "a \"quoted\" title",
            PlotStyle::Points,
        );
        assert_eq!(
            line,
            "plot \"/tmp/data\" title \"a \"quoted\" title\" with points"
        );
    }

    #[test]
    fn test_whitespace_title_is_kept() {
        let line = CommandBuilder::plot_statement(
            PlotKeyword::Verb(PlotVerb::Plot),
            Path::new("/tmp/data"),
            " ",
            PlotStyle::Dots,
        );
        assert_eq!(line, "plot \"/tmp/data\" title \" \" with dots");
    }
}

#[cfg(test)]
mod label_tests {
    use super::*;

    #[test]
    fn test_axis_labels() {
        let labels: Vec<String> = Axis::ORDER
            .iter()
            .map(|axis| CommandBuilder::axis_label(*axis, "v"))
            .collect();
        assert_eq!(
            labels,
            vec!["set xlabel 'v'", "set ylabel 'v'", "set zlabel 'v'"]
        );
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(CommandBuilder::axis_label(Axis::Y, ""), "set ylabel ''");
    }
}
