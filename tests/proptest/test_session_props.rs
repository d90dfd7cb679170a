//! Property-based tests for session command sequencing

#[path = "../test_utils/recording_sink.rs"]
mod recording_sink;

use gnuplot_pipe::PlotStyle;
use proptest::prelude::*;
use recording_sink::{recording_session, RecordingSink};

#[derive(Debug, Clone)]
enum Op {
    Plot(usize),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1usize..=3).prop_map(Op::Plot),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_only_first_plot_after_reset_is_fresh(ops in prop::collection::vec(op(), 1..30)) {
        let sink = RecordingSink::new();
        let (_dir, mut p) = recording_session(sink.clone());
        let series = [1.0, 2.0];

        let mut expected = Vec::new();
        let mut plotted = 0usize;
        for op in &ops {
            match op {
                Op::Plot(dims) => {
                    let data: Vec<&[f64]> = vec![&series[..]; *dims];
                    p.plot_nd("", &data).unwrap();
                    expected.push(match (plotted, *dims) {
                        (0, 3) => "splot",
                        (0, _) => "plot",
                        _ => "replot",
                    });
                    plotted += 1;
                }
                Op::Reset => {
                    p.reset().unwrap();
                    plotted = 0;
                }
            }
            prop_assert_eq!(p.plot_count(), plotted);
            prop_assert_eq!(p.staged_files().len(), plotted);
        }

        let keywords: Vec<String> = sink
            .lines()
            .iter()
            .map(|line| line.split(' ').next().unwrap_or_default().to_string())
            .collect();
        prop_assert_eq!(keywords, expected);
    }

    #[test]
    fn test_unknown_style_falls_back_to_points(name in "[A-Za-z]{1,12}") {
        prop_assume!(PlotStyle::from_name(&name).is_none());
        let (_dir, mut p) = recording_session(RecordingSink::new());
        p.set_plot_style(PlotStyle::Lines);

        prop_assert!(p.set_style(&name).is_err());
        prop_assert_eq!(p.style(), PlotStyle::Points);
    }

    #[test]
    fn test_labels_accept_one_to_three(labels in prop::collection::vec("[a-z ]{0,10}", 0..6)) {
        let sink = RecordingSink::new();
        let (_dir, mut p) = recording_session(sink.clone());

        let result = p.set_labels(&labels);
        if (1..=3).contains(&labels.len()) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(sink.lines().len(), labels.len());
            for (line, (axis, label)) in sink.lines().iter().zip(["x", "y", "z"].iter().zip(&labels)) {
                prop_assert_eq!(line, &format!("set {}label '{}'", axis, label));
            }
        } else {
            prop_assert!(result.is_err());
            prop_assert!(sink.lines().is_empty());
        }
    }

    #[test]
    fn test_arbitrary_commands_pass_through(commands in prop::collection::vec("[ -~]{0,40}", 0..10)) {
        let sink = RecordingSink::new();
        let (_dir, mut p) = recording_session(sink.clone());
        for command in &commands {
            p.cmd(command).unwrap();
        }
        prop_assert_eq!(sink.lines(), commands);
    }
}
