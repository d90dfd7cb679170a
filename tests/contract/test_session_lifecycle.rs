//! Contract Tests for Plotter Session Lifecycle
//!
//! These tests pin down the command stream a session produces and the
//! fate of its staged data files across plot, reset and close.

#[path = "../test_utils/recording_sink.rs"]
mod recording_sink;

use gnuplot_pipe::error::Error;
use gnuplot_pipe::process::gnuplot_path;
use gnuplot_pipe::{PlotStyle, PlotVerb, Plotter, PlotterConfig};
use recording_sink::{recording_session, RecordingSink};
use std::fs;

fn staged_content(p: &Plotter<RecordingSink>) -> Vec<String> {
    let mut contents: Vec<String> = p
        .staged_files()
        .iter()
        .map(|path| fs::read_to_string(path).unwrap())
        .collect();
    contents.sort();
    contents
}

#[test]
fn test_plot_x_contract() {
    let sink = RecordingSink::new();
    let (_dir, mut p) = recording_session(sink.clone());

    p.plot_x(&[10.0, 20.0, 30.0], "my data").unwrap();

    let files = p.staged_files();
    assert_eq!(files.len(), 1);
    assert_eq!(fs::read_to_string(&files[0]).unwrap(), "10\n20\n30\n");
    assert_eq!(
        sink.lines(),
        vec![format!(
            "plot \"{}\" title \"my data\" with points",
            files[0].display()
        )]
    );
}

#[test]
fn test_accumulating_plots() {
    let sink = RecordingSink::new();
    let (_dir, mut p) = recording_session(sink.clone());

    p.set_style("lines").unwrap();
    p.plot_xy(&[0.0, 1.0], &[0.0, 2.0], "line").unwrap();
    p.plot_func(&[0.0, 1.0, 2.0], |x| x * 3.0, "").unwrap();
    p.plot_xyz(&[1.0], &[1.0], &[1.0], "point").unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("plot \""));
    assert!(lines[0].ends_with("\" title \"line\" with lines"));
    assert!(lines[1].starts_with("replot \""));
    assert!(lines[1].ends_with("\" with lines"));
    assert!(!lines[1].contains("title"));
    assert!(lines[2].starts_with("replot \""));
    assert_eq!(p.plot_count(), 3);

    assert_eq!(staged_content(&p), vec!["0 0\n1 2\n", "0 0\n1 3\n2 6\n", "1 1 1\n"]);
}

#[test]
fn test_reset_then_plot_starts_over() {
    let sink = RecordingSink::new();
    let (_dir, mut p) = recording_session(sink.clone());

    p.plot_x(&[1.0], "").unwrap();
    p.plot_x(&[2.0], "").unwrap();
    let before = p.staged_files();

    p.reset().unwrap();
    assert!(before.iter().all(|path| !path.exists()));
    assert_eq!(p.plot_count(), 0);

    p.plot_xyz(&[1.0], &[2.0], &[3.0], "").unwrap();
    assert!(sink.lines()[2].starts_with("splot \""));
}

#[test]
fn test_reset_with_nothing_staged() {
    let (_dir, mut p) = recording_session(RecordingSink::new());
    p.reset().unwrap();
    p.reset().unwrap();
    assert_eq!(p.plot_count(), 0);
}

#[test]
fn test_close_removes_all_files() {
    let sink = RecordingSink::new();
    let (dir, mut p) = recording_session(sink.clone());

    for i in 0..5 {
        p.plot_x(&[f64::from(i)], "").unwrap();
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 5);

    p.close().unwrap();
    assert_eq!(sink.close_calls(), 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_close_failure_still_cleans_up() {
    let sink = RecordingSink::failing_on_close();
    let (dir, mut p) = recording_session(sink.clone());
    p.plot_x(&[1.0, 2.0], "").unwrap();

    let err = p.close().unwrap_err();
    assert!(matches!(err, Error::ProcessExitFailed { .. }));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(sink.close_calls(), 1);
}

#[cfg(unix)]
#[test]
fn test_close_reports_unremovable_file_and_removes_the_rest() {
    let sink = RecordingSink::new();
    let (_dir, mut p) = recording_session(sink.clone());

    for i in 0..5 {
        p.plot_x(&[f64::from(i)], "").unwrap();
    }
    let staged = p.staged_files();
    let blocked = staged[2].clone();

    // A non-empty directory in place of the file cannot be unlinked
    fs::remove_file(&blocked).unwrap();
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep"), "x").unwrap();

    match p.close() {
        Err(Error::CleanupFailed { failures }) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].path, blocked);
        }
        other => panic!("expected CleanupFailed, got {:?}", other),
    }
    assert_eq!(sink.close_calls(), 1);
    assert!(staged
        .iter()
        .filter(|path| **path != blocked)
        .all(|path| !path.exists()));
    assert!(blocked.join("keep").exists());
}

#[test]
fn test_drop_closes_once() {
    let sink = RecordingSink::new();
    let (dir, mut p) = recording_session(sink.clone());
    p.plot_x(&[1.0], "").unwrap();

    drop(p);
    assert_eq!(sink.close_calls(), 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_dims_have_no_side_effects() {
    let sink = RecordingSink::new();
    let (dir, mut p) = recording_session(sink.clone());
    let series = [1.0, 2.0, 3.0];

    let err = p.plot_nd("", &[]).unwrap_err();
    assert_eq!(err.to_string(), "invalid number of dims '0'");
    let err = p
        .plot_nd("", &[&series[..], &series, &series, &series])
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid number of dims '4'");

    assert!(sink.lines().is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_style_fallback_contract() {
    let sink = RecordingSink::new();
    let (_dir, mut p) = recording_session(sink.clone());

    p.set_plot_style(PlotStyle::Steps);
    let err = p.set_style("LINES").unwrap_err();
    assert_eq!(err.to_string(), "invalid style 'LINES'");
    assert_eq!(p.style(), PlotStyle::Points);

    p.plot_x(&[1.0], "").unwrap();
    assert!(sink.lines()[0].ends_with(" with points"));
}

#[test]
fn test_every_style_name_is_accepted() {
    let (_dir, mut p) = recording_session(RecordingSink::new());
    for style in PlotStyle::ALL {
        p.set_style(style.as_str()).unwrap();
        assert_eq!(p.style(), style);
    }
}

#[test]
fn test_plot_cmd_contract() {
    let (_dir, mut p) = recording_session(RecordingSink::new());

    let err = p.set_plot_cmd("replot").unwrap_err();
    assert_eq!(err.to_string(), "invalid plot cmd [replot]");
    assert_eq!(p.plot_verb(), PlotVerb::Plot);

    p.set_plot_verb(PlotVerb::Splot);
    p.set_plot_cmd("plot").unwrap();
    assert_eq!(p.plot_verb(), PlotVerb::Plot);
}

#[test]
fn test_labels_contract() {
    let sink = RecordingSink::new();
    let (_dir, mut p) = recording_session(sink.clone());

    p.set_labels(&["time"]).unwrap();
    p.set_labels(&[String::from("a"), String::from("b")]).unwrap();
    p.set_z_label("depth").unwrap();

    assert_eq!(
        sink.lines(),
        vec![
            "set xlabel 'time'",
            "set xlabel 'a'",
            "set ylabel 'b'",
            "set zlabel 'depth'",
        ]
    );
}

#[test]
fn test_write_failure_propagates() {
    let sink = RecordingSink::failing_at(0);
    let (_dir, mut p) = recording_session(sink.clone());

    let err = p.cmd("set grid").unwrap_err();
    assert!(matches!(err, Error::CommandWriteFailed { .. }));
    p.cmd("set grid").unwrap();
    assert_eq!(sink.lines(), vec!["set grid"]);
}

#[test]
fn test_config_prefix_and_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotterConfig {
        temp_dir: Some(dir.path().to_path_buf()),
        file_prefix: "session-test-".to_string(),
        style: PlotStyle::Impulses,
        plot_command: PlotVerb::Splot,
        ..PlotterConfig::default()
    };
    let sink = RecordingSink::new();
    let mut p = Plotter::with_sink(sink.clone(), &config);

    assert_eq!(p.style(), PlotStyle::Impulses);
    assert_eq!(p.plot_verb(), PlotVerb::Splot);

    p.plot_x(&[1.0], "").unwrap();
    let path = p.staged_files().pop().unwrap();
    assert_eq!(path.parent(), Some(dir.path()));
    assert!(path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("session-test-"));
    assert!(sink.lines()[0].starts_with("splot \""));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = PlotterConfig {
        file_prefix: String::new(),
        ..PlotterConfig::default()
    };
    match Plotter::with_config(config) {
        Err(Error::ConfigValidationFailed { field, .. }) => assert_eq!(field, "file_prefix"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("empty prefix must be rejected"),
    }
}

#[cfg(unix)]
#[test]
fn test_explicit_executable_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotterConfig {
        executable: Some("/bin/cat".into()),
        temp_dir: Some(dir.path().to_path_buf()),
        ..PlotterConfig::default()
    };

    let mut p = Plotter::with_config(config).unwrap();
    assert!(p.process_info().is_running());
    assert!(p.process_info().program.ends_with("cat"));

    p.cmd("# gnuplot-pipe contract test").unwrap();
    p.plot_x(&[1.0], "").unwrap();
    p.close().unwrap();
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_explicit_executable() {
    let config = PlotterConfig {
        executable: Some("/nonexistent/bin/gnuplot".into()),
        ..PlotterConfig::default()
    };
    assert!(matches!(
        Plotter::with_config(config),
        Err(Error::ExecutableNotFound { .. })
    ));
}

#[test]
fn test_real_gnuplot_session() {
    if gnuplot_path().is_err() {
        eprintln!("gnuplot not installed, skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("plot.svg");
    let mut p = Plotter::new("", false, false).unwrap();

    p.cmd("set terminal svg").unwrap();
    p.cmd(format_args!("set output '{}'", output.display()))
        .unwrap();
    p.plot_x(&[1.0, 4.0, 9.0], "squares").unwrap();
    p.set_labels(&["n", "n^2"]).unwrap();
    p.cmd("replot").unwrap();
    p.cmd("set output").unwrap();
    let staged = p.staged_files();
    p.close().unwrap();

    assert!(staged.iter().all(|path| !path.exists()));
    assert!(output.exists());
}
