//! gnuplot-pipe demo
//!
//! Draws two functions on top of each other in an interactive window,
//! then renders the same plot to a PDF file.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use gnuplot_pipe::{ConfigLoader, Plotter, PlotterConfig};

const DEFAULT_OUTPUT: &str = "plot002.pdf";

/// Command line options
#[derive(Debug)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Echo every command sent to gnuplot
    debug: bool,
    /// Keep plot windows open after exit
    persist: bool,
    /// PDF file the final plot is written to
    output: PathBuf,
}

impl Default for AppArgs {
    fn default() -> Self {
        Self {
            config_path: None,
            debug: false,
            persist: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl AppArgs {
    /// Parse command line arguments, program name excluded
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let args: Vec<String> = args.into_iter().collect();
        let mut app_args = AppArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    i += 1;
                    let path = args.get(i).context("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                }
                "--output" | "-o" => {
                    i += 1;
                    let path = args.get(i).context("Missing output file path")?;
                    app_args.output = PathBuf::from(path);
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--persist" | "-p" => {
                    app_args.persist = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("gnuplot-pipe v{}", gnuplot_pipe::VERSION);
                    process::exit(0);
                }
                arg => bail!("Unknown option: {}", arg),
            }
            i += 1;
        }

        Ok(app_args)
    }
}

fn print_help() {
    println!("gnuplot-pipe - drive gnuplot through a pipe");
    println!();
    println!("USAGE:");
    println!("    gnuplot-pipe [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -o, --output <PATH>    PDF output file (default: {})", DEFAULT_OUTPUT);
    println!("    -d, --debug            Echo commands sent to gnuplot");
    println!("    -p, --persist          Keep plot windows open after exit");
    println!("    -h, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    GNUPLOT_PIPE_CONFIG    Path to configuration file");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() -> Result<()> {
    let args = match AppArgs::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Failed to parse arguments: {}", e);
            print_help();
            process::exit(1);
        }
    };

    let log_level = if args.debug { "debug" } else { "info" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Starting gnuplot-pipe v{}", gnuplot_pipe::VERSION);

    let config = load_configuration(&args)?;
    let mut p = Plotter::with_config(config)
        .map_err(|e| anyhow::anyhow!(gnuplot_pipe::handle_startup_error(&e)))?;

    p.checked_cmd("plot 23*x");
    p.checked_cmd("plot 32*cos(-3*x)");
    p.checked_cmd("set terminal pdf");
    p.checked_cmd(format_args!("set output '{}'", args.output.display()));
    p.checked_cmd("replot");
    p.checked_cmd("q");

    p.close().context("Failed to close gnuplot")?;
    info!("Plot written to {}", args.output.display());
    Ok(())
}

/// Configuration from `--config`, the usual locations, or defaults;
/// command line flags take precedence
fn load_configuration(args: &AppArgs) -> Result<PlotterConfig> {
    let mut config = match &args.config_path {
        Some(path) => {
            debug!("Loading config from: {}", path.display());
            ConfigLoader::new()
                .load_from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    config.debug |= args.debug;
    config.persist |= args.persist;
    Ok(config)
}
