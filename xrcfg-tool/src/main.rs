//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod config;

use clap::{App, Arg, ArgMatches};
use config::{Config, LoggingFileRotation, LoggingFmtStyle};
use tracing::{debug, error};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;
use xrcfg_render::command::{self, Command, Tree};

// Tool errors.
#[derive(Debug)]
enum Error {
    ReadFile(String, std::io::Error),
    ParseDesired(serde_json::Error),
    InvalidBgpAs(String),
    Render(xrcfg_render::Error),
}

// ===== impl Error =====

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReadFile(path, error) => {
                write!(f, "failed to read {path}: {error}")
            }
            Error::ParseDesired(error) => {
                write!(f, "failed to parse desired state: {error}")
            }
            Error::InvalidBgpAs(value) => {
                write!(f, "invalid BGP AS number: {value}")
            }
            Error::Render(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    fn log(&self) {
        match self {
            Error::Render(error) => error.log(),
            _ => error!("{}", self),
        }
    }
}

impl From<xrcfg_render::Error> for Error {
    fn from(error: xrcfg_render::Error) -> Error {
        Error::Render(error)
    }
}

// ===== helper functions =====

// Reports a failure once on stderr: through the stderr log layer when it's
// enabled, directly otherwise. The error is logged to file either way.
fn report(error: &Error, logging: &config::Logging) -> Option<String> {
    error.log();
    (!logging.stderr.enabled).then(|| error.to_string())
}

fn fmt_layer<S, W>(
    writer: W,
    fmt: &config::LoggingFmt,
) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber
        + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w>
        + Send
        + Sync
        + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(fmt.show_thread_id)
        .with_file(fmt.show_source)
        .with_line_number(fmt.show_source)
        .with_ansi(fmt.colors);
    match fmt.style {
        LoggingFmtStyle::Compact => layer.compact().boxed(),
        LoggingFmtStyle::Full => layer.boxed(),
        LoggingFmtStyle::Json => layer.json().boxed(),
        LoggingFmtStyle::Pretty => layer.pretty().boxed(),
    }
}

fn init_tracing(config: &config::Logging) {
    // Enable logging to a file.
    let file = config.file.enabled.then(|| {
        let file_appender = match config.file.rotation {
            LoggingFileRotation::Never => {
                rolling::never(&config.file.dir, &config.file.name)
            }
            LoggingFileRotation::Hourly => {
                rolling::hourly(&config.file.dir, &config.file.name)
            }
            LoggingFileRotation::Daily => {
                rolling::daily(&config.file.dir, &config.file.name)
            }
        };
        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        fmt_layer(file_appender, &config.file.fmt)
            .with_filter(log_level_filter)
    });

    // Enable logging to stderr, keeping stdout for the rendered commands.
    let stderr = config.stderr.enabled.then(|| {
        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        fmt_layer(std::io::stderr, &config.stderr.fmt)
            .with_filter(log_level_filter)
    });

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("xrcfg=info".parse().unwrap())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file)
        .with(stderr)
        .init();
}

fn read_file(path: &str) -> Result<String, Error> {
    std::fs::read_to_string(path)
        .map_err(|error| Error::ReadFile(path.to_owned(), error))
}

fn run(matches: &ArgMatches<'_>) -> Result<Vec<Command>, Error> {
    // Validated by clap.
    let entity = matches.value_of("entity").unwrap_or_default();
    let desired = matches.value_of("desired").unwrap_or_default();

    let data = read_file(desired)?;
    let data = serde_json::from_str::<serde_json::Value>(&data)
        .map_err(Error::ParseDesired)?;
    let instance = xrcfg_bgp::instance(entity, &data)?;
    debug!(%entity, state = %instance.state(), "desired state loaded");

    let running = matches.value_of("running").map(read_file).transpose()?;
    let bgp_as = matches
        .value_of("bgp-as")
        .map(|value| {
            value
                .parse::<u32>()
                .map_err(|_| Error::InvalidBgpAs(value.to_owned()))
        })
        .transpose()?;

    let commands =
        xrcfg_bgp::render_commands(&instance, running.as_deref(), bgp_as)?;
    Ok(commands)
}

// ===== main =====

fn main() {
    // Parse command-line parameters.
    let matches = App::new("IOS-XR BGP configuration renderer")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("file")
                .help("Specify an alternative configuration file."),
        )
        .arg(
            Arg::with_name("entity")
                .short("e")
                .long("entity")
                .value_name("type")
                .possible_values(&xrcfg_bgp::REGISTRY.entities())
                .required(true)
                .help("Entity type of the desired state."),
        )
        .arg(
            Arg::with_name("desired")
                .short("d")
                .long("desired")
                .value_name("file")
                .required(true)
                .help("JSON file holding the desired state."),
        )
        .arg(
            Arg::with_name("running")
                .short("r")
                .long("running")
                .value_name("file")
                .help("Running configuration of the device."),
        )
        .arg(
            Arg::with_name("bgp-as")
                .short("a")
                .long("bgp-as")
                .value_name("asn")
                .help("AS number of the enclosing BGP instance."),
        )
        .arg(
            Arg::with_name("tree")
                .long("tree")
                .help("Print commands as an indented tree."),
        )
        .get_matches();

    // Read configuration file.
    let config_file = matches.value_of("config");
    let config = match Config::load(config_file) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    // Initialize tracing.
    init_tracing(&config.logging);

    match run(&matches) {
        Ok(commands) => {
            if matches.is_present("tree") || config.render.tree {
                print!("{}", Tree(&commands));
            } else {
                for line in command::flatten(&commands) {
                    println!("{line}");
                }
            }
        }
        Err(error) => {
            if let Some(message) = report(&error, &config.logging) {
                eprintln!("{message}");
            }
            std::process::exit(1);
        }
    }
}

// ===== unit tests =====
