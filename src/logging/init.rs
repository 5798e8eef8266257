use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
    EnvFilter, Layer as _, Registry,
};
use super::{LogConfig, LOG_FILENAME};

type BoxedLayer = Box<dyn tracing_subscriber::Layer<Registry> + Send + Sync>;

/// Initialize the logging system with the given configuration.
///
/// `RUST_LOG` overrides the configured level. Screen output goes to stderr so
/// it never mixes with command output on stdout.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.output.writes_file() {
        layers.push(file_layer(config)?);
    }
    if config.output.writes_screen() {
        layers.push(screen_layer(config));
    }
    tracing_subscriber::registry()
        .with(layers)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meetsum={}", config.log_level)))
}

fn file_layer(config: &LogConfig) -> Result<BoxedLayer> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = RollingFileAppender::builder()
        .rotation(config.rotation.clone())
        .filename_prefix(LOG_FILENAME)
        .build(&config.log_dir)?;
    let layer = if config.json_format {
        fmt::layer()
            .json().with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true)
            .with_filter(env_filter(config)).boxed()
    } else {
        fmt::layer()
            .with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_target(true).with_ansi(false)
            .with_filter(env_filter(config)).boxed()
    };
    Ok(layer)
}

fn screen_layer(config: &LogConfig) -> BoxedLayer {
    if config.json_format {
        fmt::layer()
            .json().with_writer(std::io::stderr)
            .with_current_span(true).with_target(true)
            .with_filter(env_filter(config)).boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr).with_target(false)
            .with_ansi(true).with_filter(env_filter(config)).boxed()
    }
}

/// Parse rotation period from string. Unknown values mean no rotation.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}
