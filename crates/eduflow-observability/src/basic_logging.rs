use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crate targets that receive the configured level.
const TARGETS: [&str; 6] = [
    "eduflow",
    "eduflow_core",
    "eduflow_config",
    "eduflow_models",
    "eduflow_session",
    "eduflow_cli",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. Anything but `json` is compact.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

/// Filter directives giving every EduFlow crate `level`.
pub fn default_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` when set, otherwise every EduFlow crate at
///   `LOG_LEVEL` (default: "info")
/// - **Format**: `LOG_FORMAT=json` for one JSON object per line, compact
///   otherwise
///
/// Stdout stays reserved for command output.
///
/// # Panics
///
/// If a global subscriber is already installed.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let format = std::env::var("LOG_FORMAT")
        .map(|value| LogFormat::parse(&value))
        .unwrap_or_default();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&log_level)));

    let console_layer = match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(console_layer.with_filter(env_filter))
        .init();
}
