//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, health), and their argument structs. Every `run`
//! flag has an environment variable equivalent for container deployments.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_NAME_SERVICE_URL;

#[derive(Parser)]
#[command(
    name = "greeting-relay",
    version,
    about = "Greeting relay with distributed-trace header propagation",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        greeting-relay run --name-service-url http://localhost:8081\n  \
        greeting-relay health http://localhost:8080"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay server
    Run(Box<RunArgs>),

    /// Check health of a running instance
    Health(HealthArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        greeting-relay run                                         Use $NAME_SERVICE_URL\n  \
        greeting-relay run --name-service-url http://names:8080    Explicit name service\n  \
        greeting-relay run -p 9000 --pretty                        Local dev mode")]
pub struct RunArgs {
    /// Base URL of the name service (`/api/name` is appended)
    #[arg(long, env = "NAME_SERVICE_URL", default_value = DEFAULT_NAME_SERVICE_URL)]
    pub name_service_url: String,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 65_536,
        help_heading = "Tuning"
    )]
    pub max_body: usize,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:8080")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
