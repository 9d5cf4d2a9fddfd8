use clap::{ArgAction, Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "calc-indexd", version, about = "Calculator directory daemon.")]
struct CliArgs {
    #[arg(long, env = "CALC_INDEX_ADDR", default_value = DEFAULT_ADDR)]
    addr: SocketAddr,

    #[arg(
        long = "api",
        env = "CALC_INDEX_API",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    api_enabled: bool,

    #[arg(long, env = "CALC_INDEX_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub addr: SocketAddr,
    pub api_enabled: bool,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value:?}")
            }
        }
    }
}

impl Error for ConfigError {}

impl IndexConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for IndexConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let log_filter = args.log_filter.trim().to_string();
        if log_filter.is_empty() || EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "CALC_INDEX_LOG",
                value: args.log_filter,
            });
        }

        Ok(Self {
            addr: args.addr,
            api_enabled: args.api_enabled,
            log_filter,
        })
    }
}
