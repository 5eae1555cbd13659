use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use playground_engine::{ExecutionSettings, DEFAULT_ENDPOINT};

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "playground",
    version,
    about = "Terminal code playground backed by a remote execution service"
)]
pub struct Cli {
    /// Execution service URL that receives the POSTed code.
    #[arg(long, env = "PLAYGROUND_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Abort a run after this many seconds. Unbounded when omitted.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(long, default_value = "playground.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn execution_settings(&self) -> ExecutionSettings {
        ExecutionSettings {
            endpoint: self.endpoint.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ExecutionSettings::default()
        }
    }
}
