pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{prompt::TerminalPrompt, CliConfig};

pub use config::cli::LocalStorage;
pub use core::{client::ApiClient, pipeline::KeyPipeline};
pub use domain::model::{
    Credentials, CustomerPayload, DeviceRecord, PayloadFile, PayloadSource, RunOutcome,
};
pub use utils::error::{Result, VanMoofError};
