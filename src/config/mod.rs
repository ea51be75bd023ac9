#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
#[cfg(feature = "cli")]
pub mod prompt;

#[cfg(feature = "cli")]
pub use args::CliConfig;
