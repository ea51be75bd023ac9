use crate::core::client::{DEFAULT_API_BASE_URL, DEFAULT_API_KEY, DEFAULT_TIMEOUT_SECS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "vanmoof-key-extractor")]
#[command(about = "Retrieve the encryption key and passcode of a VanMoof bike")]
#[command(after_help = "Examples:\n  \
    vanmoof-key-extractor -u rider@example.com -p yourpassword\n  \
    vanmoof-key-extractor -j ~/Downloads/VanMoof_S3_ABC123.json")]
pub struct CliConfig {
    /// Account username; prompted for when missing
    #[arg(short, long)]
    pub username: Option<String>,

    /// Account password; prompted for (without echo) when missing
    #[arg(short, long)]
    pub password: Option<String>,

    /// Parse a previously saved JSON file instead of querying the API
    #[arg(short, long = "json", value_name = "FILE")]
    pub json_file: Option<PathBuf>,

    /// Directory the fetched JSON is written to [default: your downloads folder]
    #[arg(short, long, env = "VANMOOF_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, env = "VANMOOF_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    #[arg(long, env = "VANMOOF_API_KEY", default_value = DEFAULT_API_KEY, hide_default_value = true)]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 600)?;
        if let Some(json_file) = &self.json_file {
            validate_path("json", json_file)?;
        }
        if let Some(output_dir) = &self.output_dir {
            validate_path("output_dir", output_dir)?;
        }
        Ok(())
    }
}

/// The user's download directory, `~/Downloads` when the platform has
/// none, or the working directory as a last resort.
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}
