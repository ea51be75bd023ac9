use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Account login. Moved into the authenticator and dropped once the
/// request has been built.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Session token returned by `/authenticate`, valid for a single run.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Account payload as returned by `/getCustomerData` or loaded from disk.
///
/// The original bytes are kept next to the parsed tree so that the file
/// written after a live fetch is byte-identical to the response body.
#[derive(Debug, Clone)]
pub struct CustomerPayload {
    raw: Vec<u8>,
    value: serde_json::Value,
}

impl CustomerPayload {
    pub fn from_slice(raw: Vec<u8>) -> serde_json::Result<Self> {
        let value = serde_json::from_slice(&raw)?;
        Ok(Self { raw, value })
    }

    pub fn from_value(value: serde_json::Value) -> Self {
        let raw = value.to_string().into_bytes();
        Self { raw, value }
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device_type: String,
    pub frame_number: String,
    pub mac_address: String,
    pub encryption_key: String,
    pub passcode: String,
}

#[derive(Debug, Clone)]
pub enum PayloadSource {
    Live(Credentials),
    LocalFile(PathBuf),
}

/// Where the payload behind a record lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadFile {
    /// Written by this run after a live fetch.
    Persisted(PathBuf),
    /// The local file the payload was loaded from.
    Loaded(PathBuf),
}

impl PayloadFile {
    pub fn path(&self) -> &Path {
        match self {
            Self::Persisted(path) | Self::Loaded(path) => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub record: DeviceRecord,
    pub file: PayloadFile,
}
