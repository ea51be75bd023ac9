pub mod auth;
pub mod client;
pub mod extract;
pub mod fetch;
pub mod persist;
pub mod pipeline;

pub use crate::domain::model::{
    AuthToken, Credentials, CustomerPayload, DeviceRecord, PayloadFile, PayloadSource, RunOutcome,
};
pub use crate::domain::ports::{ConfigProvider, CredentialsProvider, CustomerApi, Storage};
pub use crate::utils::error::Result;
