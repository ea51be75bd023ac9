use crate::core::extract::extract;
use crate::core::persist::persist;
use crate::core::{
    CustomerApi, CustomerPayload, PayloadFile, PayloadSource, RunOutcome, Storage,
};
use crate::utils::error::{Result, VanMoofError};
use std::fmt;
use std::path::Path;

/// Run stages. Every stage either advances or ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Loading,
    Authenticating,
    Fetching,
    Extracting,
    Persisting,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Loading => "loading",
            Self::Authenticating => "authenticating",
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Persisting => "persisting",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Sequences authenticate, fetch, extract and persist for one run.
pub struct KeyPipeline<A: CustomerApi, S: Storage> {
    api: A,
    storage: S,
}

impl<A: CustomerApi, S: Storage> KeyPipeline<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self { api, storage }
    }

    pub async fn run(&self, source: PayloadSource) -> Result<RunOutcome> {
        let mut stage = Stage::Start;
        let result = self.run_stages(source, &mut stage).await;

        match &result {
            Ok(_) => tracing::debug!("Pipeline reached stage: {}", Stage::Done),
            Err(e) => {
                tracing::error!("Pipeline failed while {}: {}", stage, e);
                tracing::debug!("Pipeline reached stage: {}", Stage::Failed);
            }
        }

        result
    }

    async fn run_stages(&self, source: PayloadSource, stage: &mut Stage) -> Result<RunOutcome> {
        match source {
            PayloadSource::LocalFile(path) => {
                advance(stage, Stage::Loading);
                tracing::info!("Loading data from local file: {}", path.display());
                let payload = self.load(&path).await?;

                advance(stage, Stage::Extracting);
                let record = extract(&payload)?;

                Ok(RunOutcome {
                    record,
                    file: PayloadFile::Loaded(path),
                })
            }
            PayloadSource::Live(credentials) => {
                advance(stage, Stage::Authenticating);
                tracing::info!("Fetching data from API for user: {}", credentials.username);
                let token = self.api.authenticate(credentials).await?;

                advance(stage, Stage::Fetching);
                let payload = self.api.fetch_customer_data(&token).await?;

                advance(stage, Stage::Extracting);
                let record = extract(&payload)?;

                advance(stage, Stage::Persisting);
                let path = persist(&self.storage, &payload, &record).await?;

                Ok(RunOutcome {
                    record,
                    file: PayloadFile::Persisted(path),
                })
            }
        }
    }

    async fn load(&self, path: &Path) -> Result<CustomerPayload> {
        let raw = self.storage.read_file(path).await?;
        CustomerPayload::from_slice(raw).map_err(|source| VanMoofError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    tracing::debug!("Pipeline stage: {} -> {}", stage, next);
    *stage = next;
}
