use crate::config::ConfigError;

/// Errors surfaced by the CLI, rendered by `main` as a single line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sdk(#[from] mailplatform::Error),

    #[error("Invalid {flag}: {source}")]
    InvalidJson {
        flag: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render output: {0}")]
    Output(#[source] serde_json::Error),
}

impl CliError {
    pub fn invalid_json(flag: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::InvalidJson { flag, source }
    }
}
