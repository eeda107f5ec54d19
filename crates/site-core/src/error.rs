use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("particle count must be at least 1")]
    EmptyPool,
    #[error("no sections configured")]
    NoSections,
    #[error("section `{0}` is listed more than once")]
    DuplicateSection(String),
    #[error("default section `{0}` is not one of the configured sections")]
    UnknownDefault(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("`{0}` is required")]
    MissingField(&'static str),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}
