use thiserror::Error;

pub type Result<T, E = BeegenError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum BeegenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Missing {0}")]
    MissingArgument(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
