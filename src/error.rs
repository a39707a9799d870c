use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PktError {
    #[error("HOME is not set; pkt needs it to locate ~/.pkt")]
    HomeNotSet,

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("package catalog is empty")]
    EmptyCatalog,

    #[error("invalid package entry: {0}")]
    InvalidPackage(String),

    #[error("failed to run {script}: {source}")]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PktError>;
