use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Fatal error config file: no `taskhelper` config found (looked in {})", display_paths(.0))]
    ConfigNotFound(Vec<PathBuf>),

    #[error("Fatal error config file: failed to read '{}': {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Fatal error config file: failed to parse '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("A Template wasn't found for `{0}`")]
    MissingAddTemplate(String),

    #[error("failed to run `{program}`: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("'{}'", path.display()))
        .collect::<Vec<String>>()
        .join(", ")
}
