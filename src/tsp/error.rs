use std::{io, path::PathBuf};

use thiserror::Error as ThisError;

use super::point::NodeId;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("could not read file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no points to tour")]
    EmptyCollection,
    #[error("start node {0} is not in the problem")]
    InvalidStartIdentifier(NodeId),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
