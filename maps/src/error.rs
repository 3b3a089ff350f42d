use std::path::PathBuf;
use thiserror::Error;

use crate::types::MapName;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map {0} is registered more than once")]
    DuplicateMap(MapName),
    #[error("unknown map {0}")]
    UnknownMap(String),
    #[error("failed to read asset {path:?}")]
    AssetIo {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to decode asset {path:?}")]
    AssetDecode {
        path: PathBuf,
        #[source]
        err: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
