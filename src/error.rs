use std::path::PathBuf;

use crate::hunt::Expansion;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not load image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no circles detected")]
    NoMarkers,

    #[error("cannot render an empty path")]
    EmptyPath,

    #[error("debug directory is not empty: {}", .0.display())]
    DebugDirNotEmpty(PathBuf),

    #[error("hunt mark data {}: {message}", path.display())]
    Catalog { path: PathBuf, message: String },

    #[error("no {expansion} hunt mark with map code {map_code}")]
    MarkNotFound { expansion: Expansion, map_code: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    /// True for outcomes that just mean "nothing to draw on this map".
    pub fn is_no_markers(&self) -> bool {
        matches!(self, Error::NoMarkers | Error::ImageDecode { .. })
    }
}
