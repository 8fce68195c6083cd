use std::io;
use std::path::PathBuf;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("{program} not found. Fix with: {hint}")]
    RasterizerNotFound { program: String, hint: &'static str },
    #[error("SVG not found at {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("failed to launch {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{tool} failed (exit {}):\n{stderr}", exit_label(.status))]
    RenderFailed {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },
    #[error("{tool} failed (exit {}):\n{stderr}", exit_label(.status))]
    BundleFailed {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },
    #[error("filesystem error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("raster image error: {0}")]
    Image(#[from] image::ImageError),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> IconError {
        let path = path.into();
        move |source| IconError::Io { path, source }
    }
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}
