use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while materializing the layout on disk.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A directory was expected but something else occupies the path
    /// (or a file was expected and a directory is there).
    #[error("`{}` is occupied by an entry of the wrong type", .path.display())]
    FilesystemConflict {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("parent directory of `{}` does not exist", .path.display())]
    MissingParent { path: PathBuf, source: io::Error },

    #[error("permission denied: `{}`", .path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },

    #[error("i/o error at `{}`", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Problems with the embedded template itself.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to parse layout manifest")]
    Manifest(#[from] serde_yaml::Error),

    #[error("layout manifest `{0}` is missing from the template")]
    MissingManifest(&'static str),

    #[error("template `{}` is not valid UTF-8", .0.display())]
    NotText(PathBuf),

    #[error("template `{}` lives in a directory the layout does not declare", .0.display())]
    UndeclaredParent(PathBuf),
}

impl ScaffoldError {
    pub(crate) fn conflict(path: impl Into<PathBuf>) -> Self {
        Self::FilesystemConflict {
            path: path.into(),
            source: None,
        }
    }

    /// Classify an error raised while creating a directory.
    pub(crate) fn from_dir_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotADirectory | io::ErrorKind::AlreadyExists => {
                Self::FilesystemConflict {
                    path,
                    source: Some(source),
                }
            }
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Classify an error raised while opening or writing a file.
    pub(crate) fn from_file_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::MissingParent { path, source },
            io::ErrorKind::IsADirectory | io::ErrorKind::NotADirectory => {
                Self::FilesystemConflict {
                    path,
                    source: Some(source),
                }
            }
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FilesystemConflict { path, .. }
            | Self::MissingParent { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}
