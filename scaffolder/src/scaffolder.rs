use std::{
    fmt, fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use crate::{
    error::ScaffoldError,
    template::{DirectorySet, FileTable, Template},
};

/// Materializes a [`Template`] under a root directory.
///
/// Directories are ensured first, then every file is written with
/// create + truncate, so existing content is always replaced. Nothing is
/// rolled back when a step fails.
pub struct Scaffolder {
    root: PathBuf,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub dirs_created: usize,
    pub dirs_existing: usize,
    pub files_created: usize,
    pub files_overwritten: usize,
}

impl Scaffolder {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run(&self, template: &Template) -> Result<Report, ScaffoldError> {
        let mut report = Report::default();

        log::debug!("ensure {} directories", template.directories.len());
        self.ensure_directories(&template.directories, &mut report)?;

        log::debug!("write {} files", template.files.len());
        self.write_files(&template.files, &mut report)?;

        Ok(report)
    }

    pub fn ensure_directories(
        &self,
        dirs: &DirectorySet,
        report: &mut Report,
    ) -> Result<(), ScaffoldError> {
        for rel_path in dirs.iter() {
            let path = self.root.join(rel_path);

            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => {
                    log::debug!("dir exists: {}", rel_path.display());
                    report.dirs_existing += 1;
                }
                Ok(_) => return Err(ScaffoldError::conflict(path)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("create dir: {}", rel_path.display());
                    fs::create_dir_all(&path).map_err(|e| ScaffoldError::from_dir_io(&path, e))?;
                    report.dirs_created += 1;
                }
                Err(e) => return Err(ScaffoldError::from_dir_io(path, e)),
            }
        }

        Ok(())
    }

    pub fn write_files(&self, files: &FileTable, report: &mut Report) -> Result<(), ScaffoldError> {
        for (rel_path, contents) in files.iter() {
            let path = self.root.join(rel_path);

            let existed = fs::symlink_metadata(&path).is_ok();
            if existed {
                log::debug!("overwrite file: {}", rel_path.display());
            } else {
                log::debug!("create file: {}", rel_path.display());
            }

            write_truncate(&path, contents).map_err(|e| ScaffoldError::from_file_io(&path, e))?;

            if existed {
                report.files_overwritten += 1;
            } else {
                report.files_created += 1;
            }
        }

        Ok(())
    }
}

/// Parent directories are never created here.
fn write_truncate(path: &Path, contents: &str) -> io::Result<()> {
    fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?
        .write_all(contents.as_bytes())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dirs created, {} already present; {} files created, {} overwritten",
            self.dirs_created, self.dirs_existing, self.files_created, self.files_overwritten
        )
    }
}
