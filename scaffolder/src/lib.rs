use std::path::PathBuf;

use anyhow::Context as _;

mod config;
mod error;
mod scaffolder;
mod template;

pub use error::{ScaffoldError, TemplateError};
pub use scaffolder::{Report, Scaffolder};
pub use template::{DirectorySet, FileTable, Template};

/// Write the embedded portfolio template under `root`. Returns the run
/// report and the confirmation message to show the user.
pub fn scaffold(root: impl Into<PathBuf>) -> anyhow::Result<(Report, String)> {
    let template = Template::embedded().context("failed to load embedded template")?;

    let scaffolder = Scaffolder::new(root);
    log::debug!("scaffold into: {}", scaffolder.root().display());
    let report = scaffolder
        .run(&template)
        .context("failed to write portfolio structure")?;

    Ok((report, template.message))
}
