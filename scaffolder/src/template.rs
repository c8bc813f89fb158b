use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use include_dir::{Dir, DirEntry, include_dir};

use crate::{
    config::{self, Layout},
    error::TemplateError,
};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/template");

/// Directories to ensure exist, relative to the scaffold root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySet(Vec<PathBuf>);

impl DirectorySet {
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    /// Whether ensuring this set leaves a directory at `path`, either
    /// because it is listed or because it is an intermediate of a listed one.
    #[must_use]
    pub fn covers(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        path.as_os_str().is_empty() || self.0.iter().any(|p| p.starts_with(path))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for DirectorySet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// File path -> literal content, written verbatim. Keys are unique and
/// iterated in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTable(BTreeMap<PathBuf, &'static str>);

impl FileTable {
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: &'static str) {
        self.0.insert(path.into(), contents);
    }

    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&'static str> {
        self.0.get(path.as_ref()).copied()
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &'static str)> {
        self.0.iter().map(|(p, c)| (p.as_path(), *c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<(P, &'static str)> for FileTable {
    fn from_iter<I: IntoIterator<Item = (P, &'static str)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(p, c)| (p.into(), c)).collect())
    }
}

/// Everything one scaffold run writes.
#[derive(Debug, Clone)]
pub struct Template {
    pub directories: DirectorySet,
    pub files: FileTable,
    pub message: String,
}

impl Template {
    /// The portfolio template compiled into the binary.
    pub fn embedded() -> Result<Self, TemplateError> {
        Self::from_dir(&TEMPLATE_DIR)
    }

    pub fn from_dir(dir: &Dir<'static>) -> Result<Self, TemplateError> {
        let manifest = dir
            .get_file(config::LAYOUT_FILE)
            .ok_or(TemplateError::MissingManifest(config::LAYOUT_FILE))?;
        let manifest = manifest
            .contents_utf8()
            .ok_or_else(|| TemplateError::NotText(manifest.path().to_path_buf()))?;
        let layout = Layout::from_yaml(manifest)?;

        let mut files = FileTable::default();
        collect_files(dir, &mut files)?;

        let template = Self {
            directories: layout.directories.into_iter().collect(),
            files,
            message: layout.message,
        };
        template.check_parents()?;

        Ok(template)
    }

    /// Every file must land either in the root or in a declared directory,
    /// otherwise the write would hit a missing parent.
    fn check_parents(&self) -> Result<(), TemplateError> {
        for (path, _) in self.files.iter() {
            let parent = path.parent().unwrap_or_else(|| Path::new(""));
            if !self.directories.covers(parent) {
                return Err(TemplateError::UndeclaredParent(path.to_path_buf()));
            }
        }
        Ok(())
    }
}

fn collect_files(dir: &Dir<'static>, files: &mut FileTable) -> Result<(), TemplateError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => {
                collect_files(subdir, files)?;
            }
            DirEntry::File(file) => {
                let path = file.path();
                if path == Path::new(config::LAYOUT_FILE) {
                    continue;
                }

                let contents = file
                    .contents_utf8()
                    .ok_or_else(|| TemplateError::NotText(path.to_path_buf()))?;
                files.insert(path, contents);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use include_dir::File;

    use super::*;

    #[test]
    fn embedded_layout() {
        let template = Template::embedded().unwrap();

        let dirs: Vec<_> = template.directories.iter().collect();
        assert_eq!(
            dirs,
            [
                "app/about",
                "app/projects",
                "app/contact",
                "components",
                "public"
            ]
            .map(Path::new)
        );

        let files: Vec<_> = template.files.iter().map(|(p, _)| p).collect();
        assert_eq!(
            files,
            [
                "app/layout.jsx",
                "app/page.jsx",
                "components/AboutSection.jsx",
                "components/ContactSection.jsx",
                "components/Footer.jsx",
                "components/HeroSection.jsx",
                "components/Navbar.jsx",
                "components/ProjectsSection.jsx",
            ]
            .map(Path::new)
        );

        assert_eq!(template.message, "✅ Portfolio structure created successfully!");
    }

    #[test]
    fn manifest_is_not_a_template_file() {
        let template = Template::embedded().unwrap();
        assert!(template.files.get(config::LAYOUT_FILE).is_none());
    }

    #[test]
    fn embedded_contents() {
        let template = Template::embedded().unwrap();

        let page = template.files.get("app/page.jsx").unwrap();
        assert!(page.starts_with("import HeroSection from \"@/components/HeroSection\";\n"));
        assert!(page.ends_with("}\n"));

        let projects = template.files.get("components/ProjectsSection.jsx").unwrap();
        assert!(projects.contains("className={`p-6 rounded-2xl bg-gradient-to-br ${p.color}"));
        assert!(!projects.contains('\\'));
    }

    static UNDECLARED: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new(
                "layout.yaml",
                b"directories:\n  - components\nmessage: ok\n",
            )),
            DirEntry::File(File::new("index.jsx", b"root\n")),
            DirEntry::Dir(Dir::new(
                "lib",
                &[DirEntry::File(File::new("lib/util.jsx", b"util\n"))],
            )),
        ],
    );

    #[test]
    fn undeclared_parent() {
        let err = Template::from_dir(&UNDECLARED).unwrap_err();
        assert!(
            matches!(&err, TemplateError::UndeclaredParent(p) if p == Path::new("lib/util.jsx"))
        );
    }

    static NO_MANIFEST: Dir = Dir::new("", &[DirEntry::File(File::new("a.jsx", b"a\n"))]);

    #[test]
    fn missing_manifest() {
        assert!(matches!(
            Template::from_dir(&NO_MANIFEST),
            Err(TemplateError::MissingManifest(_))
        ));
    }

    static BINARY: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("layout.yaml", b"directories: []\nmessage: ok\n")),
            DirEntry::File(File::new("logo.bin", &[0xff, 0xfe, 0x00])),
        ],
    );

    #[test]
    fn binary_template() {
        assert!(matches!(
            Template::from_dir(&BINARY),
            Err(TemplateError::NotText(_))
        ));
    }

    #[test]
    fn covers_intermediate_directories() {
        let dirs: DirectorySet = ["app/about", "components"].into_iter().collect();
        assert!(dirs.covers(""));
        assert!(dirs.covers("app"));
        assert!(dirs.covers("app/about"));
        assert!(dirs.covers("components"));
        assert!(!dirs.covers("app/contact"));
        assert!(!dirs.covers("comp"));
    }

    #[test]
    fn file_table_keys_are_unique() {
        let table: FileTable = [("a.jsx", "one"), ("a.jsx", "two")].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a.jsx"), Some("two"));
    }
}
