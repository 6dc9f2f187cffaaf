// SPDX-License-Identifier: MPL-2.0
//! Markdown document source.
//!
//! Pages live under `pages/<route segments>/index.md`, either compiled into
//! the binary or read from a directory given on the command line or in the
//! config file.

use crate::app::state::NavigationPath;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fmt;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "docs/"]
struct Bundled;

pub const PAGES_DIR: &str = "pages";
pub const PAGE_FILE: &str = "index.md";

/// Location of a markdown file relative to the documentation root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath(Vec<String>);

impl DocumentPath {
    /// `["pages"] ++ path ++ ["index.md"]`.
    #[must_use]
    pub fn for_page(path: &NavigationPath) -> Self {
        let mut segments = Vec::with_capacity(path.segments().len() + 2);
        segments.push(PAGES_DIR.to_string());
        segments.extend(path.segments().iter().cloned());
        segments.push(PAGE_FILE.to_string());
        Self(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    // Route segments come straight from user input.
    fn validate(&self) -> Result<()> {
        let unsafe_segment = self.0.iter().find(|segment| {
            segment.is_empty()
                || *segment == "."
                || *segment == ".."
                || segment.contains(['/', '\\'])
        });
        match unsafe_segment {
            Some(_) => Err(Error::DocumentNotFound(self.to_string())),
            None => Ok(()),
        }
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Where documents are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentSource {
    /// Pages compiled into the binary.
    #[default]
    Embedded,
    /// A documentation root on disk containing a `pages/` directory.
    Directory(PathBuf),
}

impl DocumentSource {
    /// Picks the directory source when a root is given, embedded otherwise.
    #[must_use]
    pub fn from_root(root: Option<PathBuf>) -> Self {
        root.map_or(DocumentSource::Embedded, DocumentSource::Directory)
    }

    /// Reads the document at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`Error::DocumentNotFound`] when no file exists at the path or the path
    /// contains traversal segments, [`Error::InvalidDocument`] when the file is
    /// not valid UTF-8, [`Error::Io`] for other read failures.
    pub async fn fetch(&self, path: &DocumentPath) -> Result<String> {
        path.validate()?;

        let bytes = match self {
            DocumentSource::Embedded => Bundled::get(&path.to_string())
                .map(|file| file.data.into_owned())
                .ok_or_else(|| Error::DocumentNotFound(path.to_string()))?,
            DocumentSource::Directory(root) => {
                let full: PathBuf = path.segments().iter().fold(root.clone(), |acc, s| acc.join(s));
                match tokio::fs::read(&full).await {
                    Ok(bytes) => bytes,
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                        return Err(Error::DocumentNotFound(path.to_string()));
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };

        String::from_utf8(bytes).map_err(|err| Error::InvalidDocument {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{self, MENU};
    use tempfile::tempdir;

    fn page(segments: &[&str]) -> DocumentPath {
        DocumentPath::for_page(&NavigationPath::from(segments))
    }

    #[test]
    fn document_path_wraps_route_segments() {
        assert_eq!(
            page(&["usage", "installation"]).segments(),
            ["pages", "usage", "installation", "index.md"]
        );
        assert_eq!(page(&[]).to_string(), "pages/index.md");
    }

    #[test]
    fn from_root_selects_source() {
        assert_eq!(DocumentSource::from_root(None), DocumentSource::Embedded);
        assert_eq!(
            DocumentSource::from_root(Some(PathBuf::from("/tmp/docs"))),
            DocumentSource::Directory(PathBuf::from("/tmp/docs"))
        );
    }

    #[tokio::test]
    async fn every_menu_leaf_has_a_bundled_page() {
        for leaf in menu::leaves(MENU) {
            let path = DocumentPath::for_page(&NavigationPath::from(leaf.path));
            let text = DocumentSource::Embedded.fetch(&path).await;
            assert!(text.is_ok(), "missing bundled page for {}", leaf.label);
        }
    }

    #[tokio::test]
    async fn embedded_missing_page_is_not_found() {
        let result = DocumentSource::Embedded.fetch(&page(&["nope"])).await;
        assert!(matches!(result, Err(Error::DocumentNotFound(_))));
    }

    #[tokio::test]
    async fn traversal_segments_are_rejected() {
        let dir = tempdir().unwrap();
        let source = DocumentSource::Directory(dir.path().to_path_buf());
        for segments in [&[".."][..], &["."], &[""], &["a/b"], &["a\\b"]] {
            let result = source.fetch(&page(segments)).await;
            assert!(matches!(result, Err(Error::DocumentNotFound(_))), "{segments:?}");
        }
    }

    #[tokio::test]
    async fn directory_source_reads_pages() {
        let dir = tempdir().unwrap();
        let page_dir = dir.path().join("pages").join("usage");
        std::fs::create_dir_all(&page_dir).unwrap();
        std::fs::write(page_dir.join("index.md"), "# Usage\n").unwrap();

        let source = DocumentSource::Directory(dir.path().to_path_buf());
        let text = source.fetch(&page(&["usage"])).await.unwrap();
        assert_eq!(text, "# Usage\n");
    }

    #[tokio::test]
    async fn directory_missing_page_is_not_found() {
        let dir = tempdir().unwrap();
        let source = DocumentSource::Directory(dir.path().to_path_buf());
        let result = source.fetch(&page(&["usage"])).await;
        assert_eq!(
            result,
            Err(Error::DocumentNotFound("pages/usage/index.md".into()))
        );
    }

    #[tokio::test]
    async fn non_utf8_page_is_invalid() {
        let dir = tempdir().unwrap();
        let pages = dir.path().join("pages");
        std::fs::create_dir_all(&pages).unwrap();
        std::fs::write(pages.join("index.md"), [0xff, 0xfe, 0x00]).unwrap();

        let source = DocumentSource::Directory(dir.path().to_path_buf());
        let result = source.fetch(&page(&[])).await;
        assert!(matches!(result, Err(Error::InvalidDocument { .. })));
    }
}
