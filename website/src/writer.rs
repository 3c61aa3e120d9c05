//! Writes website output files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Writes files below an output root and remembers the pages for the sitemap.
#[derive(Debug)]
pub struct SiteWriter {
    root: PathBuf,
    pages: Vec<String>,
    files: Vec<PathBuf>,
}

impl SiteWriter {
    /// A writer rooted at `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            pages: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Writes `content` to `relative`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot be written.
    pub fn write(&mut self, relative: &str, content: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Cannot write file: {}", path.display()))?;
        self.files.push(path);
        Ok(())
    }

    /// Writes an HTML page served at the directory URL `url_path`
    /// (e.g. `/debian/`) and records it for the sitemap.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn page(&mut self, url_path: &str, html: &str) -> Result<()> {
        let relative = format!("{}index.html", url_path.trim_start_matches('/'));
        self.write(&relative, html)?;
        self.pages.push(url_path.to_string());
        Ok(())
    }

    /// Site-relative URLs of the pages written so far.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Consumes the writer, returning every file written.
    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_land_in_index_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut writer = SiteWriter::new(dir.path());
        writer.page("/", "<p>home</p>")?;
        writer.page("/debian/", "<p>deb</p>")?;
        writer.write("css/style.css", "body{}")?;

        assert_eq!(writer.pages(), ["/", "/debian/"]);
        assert_eq!(fs::read_to_string(dir.path().join("debian/index.html"))?, "<p>deb</p>");
        assert!(dir.path().join("index.html").is_file());
        assert_eq!(writer.into_files().len(), 3);
        Ok(())
    }
}
