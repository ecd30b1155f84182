use crate::artifacts::content::template::TemplateKind;
use crate::errors::HistoryError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Placeholder source file, rendered once and then only written
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SyntheticFile {
    directory: PathBuf,
    base_name: String,
    kind: TemplateKind,
    content: String,
}

impl SyntheticFile {
    /// Render `text` into the skeleton of `kind`
    pub fn render(directory: &Path, base_name: &str, kind: TemplateKind, text: &str) -> Self {
        SyntheticFile::new(
            directory.to_path_buf(),
            base_name.to_string(),
            kind,
            kind.render(text),
        )
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.base_name, self.kind.extension())
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }

    /// Write the file, overwriting any previous one with the same name
    pub fn write(&self) -> Result<PathBuf, HistoryError> {
        let path = self.path();

        std::fs::write(&path, &self.content).map_err(|source| HistoryError::FileWrite {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_rendered_content_under_its_directory() {
        let dir = TempDir::new().unwrap();
        let file = SyntheticFile::render(dir.path(), "2024-03-01_042", TemplateKind::Tsx, "hi");

        let path = file.write().unwrap();

        assert_eq!(path, dir.path().join("2024-03-01_042.tsx"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), file.content());
        assert!(file.content().contains("<div>hi</div>"));
    }

    #[test]
    fn missing_directory_is_a_file_write_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let file = SyntheticFile::render(&missing, "2024-03-01_001", TemplateKind::Html, "");

        let error = file.write().unwrap_err();

        match error {
            HistoryError::FileWrite { path, .. } => {
                assert_eq!(path, missing.join("2024-03-01_001.html"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
