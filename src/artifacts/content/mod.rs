//! Placeholder file content
//!
//! - `fragment`: short quote fetched from a content provider
//! - `template`: the fixed source-file skeletons a fragment is embedded into
//! - `synthetic_file`: one rendered file, ready to be written

pub mod fragment;
pub mod synthetic_file;
pub mod template;

use crate::artifacts::content::fragment::Fragment;
use crate::artifacts::content::synthetic_file::SyntheticFile;
use crate::artifacts::content::template::TemplateKind;
use crate::errors::HistoryError;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Whether a file named `<base_name>.<ext>` exists in `directory` for any template
pub fn is_taken(directory: &Path, base_name: &str) -> bool {
    TemplateKind::ALL
        .iter()
        .any(|kind| directory.join(format!("{base_name}.{}", kind.extension())).exists())
}

/// Render `fragment` into a randomly chosen template and write it to
/// `<directory>/<base_name>.<ext>`
pub fn render<R: Rng + ?Sized>(
    directory: &Path,
    base_name: &str,
    fragment: &Fragment,
    rng: &mut R,
) -> Result<PathBuf, HistoryError> {
    let kind = TemplateKind::choose(rng);

    SyntheticFile::render(directory, base_name, kind, &fragment.text()).write()
}
