use serde::Deserialize;

/// Separator placed between the non-empty parts of a fragment
pub const FRAGMENT_SEPARATOR: &str = "--";

/// Short quote used to fill a placeholder file
///
/// Every part is optional; a provider that cannot deliver anything hands out
/// `Fragment::default()`, which renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fragment {
    #[serde(default)]
    content: Option<String>,
    #[serde(default, alias = "source")]
    form: Option<String>,
    #[serde(default, alias = "attribution")]
    creator: Option<String>,
}

impl Fragment {
    pub fn new(content: Option<String>, form: Option<String>, creator: Option<String>) -> Self {
        Fragment {
            content,
            form,
            creator,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    /// Text embedded into the rendered file
    pub fn text(&self) -> String {
        [&self.content, &self.form, &self.creator]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR)
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}
