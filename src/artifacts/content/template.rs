use rand::Rng;

/// Source-file skeleton a placeholder file is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Html,
    JavaScript,
    TypeScript,
    Vue,
    Tsx,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Html,
        TemplateKind::JavaScript,
        TemplateKind::TypeScript,
        TemplateKind::Vue,
        TemplateKind::Tsx,
    ];

    /// Pick one variant uniformly
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TemplateKind::Html => "html",
            TemplateKind::JavaScript => "js",
            TemplateKind::TypeScript => "ts",
            TemplateKind::Vue => "vue",
            TemplateKind::Tsx => "tsx",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }

    /// Embed `text` verbatim into the skeleton; nothing is escaped
    pub fn render(&self, text: &str) -> String {
        match self {
            TemplateKind::Html => format!(
                r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Title</title>
</head>
<body>
    {text}
</body>
</html>
"#
            ),
            TemplateKind::JavaScript => format!(
                r#"export function generateDoc(){{
    return '{text}'
}}
"#
            ),
            TemplateKind::TypeScript => format!(
                r#"export function generateDoc():string{{
    return '{text}'
}}
"#
            ),
            TemplateKind::Vue => format!(
                r#"<template>
  <div>{text}</div>
</template>

<script setup lang="ts"></script>

<style scoped></style>
"#
            ),
            TemplateKind::Tsx => format!(
                r#"const NotFound = () => {{
  return <div>{text}</div>
}}

export default NotFound
"#
            ),
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
