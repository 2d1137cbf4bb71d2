//! Placeholder substitution for template text

use crate::error::{Result, ScaffoldError};
use crate::variant::VariantConfig;

/// Token replaced with the stylesheet file extension
pub const STYLE_EXT: &str = "styleExt";

/// Token replaced with the webpack loader for the stylesheet language
pub const STYLE_LOADER: &str = "styleLoader";

/// Immutable placeholder name -> replacement mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    values: Vec<(&'static str, String)>,
}

impl Placeholders {
    /// The recognized placeholders, filled from a resolved variant
    pub fn for_variant(variant: &VariantConfig) -> Self {
        Self {
            values: vec![
                (STYLE_EXT, variant.style_file_extension().to_string()),
                (STYLE_LOADER, variant.style_loader_name().to_string()),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace every `{{name}}` occurrence of each recognized placeholder
    pub fn substitute(&self, text: &str) -> String {
        self.values.iter().fold(text.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{{{}}}}}", name), value)
        })
    }

    /// Substitute, then reject any `{{identifier}}` left behind
    pub fn render(&self, template_name: &str, text: &str) -> Result<String> {
        let rendered = self.substitute(text);
        if let Some(token) = find_placeholder(&rendered) {
            return Err(ScaffoldError::UnknownPlaceholder {
                template: template_name.to_string(),
                token: token.to_string(),
            });
        }
        Ok(rendered)
    }
}

/// First `{{identifier}}` token in the text, if any
///
/// Only identifier characters count, so JSX object literals like `style={{ margin: 0 }}`
/// are not mistaken for placeholders.
pub fn find_placeholder(text: &str) -> Option<&str> {
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        if let Some(end) = after.find("}}") {
            let inner = &after[..end];
            if !inner.is_empty()
                && inner
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return Some(inner);
            }
        }
        rest = after;
    }
    None
}
