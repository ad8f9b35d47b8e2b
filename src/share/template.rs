//! Share URL templating.
//!
//! Templates carry a closed set of placeholders. Each placeholder is
//! replaced once, at its first occurrence; a template that repeats a
//! placeholder keeps the later copies verbatim.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped by `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL component.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Url,
    Title,
    Text,
}

impl Placeholder {
    /// Substitution order.
    pub const ALL: [Placeholder; 3] = [Placeholder::Url, Placeholder::Title, Placeholder::Text];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Url => "{url}",
            Placeholder::Title => "{title}",
            Placeholder::Text => "{text}",
        }
    }
}

/// Already-encoded values for each placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl TemplateValues {
    /// Encode raw values for substitution.
    pub fn encode(url: &str, title: &str, text: &str) -> Self {
        Self {
            url: encode_uri_component(url),
            title: encode_uri_component(title),
            text: encode_uri_component(text),
        }
    }

    fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Url => &self.url,
            Placeholder::Title => &self.title,
            Placeholder::Text => &self.text,
        }
    }
}

/// Substitute `values` into `template`. No validation is done.
pub fn render(template: &str, values: &TemplateValues) -> String {
    Placeholder::ALL
        .into_iter()
        .fold(template.to_string(), |acc, placeholder| {
            acc.replacen(placeholder.token(), values.get(placeholder), 1)
        })
}
