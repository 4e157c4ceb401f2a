//! Document locations and location templates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::LoadError;

/// Maximum allowed length for a substituted subject or data model name
const MAX_SEGMENT_LENGTH: usize = 200;

/// Where a document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    /// HTTP or HTTPS URL
    Url(String),
    /// Local filesystem path
    Path(PathBuf),
}

impl DocumentLocation {
    /// Parse a location string
    ///
    /// `http://` and `https://` prefixes are URLs, anything else is a path.
    pub fn parse(location: &str) -> Self {
        if is_url(location) {
            DocumentLocation::Url(location.to_string())
        } else {
            DocumentLocation::Path(PathBuf::from(location))
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, DocumentLocation::Url(_))
    }
}

impl fmt::Display for DocumentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentLocation::Url(url) => f.write_str(url),
            DocumentLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for DocumentLocation {
    fn from(location: &str) -> Self {
        Self::parse(location)
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Validate a subject or data model name before substitution.
///
/// Only alphanumerics, `-`, `_` and `.` are accepted, and the value may not
/// start with `.`.
fn validate_segment(label: &str, value: &str) -> Result<(), LoadError> {
    if value.is_empty() {
        return Err(LoadError::InvalidLocation(format!("{} cannot be empty", label)));
    }

    if value.len() > MAX_SEGMENT_LENGTH {
        return Err(LoadError::InvalidLocation(format!(
            "{} too long (max {} characters)",
            label, MAX_SEGMENT_LENGTH
        )));
    }

    if !value.chars().all(is_segment_char) {
        return Err(LoadError::InvalidLocation(format!(
            "{} '{}' contains invalid characters",
            label, value
        )));
    }

    if value.starts_with('.') {
        return Err(LoadError::InvalidLocation(format!(
            "{} '{}' cannot start with a period",
            label, value
        )));
    }

    Ok(())
}

fn is_segment_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.')
}

#[cfg(feature = "http-loader")]
fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(not(feature = "http-loader"))]
fn encode_segment(value: &str) -> String {
    value.to_string()
}

/// A location template with `{subject}` and `{datamodel}` placeholders
///
/// # Example
///
/// ```rust
/// use sdm_sql_schema::loader::UrlTemplate;
///
/// let template = UrlTemplate::new("https://example.org/dataModel.{subject}/{datamodel}/model.yaml");
/// let location = template.expand("Building", "Building").unwrap();
/// assert_eq!(
///     location.to_string(),
///     "https://example.org/dataModel.Building/Building/model.yaml"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute subject and data model into the template.
    ///
    /// Non-ASCII letters are percent-encoded when the template is a URL.
    pub fn expand(&self, subject: &str, datamodel: &str) -> Result<DocumentLocation, LoadError> {
        validate_segment("subject", subject)?;
        validate_segment("datamodel", datamodel)?;

        let (subject, datamodel) = if is_url(&self.0) {
            (encode_segment(subject), encode_segment(datamodel))
        } else {
            (subject.to_string(), datamodel.to_string())
        };

        let expanded = self
            .0
            .replace("{subject}", &subject)
            .replace("{datamodel}", &datamodel);
        Ok(DocumentLocation::parse(&expanded))
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
