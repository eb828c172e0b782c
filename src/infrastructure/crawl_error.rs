//! Error types for the catalog crawl
//!
//! Every failure aborts the run: nothing here is retried or recovered
//! locally. The variants say which expectation broke so a human can tell a
//! transport hiccup apart from a catalog markup change.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrawlError {
    #[error("Fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Parsing {url} failed: {reason}")]
    Parse { url: String, reason: String },

    #[error("Expected page control '{control}' not found (catalog layout changed?)")]
    Structure { control: String },

    #[error("Required field '{field}' not found in product markup")]
    MissingField { field: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Writing dataset to {path} failed: {reason}")]
    Output { path: String, reason: String },
}

impl CrawlError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(url: &str, reason: impl ToString) -> Self {
        Self::Parse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn structure(control: &str) -> Self {
        Self::Structure {
            control: control.to_string(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn output(path: &str, reason: impl ToString) -> Self {
        Self::Output {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the error points at the catalog markup rather than the
    /// network or local I/O.
    pub fn is_layout_change(&self) -> bool {
        matches!(self, Self::Structure { .. } | Self::MissingField { .. })
    }
}

pub type CrawlResult<T> = Result<T, CrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_change_classification() {
        assert!(CrawlError::structure("select.change-pages").is_layout_change());
        assert!(CrawlError::missing_field("price").is_layout_change());
        assert!(!CrawlError::fetch("https://example.com", "timeout").is_layout_change());
        assert!(!CrawlError::output("out.csv", "denied").is_layout_change());
    }

    #[test]
    fn test_messages_name_the_broken_expectation() {
        let err = CrawlError::missing_field("discount_rate");
        assert_eq!(
            err.to_string(),
            "Required field 'discount_rate' not found in product markup"
        );

        let err = CrawlError::structure("select.form-control.change-pages");
        assert!(err.to_string().contains("select.form-control.change-pages"));
    }
}
