//! Errors raised while driving a tooltip through its host

use thiserror::Error;

use crate::orbit::OrbitError;

/// Errors that can occur while attaching, showing or hiding a tooltip
#[derive(Debug, Error)]
pub enum TooltipError {
    /// The placement settings were rejected
    #[error("orbital tooltip for '{anchor}' is misconfigured: {source}")]
    Orbit {
        anchor: String,
        #[source]
        source: OrbitError,
    },

    /// The host could not carry out a request
    #[error("host failed on element '{element}': {reason}")]
    Host { element: String, reason: String },

    /// The host has no element with this id
    #[error("no element '{element}' on the page{}", format_suggestions(.suggestions))]
    UnknownElement {
        element: String,
        suggestions: Vec<String>,
    },
}

impl TooltipError {
    pub fn orbit(anchor: impl Into<String>, source: OrbitError) -> Self {
        Self::Orbit {
            anchor: anchor.into(),
            source,
        }
    }

    pub fn host(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Host {
            element: element.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_element(element: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            suggestions,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownElement { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_error_display() {
        let err = TooltipError::orbit("save", OrbitError::angle_out_of_range(400.0));
        let msg = err.to_string();
        assert!(msg.contains("save"));
        assert!(msg.contains("400"));
    }

    #[test]
    fn test_unknown_element_with_suggestions() {
        let err = TooltipError::unknown_element("sve", vec!["save".to_string()]);
        assert_eq!(
            err.to_string(),
            "no element 'sve' on the page (did you mean save?)"
        );
        assert_eq!(err.suggestions(), Some(&["save".to_string()][..]));
    }

    #[test]
    fn test_unknown_element_without_suggestions() {
        let err = TooltipError::unknown_element("zzz", vec![]);
        assert_eq!(err.to_string(), "no element 'zzz' on the page");
    }
}
