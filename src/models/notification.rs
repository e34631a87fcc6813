//! Toast notification models

/// Severity of a toast; decides the accent color of its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient toast-style notification surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: &str, description: &str) -> Self {
        Notice::with_severity(Severity::Info, title, description)
    }

    pub fn success(title: &str, description: &str) -> Self {
        Notice::with_severity(Severity::Success, title, description)
    }

    pub fn warning(title: &str, description: &str) -> Self {
        Notice::with_severity(Severity::Warning, title, description)
    }

    pub fn error(title: &str, description: &str) -> Self {
        Notice::with_severity(Severity::Error, title, description)
    }

    fn with_severity(severity: Severity, title: &str, description: &str) -> Self {
        Notice {
            severity,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let notice = Notice::warning("No transactions selected", "Pick one first.");
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.title, "No transactions selected");
    }
}
