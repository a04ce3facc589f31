use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
    pub location: Option<String>,
}

/// Issues collected while loading a recipe document. Errors mean a
/// quantity could not be made trackable; warnings are survivable oddities.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: String, location: Option<String>) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Error,
            message,
            location,
        });
    }

    pub fn add_warning(&mut self, message: String, location: Option<String>) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            message,
            location,
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            let tag = match issue.severity {
                IssueSeverity::Error => "error",
                IssueSeverity::Warning => "warning",
            };
            match &issue.location {
                Some(loc) => writeln!(f, "{}: [{}] {}", tag, loc, issue.message)?,
                None => writeln!(f, "{}: {}", tag, issue.message)?,
            }
        }
        Ok(())
    }
}
