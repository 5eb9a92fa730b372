use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Passed
    Ok,
    /// Passed, but output may differ from what the file declares
    Warning(String),
    /// Failed; the file would be skipped by `dump`
    Failed(String),
}

impl CheckStatus {
    fn label(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning(_) => "WARN",
            CheckStatus::Failed(_) => "FAIL",
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(msg) | CheckStatus::Failed(msg) => Some(msg),
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    /// Check name
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// All checks run against one LXB file
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Checks in the order they ran
    pub checks: Vec<ValidationCheck>,
    /// Name of the validated input
    pub file_path: String,
}

impl ValidationReport {
    /// Empty report for `file_path`
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// Record a check
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    fn count(&self, label: &str) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status.label() == label)
            .count()
    }

    /// Any check failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Any check warned
    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Number of passed checks
    pub fn success_count(&self) -> usize {
        self.count("OK")
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.count("WARN")
    }

    /// Number of failures
    pub fn failure_count(&self) -> usize {
        self.count("FAIL")
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    /// Render for a terminal, colored when the `colorized_output` feature is on
    pub fn format_colored(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.render(&mut out, paint);
        out
    }

    fn render<W: fmt::Write>(&self, out: &mut W, paint: fn(&str, Tone) -> String) -> fmt::Result {
        writeln!(out, "{}", paint("LXB Validation Report", Tone::Title))?;
        writeln!(out, "{}", paint("=====================", Tone::Title))?;
        writeln!(out, "File: {}", self.file_path)?;
        writeln!(out)?;

        for check in &self.checks {
            let tone = Tone::of(&check.status);
            write!(
                out,
                "[{}] {}",
                paint(check.status.label(), tone),
                check.name
            )?;
            match check.status.message() {
                Some(msg) => writeln!(out, ": {}", msg)?,
                None => writeln!(out)?,
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;
        let tone = if self.has_failures() {
            Tone::Bad
        } else if self.has_warnings() {
            Tone::Warn
        } else {
            Tone::Good
        };
        writeln!(out, "{}", paint(self.verdict(), tone))
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Title,
    Good,
    Warn,
    Bad,
}

impl Tone {
    fn of(status: &CheckStatus) -> Self {
        match status {
            CheckStatus::Ok => Tone::Good,
            CheckStatus::Warning(_) => Tone::Warn,
            CheckStatus::Failed(_) => Tone::Bad,
        }
    }
}

fn plain(text: &str, _: Tone) -> String {
    text.to_string()
}

#[cfg(feature = "colorized_output")]
fn paint(text: &str, tone: Tone) -> String {
    let styled = style(text).bold();
    match tone {
        Tone::Title => styled.cyan(),
        Tone::Good => styled.green(),
        Tone::Warn => styled.yellow(),
        Tone::Bad => styled.red(),
    }
    .to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn paint(text: &str, tone: Tone) -> String {
    plain(text, tone)
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, plain)
    }
}
