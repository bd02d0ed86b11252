//! Application error carrying the process exit code.

/// Bad `AGES_*` environment value.
pub const EXIT_CONFIG: u8 = 2;
/// Writing the report to standard output failed.
pub const EXIT_STDOUT: u8 = 3;
/// Creating or writing the JSON export failed.
pub const EXIT_EXPORT: u8 = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn stdout(err: std::io::Error) -> Self {
        Self::new(EXIT_STDOUT, format!("Failed to write report: {err}"))
    }

    /// JSON encoding of the report failed. With a streaming writer this also
    /// carries the underlying I/O error.
    pub fn encode(err: serde_json::Error) -> Self {
        Self::new(EXIT_STDOUT, format!("Failed to write report JSON: {err}"))
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::new(EXIT_EXPORT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    #[cfg(test)]
    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
