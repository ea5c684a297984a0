//! Error type for the storage, session and config code.
//!
//! None of these errors reach the user as a crash: the shell logs them or
//! shows the message inline on the auth pages.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// What was being done, e.g. `"saving session"`.
    context: Option<&'static str>,
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            context: None,
            message: message.into(),
        }
    }

    pub fn context(mut self, context: &'static str) -> Self {
        self.context = Some(context);
        self
    }

    /// Message without the context prefix, for inline display.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.context {
            Some(context) => write!(f, "{context}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! simple_error {
    ($msg:literal) => {
        $crate::utils::error::Error::new($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::error::Error::new(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_display_but_not_message() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        let err = err.context("saving session");

        assert_eq!(err.to_string(), "saving session: IO error: gone");
        assert_eq!(err.message(), "IO error: gone");
    }

    #[test]
    fn simple_error_formats_arguments() {
        let err = crate::simple_error!("bad key {}", "sidebarCollapsed");
        assert_eq!(err.to_string(), "bad key sidebarCollapsed");
    }
}
