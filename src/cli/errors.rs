//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero status.

use std::fmt;
use std::io;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or flag error
    ConfigError,
    /// I/O error
    IoError,
    /// Books file already exists
    AlreadyInitialized,
    /// Startup failed (books file, logging, runtime or listener)
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BOOKSHELF_CLI_CONFIG_ERROR",
            Self::IoError => "BOOKSHELF_CLI_IO_ERROR",
            Self::AlreadyInitialized => "BOOKSHELF_CLI_ALREADY_INITIALIZED",
            Self::BootFailed => "BOOKSHELF_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AlreadyExists(_) => Self::new(CliErrorCode::AlreadyInitialized, e.to_string()),
            _ => Self::boot_failed(e.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
