use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including informational outcomes (no input, package without repository)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, decode error, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Shape of a transport-level failure, derived from the underlying I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFailure {
    /// The peer reset or aborted the connection mid-flight
    ConnectionReset,
    /// The peer actively refused the connection
    ConnectionRefused,
    /// The request did not complete within the configured timeout
    Timeout,
    /// Connecting failed for another reason (DNS, no route to host)
    Unreachable,
    Other,
}

impl NetworkFailure {
    /// Walks an error's `source()` chain looking for a recognisable I/O error kind.
    pub fn from_error_chain(err: &(dyn std::error::Error + 'static)) -> Option<Self> {
        let mut current = Some(err);
        while let Some(e) = current {
            if let Some(io) = e.downcast_ref::<std::io::Error>() {
                return Some(Self::from_io_kind(io.kind()));
            }
            current = e.source();
        }
        None
    }

    pub fn from_io_kind(kind: std::io::ErrorKind) -> Self {
        use std::io::ErrorKind;
        match kind {
            ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe => {
                NetworkFailure::ConnectionReset
            }
            ErrorKind::ConnectionRefused => NetworkFailure::ConnectionRefused,
            ErrorKind::TimedOut => NetworkFailure::Timeout,
            ErrorKind::AddrNotAvailable | ErrorKind::NotConnected => NetworkFailure::Unreachable,
            _ => NetworkFailure::Other,
        }
    }
}

impl fmt::Display for NetworkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkFailure::ConnectionReset => write!(f, "connection reset"),
            NetworkFailure::ConnectionRefused => write!(f, "connection refused"),
            NetworkFailure::Timeout => write!(f, "timed out"),
            NetworkFailure::Unreachable => write!(f, "host unreachable"),
            NetworkFailure::Other => write!(f, "network error"),
        }
    }
}

/// Application-specific errors for dependency lookup.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint-style messages next to the variants.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Request to {url} failed ({failure}): {details}")]
    Network {
        url: String,
        failure: NetworkFailure,
        details: String,
    },

    #[error("Request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode response from {url}\nDetails: {details}")]
    Decode { url: String, details: String },

    #[error("package.json not found for {repository} on any of the branches: {}\n\n💡 Hint: Use --branch to name the repository's default branch", branches.join(", "))]
    ManifestNotFound {
        repository: String,
        branches: Vec<String>,
    },

    #[error("Gave up after {attempts} attempt(s)")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last_error: anyhow::Error,
    },

    #[error("Invalid configuration: {}\nDetails: {details}\n\n💡 Hint: Check the values in your config file", path.display())]
    Config { path: PathBuf, details: String },

    /// CLI override validation
    #[error("Validation error: {message}")]
    Validation { message: String },
}
