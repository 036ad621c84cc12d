//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client, config and import errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use alignak_backend_client::ClientError;
use alignak_backend_config::ConfigError;
use alignak_backend_import::ImportError;

/// Structured exit codes for alignak-backend-import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration imported and written.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - bad credentials or rejected token.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Resource not found - the backend does not serve a collection.
    NotFound = 4,

    /// Configuration error - invalid options or environment.
    ///
    /// Scripts should fix the input and not retry.
    ConfigError = 5,

    /// Invalid backend data - a document the importer cannot reshape.
    InvalidData = 6,

    /// Service unavailable - the backend kept answering 429/502/503/504
    /// until retries ran out.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }
        if err.is_connection_error() {
            return ExitCode::ConnectionError;
        }
        match err {
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::MaxRetriesExceeded(_)
            | ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::InvalidResponse(_) => ExitCode::InvalidData,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ImportError> for ExitCode {
    fn from(err: &ImportError) -> Self {
        match err.client_error() {
            Some(source) => Self::from(source),
            None => ExitCode::InvalidData,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ImportError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alignak_backend_import::ResourceKind;
    use anyhow::Context;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://localhost:5000/host".to_string(),
            message: "error".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::ConfigError.as_i32(), 5);
    }

    #[test]
    fn test_from_client_error() {
        assert_eq!(
            ExitCode::from(&ClientError::AuthFailed("bad".to_string())),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&ClientError::Unauthorized("url".to_string())),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&ClientError::MaxRetriesExceeded(4)),
            ExitCode::ServiceUnavailable
        );
        assert_eq!(
            ExitCode::from(&ClientError::InvalidUrl("base_url is required".to_string())),
            ExitCode::ConnectionError
        );
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_fetch_error_uses_client_error() {
        let err = ImportError::Fetch {
            kind: ResourceKind::Host,
            source: api_error(401),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);

        let err = ImportError::MissingField {
            kind: ResourceKind::Host,
            field: "_id",
        };
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidData);
    }

    #[test]
    fn test_anyhow_chain() {
        let err = anyhow::Error::new(ImportError::NoDefaultTimeperiod {
            contact: "admin".to_string(),
            field: "host_notification_period",
        })
        .context("Import failed");
        assert_eq!(err.exit_code(), ExitCode::InvalidData);

        let err: anyhow::Error = Err::<(), _>(ConfigError::MissingAuth)
            .context("Failed to build configuration")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ConfigError);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
