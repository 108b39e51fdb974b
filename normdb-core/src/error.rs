use crate::driver::DriverError;

/// Normalized status of a database operation.
///
/// This is the driver-agnostic taxonomy the surrounding framework reports to its callers. Each driver is responsible
/// for mapping the errors of its underlying database library onto these values via an
/// {{crate::driver::ErrorInspector}}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Unknown,
    NotImplemented,
    NotFound,
    AlreadyExists,
    InvalidArgument,
    InvalidState,
    InvalidData,
    /// A constraint violation (unique key, foreign key, not-null, ...).
    Integrity,
    Internal,
    /// A connection or transport level failure.
    Io,
    Cancelled,
    Timeout,
    Unauthenticated,
    Unauthorized,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Unknown => write!(f, "unknown"),
            Status::NotImplemented => write!(f, "not implemented"),
            Status::NotFound => write!(f, "not found"),
            Status::AlreadyExists => write!(f, "already exists"),
            Status::InvalidArgument => write!(f, "invalid argument"),
            Status::InvalidState => write!(f, "invalid state"),
            Status::InvalidData => write!(f, "invalid data"),
            Status::Integrity => write!(f, "integrity violation"),
            Status::Internal => write!(f, "internal error"),
            Status::Io => write!(f, "I/O error"),
            Status::Cancelled => write!(f, "cancelled"),
            Status::Timeout => write!(f, "timeout"),
            Status::Unauthenticated => write!(f, "unauthenticated"),
            Status::Unauthorized => write!(f, "unauthorized"),
        }
    }
}

/// Diagnostics extracted from a driver error.
///
/// A fresh value is produced by every call to {{crate::driver::ErrorInspector::inspect_error}} and is never mutated
/// afterwards. `vendor_code` and `sql_state` are populated together: both are set when the inspector recognized a
/// vendor error, both are left at zero/empty when it didn't (in which case `status` is the caller's default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The normalized status, equal to the caller's default unless a mapping rule matched.
    pub status: Status,
    /// The database-specific numeric error code, 0 if no vendor error was recognized.
    pub vendor_code: i32,
    /// The 5-character SQLSTATE reported by the server, empty if no vendor error was recognized.
    pub sql_state: String,
}

impl ErrorInfo {
    /// Create an `ErrorInfo` carrying only a status, with empty vendor diagnostics.
    pub fn with_status(status: Status) -> Self {
        ErrorInfo { status, vendor_code: 0, sql_state: String::new() }
    }

    /// Whether the inspector recognized a vendor error.
    pub fn has_vendor_error(&self) -> bool {
        self.vendor_code != 0 || !self.sql_state.is_empty()
    }
}

/// A driver error annotated with its classification.
///
/// This is the error type the users of the library interact with. It keeps the original driver error reachable
/// through {{std::error::Error::source}} while exposing the normalized status and the vendor diagnostics.
#[derive(Debug)]
pub struct NormalizedError {
    pub info: ErrorInfo,
    pub error: DriverError,
}

impl NormalizedError {
    /// Classify a driver error and bundle it with the resulting diagnostics.
    pub fn from_driver_error(
        inspector: &dyn crate::driver::ErrorInspector,
        error: DriverError,
        default_status: Status,
    ) -> Self {
        let info = inspector.inspect_error(error.as_ref(), default_status);
        NormalizedError { info, error }
    }

    pub fn status(&self) -> Status {
        self.info.status
    }
}

impl std::fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.info.has_vendor_error() {
            write!(
                f,
                "{} (vendor code: {}, sqlstate: {}): {}",
                self.info.status, self.info.vendor_code, self.info.sql_state, self.error
            )
        } else {
            write!(f, "{}: {}", self.info.status, self.error)
        }
    }
}

impl std::error::Error for NormalizedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let error: &(dyn std::error::Error + 'static) = self.error.as_ref();
        Some(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{GenericErrorInspector, MockErrorInspector};

    #[test]
    fn test_error_info_with_status() {
        let info = ErrorInfo::with_status(Status::Timeout);
        assert_eq!(info.status, Status::Timeout);
        assert_eq!(info.vendor_code, 0);
        assert_eq!(info.sql_state, "");
        assert!(!info.has_vendor_error());
    }

    #[test]
    fn test_normalized_error_from_generic_inspector() {
        let error = NormalizedError::from_driver_error(
            &GenericErrorInspector {},
            "connection reset".into(),
            Status::Io,
        );
        assert_eq!(error.status(), Status::Io);
        assert!(!error.info.has_vendor_error());
        assert_eq!(error.to_string(), "I/O error: connection reset");
    }

    #[test]
    fn test_normalized_error_from_mock_inspector() {
        let mut mock_inspector = MockErrorInspector::new();
        mock_inspector.expect_inspect_error().returning(|_, _| ErrorInfo {
            status: Status::Unauthenticated,
            vendor_code: 1045,
            sql_state: "28000".to_string(),
        });
        let error =
            NormalizedError::from_driver_error(&mock_inspector, "access denied".into(), Status::Internal);
        assert_eq!(error.status(), Status::Unauthenticated);
        assert!(error.info.has_vendor_error());
        assert_eq!(error.to_string(), "unauthenticated (vendor code: 1045, sqlstate: 28000): access denied");
    }

    #[test]
    fn test_normalized_error_source() {
        let error = NormalizedError::from_driver_error(
            &GenericErrorInspector {},
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe").into(),
            Status::Io,
        );
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }
}
