use crate::error::{ErrorInfo, Status};

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

/// The error type that the drivers will use to return errors.
///
/// It's a pass-through error type: each driver deals with specific error types coming from the underlying crate used
/// to interact with the database and converts them into this error type, keeping the original error reachable so an
/// {{ErrorInspector}} can still recognize it.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Extracts normalized diagnostics from the errors of one driver.
///
/// Implementations must be total: inspecting an error the driver does not recognize is a normal outcome, reported as
/// an {{ErrorInfo}} carrying the caller's default status and empty vendor fields, never as a failure or a panic.
/// Inspectors are stateless and safe to share between threads.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait ErrorInspector: Send + Sync {
    /// Examine a driver error and extract its diagnostics.
    ///
    /// The error may be, or may have anywhere in its `source()` chain, a vendor error of the driver's underlying
    /// database library. When it does, the returned {{ErrorInfo}} carries the vendor error code, the SQLSTATE, and
    /// the normalized status the driver maps them to. When it doesn't, the returned status is `default_status` and
    /// the vendor fields are empty.
    fn inspect_error(&self, error: &(dyn std::error::Error + 'static), default_status: Status) -> ErrorInfo;
}

/// An inspector for drivers that have no vendor-specific classification.
///
/// Always returns the caller's default status with empty vendor diagnostics.
pub struct GenericErrorInspector {}

impl ErrorInspector for GenericErrorInspector {
    fn inspect_error(&self, _error: &(dyn std::error::Error + 'static), default_status: Status) -> ErrorInfo {
        ErrorInfo::with_status(default_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_error_inspector() {
        let inspector = GenericErrorInspector {};
        let error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let info = inspector.inspect_error(&error, Status::Unknown);
        assert_eq!(info, ErrorInfo::with_status(Status::Unknown));

        let info = inspector.inspect_error(&error, Status::Io);
        assert_eq!(info.status, Status::Io);
        assert_eq!(info.vendor_code, 0);
        assert_eq!(info.sql_state, "");
    }
}
