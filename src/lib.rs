//! # Crate Topology
//!
//! The [`normdb-drivers`] project is implemented as multiple sub-crates, which are then re-exported by
//! this top-level crate.
//!
//! Crate authors can choose to depend on this top-level crate, or just
//! the sub-crates they need.
//!
//! The current list of sub-crates is:
//!
//! * [`normdb-core`][normdb_core] - the core traits and types
//! * [`normdb-mysql`][normdb_mysql] - error classification for the [MySQL](https://www.mysql.com) driver

pub use normdb_core::driver::DriverError;
pub use normdb_core::driver::ErrorInspector;
pub use normdb_core::driver::GenericErrorInspector;
pub use normdb_core::error::ErrorInfo;
pub use normdb_core::error::NormalizedError;
pub use normdb_core::error::Status;
pub use normdb_core::Result;

#[cfg(feature = "mysql")]
pub use normdb_mysql::MySqlErrorInspector;

#[cfg(test)]
mod tests {
    use super::*;
    use normdb_core::driver::MockErrorInspector;

    #[test]
    fn test_classify_through_facade() {
        let error = NormalizedError::from_driver_error(
            &GenericErrorInspector {},
            "statement failed".into(),
            Status::Internal,
        );
        assert_eq!(error.status(), Status::Internal);
        assert_eq!(error.info, ErrorInfo::with_status(Status::Internal));
    }

    #[test]
    fn test_classify_with_a_mocked_inspector() {
        let mut mock_inspector = MockErrorInspector::new();
        mock_inspector.expect_inspect_error().returning(|_, _| ErrorInfo {
            status: Status::Timeout,
            vendor_code: 1205,
            sql_state: "HY000".to_string(),
        });
        let error =
            NormalizedError::from_driver_error(&mock_inspector, "lock wait timeout exceeded".into(), Status::Internal);
        assert_eq!(error.status(), Status::Timeout);
        assert_eq!(error.to_string(), "timeout (vendor code: 1205, sqlstate: HY000): lock wait timeout exceeded");
    }
}
