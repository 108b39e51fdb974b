#![forbid(unsafe_code)]

pub mod driver;
pub mod error;

/// The error type used across the library.
///
/// All errors surfaced to the users of the library are supposed to be {{NormalizedError}}: the original driver error
/// annotated with the normalized status and the vendor diagnostics extracted from it. Only the drivers are allowed to
/// traffic in their own error types {{driver::DriverError}}.
pub type Error = error::NormalizedError;

/// A specialized `Result` type for this library.
pub type Result<T> = std::result::Result<T, Error>;
