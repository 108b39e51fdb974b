/// The name of the driver for MySQL.
pub const DRIVER_NAME: &str = "mysql";

mod errors;

pub use errors::MySqlErrorInspector;
