use crate::DRIVER_NAME;
use mysql::error::MySqlError;
use normdb_core::driver::ErrorInspector;
use normdb_core::error::{ErrorInfo, Status};

/// Extracts normalized diagnostics from MySQL driver errors.
///
/// Classification is two-tiered: the server error code is looked up first, and the 2-character SQLSTATE class is
/// consulted only when no code rule matched. Both tiers leave the caller's default status untouched when they have
/// nothing to say.
pub struct MySqlErrorInspector {}

impl ErrorInspector for MySqlErrorInspector {
    fn inspect_error(&self, error: &(dyn std::error::Error + 'static), default_status: Status) -> ErrorInfo {
        let mut info = ErrorInfo::with_status(default_status);

        if let Some(server_error) = find_server_error(error) {
            info.vendor_code = i32::from(server_error.code);
            info.sql_state = server_error.state.clone();

            if let Some(status) = status_from_code(server_error.code) {
                info.status = status;
            } else if let Some(class) = server_error.state.get(..2) {
                if let Some(status) = status_from_sqlstate_class(class) {
                    info.status = status;
                }
            }

            tracing::debug!(
                driver = DRIVER_NAME,
                vendor_code = info.vendor_code,
                sql_state = %info.sql_state,
                status = %info.status,
                "recognized a MySQL server error"
            );
        }

        info
    }
}

/// Find a `MySqlError` in the error or anywhere in its `source()` chain.
///
/// The server error may show up directly or wrapped in a `mysql::Error`; the latter is matched explicitly so
/// recognition does not depend on the driver crate exposing it as a source.
fn find_server_error<'a>(error: &'a (dyn std::error::Error + 'static)) -> Option<&'a MySqlError> {
    let mut current = Some(error);
    while let Some(error) = current {
        if let Some(server_error) = error.downcast_ref::<MySqlError>() {
            return Some(server_error);
        }
        if let Some(mysql::Error::MySqlError(server_error)) = error.downcast_ref::<mysql::Error>() {
            return Some(server_error);
        }
        current = error.source();
    }
    None
}

/// Map a MySQL server error code to a normalized status.
fn status_from_code(code: u16) -> Option<Status> {
    match code {
        // ER_ACCESS_DENIED_ERROR
        1045 => Some(Status::Unauthenticated),
        // ER_DBACCESS_DENIED_ERROR, ER_TABLEACCESS_DENIED_ERROR, ER_COLUMNACCESS_DENIED_ERROR,
        // ER_SPECIFIC_ACCESS_DENIED_ERROR
        1044 | 1142 | 1143 | 1227 => Some(Status::Unauthorized),
        // ER_NO_SUCH_TABLE, ER_BAD_DB_ERROR
        1146 | 1049 => Some(Status::NotFound),
        // ER_TABLE_EXISTS_ERROR, ER_DB_CREATE_EXISTS
        1050 | 1007 => Some(Status::AlreadyExists),
        // ER_DUP_ENTRY, ER_ROW_IS_REFERENCED_2, ER_NO_REFERENCED_ROW_2, ER_BAD_NULL_ERROR,
        // ER_NO_DEFAULT_FOR_FIELD
        1062 | 1451 | 1452 | 1048 | 1364 => Some(Status::Integrity),
        // ER_PARSE_ERROR, ER_BAD_FIELD_ERROR, ER_NON_UNIQ_ERROR
        1064 | 1054 | 1052 => Some(Status::InvalidArgument),
        // ER_TRUNCATED_WRONG_VALUE_FOR_FIELD, ER_TRUNCATED_WRONG_VALUE, ER_WARN_DATA_OUT_OF_RANGE
        1366 | 1292 | 1264 => Some(Status::InvalidData),
        // ER_LOCK_WAIT_TIMEOUT
        1205 => Some(Status::Timeout),
        // ER_LOCK_DEADLOCK
        1213 => Some(Status::Cancelled),
        // CR_CONNECTION_ERROR, CR_CONN_HOST_ERROR, CR_SERVER_GONE_ERROR, CR_SERVER_LOST
        2002 | 2003 | 2006 | 2013 => Some(Status::Io),
        // ER_UNKNOWN_ERROR
        1105 => Some(Status::Internal),
        _ => None,
    }
}

/// Map a 2-character SQLSTATE class to a normalized status.
fn status_from_sqlstate_class(class: &str) -> Option<Status> {
    match class {
        // no data
        "02" => Some(Status::NotFound),
        // dynamic SQL error, connection exception
        "07" | "08" => Some(Status::Io),
        // cardinality violation, data exception
        "21" | "22" => Some(Status::InvalidData),
        // integrity constraint violation
        "23" => Some(Status::Integrity),
        // invalid authorization specification
        "28" => Some(Status::Unauthenticated),
        // invalid cursor name, syntax error or access rule violation
        "34" | "42" => Some(Status::InvalidArgument),
        // with check option violation
        "44" => Some(Status::Integrity),
        // object not in prerequisite state, operator intervention
        "55" | "57" => Some(Status::InvalidState),
        // system error
        "58" => Some(Status::Internal),
        _ => None,
    }
}
