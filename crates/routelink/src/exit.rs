use std::fmt;
use std::io;

use routelink_exchange::RouteError;
use routelink_store::StoreError;

// Exit codes are part of the CLI contract; scripts match on them.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn json_error(context: &str, err: serde_json::Error) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn store_error(context: &str, err: StoreError) -> CliError {
    match err {
        StoreError::UnknownRelation(_) => CliError::new(USAGE, format!("{context}: {err}")),
    }
}

pub fn route_error(context: &str, err: RouteError) -> CliError {
    match err {
        RouteError::Unauthorized => CliError::new(PERMISSION_DENIED, format!("{context}: {err}")),
        RouteError::NotReady(_) => CliError::new(FAILURE, format!("{context}: {err}")),
        RouteError::Json(err) => json_error(context, err),
        RouteError::Store(err) => store_error(context, err),
    }
}
