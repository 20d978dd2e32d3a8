//! Error macros for hoproute

/// Macro for returning a malformed input error
#[macro_export]
macro_rules! bail_input {
    ($($arg:tt)*) => {
        return Err($crate::error::RouteError::malformed(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}
