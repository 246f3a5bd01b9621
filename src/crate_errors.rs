use crate::{
    args,
    commands,
    io,
    session,
};

/// Error-type enum for the `apdl_client` crate.
/// Wraps the error of every module.
#[derive(Debug)]
pub enum ApdlError {
    ArgError(args::ArgError),
    CommandError(commands::CommandError),
    SessionError(session::SessionError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for ApdlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApdlError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            ApdlError::CommandError(error) => write!(f, "! COMMAND ERROR:\n{}", error),
            ApdlError::SessionError(error) => write!(f, "! SESSION ERROR:\n{}", error),
            ApdlError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            ApdlError::StringOnly(error) => write!(f, "! APDL CLIENT ERROR:\n- {}", error),
        }
    }
}
impl From<String> for ApdlError {
    fn from(error: String) -> Self {
        ApdlError::StringOnly(error)
    }
}
impl From<args::ArgError> for ApdlError {
    fn from(error: args::ArgError) -> Self {
        ApdlError::ArgError(error)
    }
}
impl From<commands::CommandError> for ApdlError {
    fn from(error: commands::CommandError) -> Self {
        ApdlError::CommandError(error)
    }
}
impl From<session::SessionError> for ApdlError {
    fn from(error: session::SessionError) -> Self {
        ApdlError::SessionError(error)
    }
}
impl From<io::IoError> for ApdlError {
    fn from(error: io::IoError) -> Self {
        ApdlError::IoError(error)
    }
}
impl From<serde_json::Error> for ApdlError {
    fn from(error: serde_json::Error) -> Self {
        ApdlError::ArgError(args::ArgError::from(error))
    }
}

/// Result type for the `apdl_client` crate.
pub type ApdlResult<T> = std::result::Result<T, ApdlError>;

/// Create an `ApdlResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::ApdlError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> ApdlResult<T> {
    Err(ApdlError::StringOnly(error_str.to_string()))
}
