const IGNORE_HINT: &str = "Ignore these messages by setting `ignore_errors` to true.";

/// Session error type.
#[derive(Debug)]
pub enum SessionError {
    /// IO error.
    IoError(crate::io::IoError),
    /// Command contains a line break.
    MultiLine(String),
    /// Command that cannot run in interactive mode.
    InvalidCommand {
        command: String,
        hint: &'static str,
    },
    /// Parameter assignment with a disallowed name.
    InvalidParameter {
        name: String,
        reason: &'static str,
    },
    /// `*** ERROR ***` reported by MAPDL.
    Runtime {
        instance: String,
        message: String,
    },
    /// MAPDL could not open a file.
    FileNotFound(String),
    /// Command not recognized by the active routine.
    InvalidRoutine(String),
    /// MAPDL ignored the command.
    CommandIgnored(String),
    /// Component has no data.
    ComponentNoData(String),
    /// An APDL log is already being written.
    LogAlreadyOpen(String),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            SessionError::MultiLine(command) => write!(f, "- Commands must be a single line. Use `input_strings` for blocks:\n{}", command),
            SessionError::InvalidCommand{command, hint} => write!(f, "- Invalid command \"{}\"\n{}", command, hint),
            SessionError::InvalidParameter{name, reason} => write!(f, "- Invalid parameter name \"{}\": {}", name, reason),
            SessionError::Runtime{instance, message} => write!(f, "- Error in instance {}:\n{}", instance, message),
            SessionError::FileNotFound(response) => write!(f, "- File not found:\n{}\n{}", response, IGNORE_HINT),
            SessionError::InvalidRoutine(response) => write!(f, "- Invalid routine:\n{}\n{}", response, IGNORE_HINT),
            SessionError::CommandIgnored(response) => write!(f, "- Command ignored:\n{}\n{}", response, IGNORE_HINT),
            SessionError::ComponentNoData(response) => write!(f, "- Component contains no data:\n{}\n{}", response, IGNORE_HINT),
            SessionError::LogAlreadyOpen(path) => write!(f, "- APDL log already open at {}", path),
            SessionError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for SessionError {
    fn from(error: crate::io::IoError) -> Self {
        SessionError::IoError(error)
    }
}
impl From<String> for SessionError {
    fn from(error: String) -> Self {
        SessionError::StringOnly(error)
    }
}

/// Result type for the `session` module.
pub type ProcResult<T> = std::result::Result<T, SessionError>;

/// Create a `SessionError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(SessionError::StringOnly(error_str.to_string()))
}
