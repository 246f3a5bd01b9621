/// Command catalog error type.
#[derive(Debug)]
pub enum CommandError {
    /// No catalog entry for the mnemonic.
    UnknownCommand(String),
    /// The command has no field with this name.
    UnknownField {
        mnemonic: String,
        field: String,
    },
    /// More positional values than the command has fields.
    TooManyFields {
        mnemonic: String,
        expected: usize,
        got: usize,
    },
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnknownCommand(mnemonic) => write!(f, "- Unknown APDL command: {}", mnemonic),
            CommandError::UnknownField{mnemonic, field} => write!(f, "- {} has no field named \"{}\"", mnemonic, field),
            CommandError::TooManyFields{mnemonic, expected, got} => write!(f, "- {} takes at most {} fields, got {}", mnemonic, expected, got),
            CommandError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<String> for CommandError {
    fn from(error: String) -> Self {
        CommandError::StringOnly(error)
    }
}

/// Result type for the `commands` module.
pub type ProcResult<T> = std::result::Result<T, CommandError>;

/// Create a `CommandError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(CommandError::StringOnly(error_str.to_string()))
}
