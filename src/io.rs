use std::io::Write;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Deserialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Verbose IO error: the file involved and what went wrong with it.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

fn file_error(path: &str, error: std::io::Error) -> IoError {
    IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)}
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| file_error(path, error))
}

/// Create (or truncate) a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| file_error(path, error))
}

/// Open a file for appending, creating it if needed.
pub fn open_append(path: &str) -> IoResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| file_error(path, error))
}

/// Read a whole file with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| file_error(path, error))
}

/// Read everything from stdin.
pub fn read_stdin() -> IoResult<String> {
    let mut buffer = String::new();
    match std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer) {
        Ok(_) => Ok(buffer),
        Err(error) => Err(IoError{file: Some("<stdin>".to_string()), cause: IoErrorType::File(error)}),
    }
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| file_error(path, error))
}

/// Write one line (newline added) to an open file.
/// `path` is only used for the error message.
pub fn write_line(f: &mut std::fs::File, path: &str, line: &str) -> IoResult<()> {
    writeln!(f, "{}", line).map_err(|error| file_error(path, error))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match path.split('.').last(){
        Some("json") => {
            serde_json::from_reader(open(path)?)
                .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::SerdeJson(error)})
        },
        Some("toml") => {
            toml::from_str(&read_to_string(path)?)
                .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::TomlDe(error)})
        },
        Some("yaml") | Some("yml") => {
            serde_yaml::from_reader(open(path)?)
                .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::SerdeYaml(error)})
        },
        _ => {
            let supported_filetypes = ["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(IoError{file: Some(path.to_string()), cause: IoErrorType::StringOnly(error_string)})
        },
    }
}
