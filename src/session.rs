//! Session handle: the single path every command takes to the solver.

mod proc_errors;
mod cfg;
mod checks;
pub mod transports;

use serde::{Serialize, Deserialize};

use crate::command::ApdlCommand;
use crate::commands;
use crate::field::Field;
use crate::parse::{self, ParseResult};

// Re-export errors
pub use proc_errors::{
    SessionError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    SessionArgs,
    SessionTarget,
};
// Re-export transports
pub use transports::{
    TransportChoice,
    Transport,
};
pub use checks::{
    check_parameter_name,
    check_response,
};

/// A command together with what MAPDL answered and what was parsed from the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub command: String,
    pub response: Option<String>,
    pub parsed: ParseResult,
}
impl Reply {
    /// Entity number parsed from the response.
    pub fn entity_id(&self) -> Option<u64> {
        self.parsed.entity_id()
    }
}

/// APDL command log being written.
#[derive(Debug)]
struct ApdlLog {
    path: String,
    file: std::fs::File,
}

/// Handle to a remote MAPDL session.
/// The solver owns the model; the session only sends text and reads text back.
#[derive(Debug)]
pub struct Session {
    name: String,
    transport: TransportChoice,
    ignore_errors: bool,
    stored: Option<Vec<String>>,
    apdl_log: Option<ApdlLog>,
    last_response: Option<String>,
}
impl Session {
    /// Create a session over a transport.
    pub fn new(transport: TransportChoice) -> Self {
        Session{
            name: SessionArgs::default_name(),
            transport,
            ignore_errors: false,
            stored: None,
            apdl_log: None,
            last_response: None,
        }
    }

    /// Create a session from a loaded config, opening the APDL log if one is set.
    pub fn from_target(target: SessionTarget) -> ProcResult<Self> {
        let SessionTarget{transport, session_args} = target;
        let mut session = Session::new(transport)
            .with_name(session_args.name)
            .ignore_errors(session_args.ignore_errors);
        if let Some(apdl_log) = session_args.apdl_log.as_ref() {
            session.open_apdl_log(apdl_log, session_args.append_log)?;
        }
        Ok(session)
    }

    /// Set the instance name shown in error messages.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Skip error checks on responses.
    pub fn ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }

    pub fn set_ignore_errors(&mut self, ignore_errors: bool) {
        self.ignore_errors = ignore_errors;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transport(&self) -> &TransportChoice {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut TransportChoice {
        &mut self.transport
    }

    /// Trimmed text of the last non-empty response.
    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    /// Check if commands are being stored for a batch.
    pub fn is_non_interactive(&self) -> bool {
        self.stored.is_some()
    }

    /// Run one APDL command line and return the trimmed response, if any.
    pub fn run(&mut self, command: &str) -> ProcResult<Option<String>> {
        if command.contains('\n') || command.contains('\r') {
            return Err(SessionError::MultiLine(command.to_string()));
        }

        if let Some(stored) = self.stored.as_mut() {
            stored.push(command.to_string());
            return Ok(None);
        }

        let mut command = command.trim().to_string();

        if command.to_ascii_uppercase().starts_with("/CLE") {
            command = "/CLE,NOSTART".to_string();
        }

        let mnemonic = command.split(',').next().unwrap_or_default().trim().to_ascii_uppercase();
        if let Some(reason) = checks::silent_command_reason(&mnemonic) {
            let message = format!("{} is ignored: {}.", mnemonic, reason);
            log::info!("{}", message);
            command = format!("/COM,{}", message);
        }

        if let Some(hint) = checks::invalid_command_hint(&command) {
            return Err(SessionError::InvalidCommand{command, hint});
        }

        if let Some((name, _)) = command.split_once('=') {
            let upper = command.to_ascii_uppercase();
            if !upper.starts_with("/COM") && !upper.starts_with("/TITLE") {
                checks::check_parameter_name(name)?;
            }
        }

        self.write_log(&command)?;

        log::debug!("Sending: {}", command);
        let response = self.transport.send(&command)?;
        self.handle_response(&response)
    }

    /// Run a command and apply the parser registered for its mnemonic.
    pub fn send(&mut self, command: &ApdlCommand) -> ProcResult<Reply> {
        self.send_line(&command.to_string())
    }

    /// Run a raw APDL line and apply the parser registered for its mnemonic.
    pub fn send_line(&mut self, line: &str) -> ProcResult<Reply> {
        let response = self.run(line)?;
        let mnemonic = line.split(',').next().unwrap_or_default();
        let parsed = match commands::parser_for(mnemonic) {
            Some(kind) => parse::parse(kind, response.as_deref()),
            None => ParseResult::NotFound,
        };
        Ok(Reply{command: line.trim().to_string(), response, parsed})
    }

    /// Format `mnemonic` with positional fields and send it.
    pub fn format_and_send<I, F>(&mut self, mnemonic: &str, fields: I) -> ProcResult<Reply>
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.send(&ApdlCommand::positional(mnemonic, fields))
    }

    /// Store every command run inside `batch` and send them as one block at the end.
    /// Nothing inside the block gets a response.
    pub fn non_interactive<T, B>(&mut self, batch: B) -> ProcResult<T>
    where
        B: FnOnce(&mut Session) -> ProcResult<T>,
    {
        if self.stored.is_some() {
            return err_str("Already storing commands for a non-interactive batch");
        }

        self.stored = Some(Vec::new());
        let result = batch(self);
        let stored = self.stored.take().unwrap_or_default();
        let value = result?;

        self.flush_stored(&stored)?;
        Ok(value)
    }

    /// Send a multi-line block of APDL as one batch.
    /// Blank lines are dropped.
    pub fn input_strings(&mut self, block: &str) -> ProcResult<Option<String>> {
        let lines = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        if let Some(stored) = self.stored.as_mut() {
            stored.extend(lines);
            return Ok(None);
        }
        self.flush_stored(&lines)
    }

    /// Record every command sent from now on to an APDL input file.
    pub fn open_apdl_log(&mut self, path: &str, append: bool) -> ProcResult<()> {
        if let Some(apdl_log) = self.apdl_log.as_ref() {
            return Err(SessionError::LogAlreadyOpen(apdl_log.path.clone()));
        }

        let mut file = if append {
            crate::io::open_append(path)?
        } else {
            crate::io::create(path)?
        };
        crate::io::write_line(
            &mut file,
            path,
            &format!("! APDL log script generated by apdl-client {}", env!("CARGO_PKG_VERSION")),
        )?;
        log::debug!("Writing APDL log to {}", path);

        self.apdl_log = Some(ApdlLog{path: path.to_string(), file});
        Ok(())
    }

    /// Stop recording commands.
    pub fn close_apdl_log(&mut self) {
        if let Some(apdl_log) = self.apdl_log.take() {
            log::debug!("Closed APDL log {}", apdl_log.path);
        }
    }

    /// Close the APDL log and the transport.
    pub fn exit(mut self) -> ProcResult<()> {
        if let Some(stored) = self.stored.take() {
            log::warn!("Discarding {} stored commands on exit", stored.len());
        }
        self.close_apdl_log();
        self.transport.close()
    }

    fn write_log(&mut self, line: &str) -> ProcResult<()> {
        if let Some(apdl_log) = self.apdl_log.as_mut() {
            crate::io::write_line(&mut apdl_log.file, &apdl_log.path, line)?;
        }
        Ok(())
    }

    fn flush_stored(&mut self, commands: &[String]) -> ProcResult<Option<String>> {
        if commands.is_empty() {
            return Ok(None);
        }
        log::debug!("Flushing {} stored commands", commands.len());
        for line in commands {
            self.write_log(line)?;
        }
        let response = self.transport.send_batch(commands)?;
        self.handle_response(&response)
    }

    fn handle_response(&mut self, response: &str) -> ProcResult<Option<String>> {
        let text = normalize_response(response);
        if text.is_empty() {
            self.last_response = None;
            return Ok(None);
        }
        log::debug!("Response:\n{}", text);

        self.last_response = Some(text.clone());
        if !self.ignore_errors {
            checks::check_response(&text, &self.name)?;
        }
        Ok(Some(text))
    }
}

/// Turn escaped line breaks into real ones and trim.
pub fn normalize_response(response: &str) -> String {
    response
        .replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .trim()
        .to_string()
}
