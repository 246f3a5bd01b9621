use crate::args;
use crate::session::{
    TransportChoice,
    Transport,
};
use serde::{Serialize, Deserialize};

/// Arguments for a session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionArgs {
    /// Transport name.
    #[serde(rename = "transport")]
    pub transport_name: String,

    /// Transport config file.
    #[serde(default)]
    pub transport_cfg: Option<String>,

    /// Skip the error checks on responses.
    #[serde(default)]
    pub ignore_errors: bool,

    /// Path of the APDL log recording every command sent.
    #[serde(default, alias = "log")]
    pub apdl_log: Option<String>,

    /// Append to an existing APDL log.
    #[serde(default)]
    pub append_log: bool,

    /// Instance name used in error messages.
    #[serde(default = "SessionArgs::default_name")]
    pub name: String,
}
impl SessionArgs {
    pub fn default_name() -> String {
        "apdl".to_string()
    }
}

/// Session target struct.
/// Contains the constructed transport and the session arguments.
#[derive(Debug)]
pub struct SessionTarget {
    /// Transport.
    pub transport: TransportChoice,
    /// Session arguments.
    pub session_args: SessionArgs,
}
impl SessionTarget {
    /// Construct a session target from a config file.
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let session_args: SessionArgs = crate::io::read_cfg_file(cfg_file)?;

        let mut transport = TransportChoice::from_name(&session_args.transport_name)?;

        if let Some(transport_cfg) = session_args.transport_cfg.as_ref() {
            log::debug!("Loading {} transport config {}", transport.get_transport_name(), transport_cfg);
            transport.parse_transport_cfg(transport_cfg)?;
        }

        if session_args.append_log && session_args.apdl_log.is_none() {
            return args::err_str("append_log is set, but no apdl_log path was given");
        }

        Ok(SessionTarget{transport, session_args})
    }

    /// Session target with default arguments for a transport.
    pub fn with_transport(transport_name: &str) -> args::ProcResult<Self> {
        Ok(SessionTarget{
            transport: TransportChoice::from_name(transport_name)?,
            session_args: SessionArgs{
                transport_name: transport_name.to_string(),
                transport_cfg: None,
                ignore_errors: false,
                apdl_log: None,
                append_log: false,
                name: SessionArgs::default_name(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_session_and_transport_cfg() {
        let dir = tempfile::tempdir().unwrap();
        let echo_cfg = dir.path().join("echo.json");
        crate::io::write_to_file(echo_cfg.to_str().unwrap(), r#"{"responses": {"K": "KEYPOINT NUMBER = {count}"}}"#).unwrap();

        let cfg = dir.path().join("session.yaml");
        crate::io::write_to_file(
            cfg.to_str().unwrap(),
            &format!("transport: echo\ntransport_cfg: {}\nignore_errors: true\nname: test-0\n", echo_cfg.to_str().unwrap()),
        ).unwrap();

        let target = SessionTarget::from_cfg_file(cfg.to_str().unwrap()).unwrap();
        assert!(matches!(target.transport, TransportChoice::Echo(_)));
        assert!(target.session_args.ignore_errors);
        assert_eq!(target.session_args.name, "test-0");
        assert!(target.session_args.apdl_log.is_none());
    }

    #[test]
    fn defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("session.toml");
        crate::io::write_to_file(cfg.to_str().unwrap(), "transport = \"deck\"\n").unwrap();

        let target = SessionTarget::from_cfg_file(cfg.to_str().unwrap()).unwrap();
        assert!(matches!(target.transport, TransportChoice::Deck(_)));
        assert_eq!(target.session_args.name, "apdl");
        assert!(!target.session_args.ignore_errors);
    }

    #[test]
    fn rejects_bad_cfg() {
        let dir = tempfile::tempdir().unwrap();

        let unknown_transport = dir.path().join("a.yaml");
        crate::io::write_to_file(unknown_transport.to_str().unwrap(), "transport: grpc\n").unwrap();
        assert!(SessionTarget::from_cfg_file(unknown_transport.to_str().unwrap()).is_err());

        let unknown_key = dir.path().join("b.yaml");
        crate::io::write_to_file(unknown_key.to_str().unwrap(), "transport: echo\nport: 50052\n").unwrap();
        assert!(SessionTarget::from_cfg_file(unknown_key.to_str().unwrap()).is_err());

        let append_without_log = dir.path().join("c.yaml");
        crate::io::write_to_file(append_without_log.to_str().unwrap(), "transport: echo\nappend_log: true\n").unwrap();
        assert!(SessionTarget::from_cfg_file(append_without_log.to_str().unwrap()).is_err());
    }
}
