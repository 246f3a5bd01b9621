/*!
 * This is the transports module.
 * A transport carries command lines to the solver and brings its text back.
 *
 * New transports need:
 * - A struct implementing `Transport`
 * - An enum variant containing that struct in `TransportChoice`
 * - A constructor arg_name and function in `TRANSPORT_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    args,
    session,
};

//
// ------------------------------------------------------------
// Code that requires modification to add a new transport
//      |
//      V
//

// Source files for the transports
pub mod echo;
pub mod deck;

/// Transports enum.
/// To add a new transport:
/// include it here,
/// add handling for its constructor in `TRANSPORT_CONSTRUCTION`,
/// and implement the `Transport` trait for it.
#[derive(Debug)]
#[enum_dispatch(Transport)]
pub enum TransportChoice {
    /// Offline transport answering with canned responses.
    Echo(echo::Link),
    /// Transport writing an APDL input deck for a later batch run.
    Deck(deck::Link),
}

/// Transport construction array -- Written out in once place for easy modification.
const TRANSPORT_CONSTRUCTION: &[TransportConstructor] = &[
    TransportConstructor{
        arg_name: "echo",
        constructor: || {Ok(TransportChoice::Echo(echo::Link::new()))},
    },
    TransportConstructor{
        arg_name: "deck",
        constructor: || {Ok(TransportChoice::Deck(deck::Link::new()))},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new transport
//      |
//      V
//

/// Transport trait.
/// This trait must be implemented for all transports.
#[enum_dispatch]
pub trait Transport {
    /// Get the name of the transport.
    fn get_transport_name(&self) -> &'static str;

    /// Parse the transport config file.
    fn parse_transport_cfg(&mut self, transport_cfg_file: &str) -> args::ProcResult<()>;

    /// Current transport config, for printing example configs.
    fn get_transport_cfg(&self) -> args::ProcResult<serde_json::Value>;

    /// Send a single command line and return the raw response.
    fn send(&mut self, command: &str) -> session::ProcResult<String>;

    /// Send a block of command lines as one batch and return the raw response.
    fn send_batch(&mut self, commands: &[String]) -> session::ProcResult<String>;

    /// Release the connection.
    fn close(&mut self) -> session::ProcResult<()>;
}

/// Transport constructor.
struct TransportConstructor {
    /// Name of the transport in config files.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> args::ProcResult<TransportChoice>,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

impl TransportChoice {
    /// Construct a transport from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in TRANSPORT_CONSTRUCTION {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)();
            }
        }

        let mut error_str = format!("Transport not found: {arg_name}\n");
        error_str.push_str("Available transports:\n");
        for constructor in TRANSPORT_CONSTRUCTION {
            error_str.push_str(&format!("    {}\n", constructor.arg_name));
        }
        args::err_str(&error_str)
    }

    /// Names of every transport, in registration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        TRANSPORT_CONSTRUCTION.iter().map(|constructor| constructor.arg_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_by_name() {
        for name in TransportChoice::names() {
            let transport = TransportChoice::from_name(name).unwrap();
            assert!(!transport.get_transport_name().is_empty());
        }
        assert!(matches!(TransportChoice::from_name("echo"), Ok(TransportChoice::Echo(_))));
        assert!(matches!(TransportChoice::from_name("deck"), Ok(TransportChoice::Deck(_))));
    }

    #[test]
    fn unknown_name_lists_transports() {
        let err = TransportChoice::from_name("grpc").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("grpc"));
        assert!(message.contains("echo"));
        assert!(message.contains("deck"));
    }
}
