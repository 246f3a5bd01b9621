use serde::{Serialize, Deserialize};

use crate::{
    args,
    session,
};
use session::transports;

/// Deck transport.
/// Writes every command to an APDL input deck to be solved later in batch mode.
/// MAPDL is never contacted, so responses are always empty.
#[derive(Debug)]
pub struct Link {
    link_cfg: LinkCfg,
    deck: Option<std::fs::File>,
    lines_written: usize,
    started: bool,
}
impl Link {
    pub fn new() -> Self {
        Link{
            link_cfg: LinkCfg::default(),
            deck: None,
            lines_written: 0,
            started: false,
        }
    }

    /// Deck link writing to `path`.
    pub fn to_path(path: impl Into<String>, append: bool) -> Self {
        let mut link = Link::new();
        link.link_cfg = LinkCfg{path: path.into(), append};
        link
    }

    /// Path of the deck being written.
    pub fn path(&self) -> &str {
        &self.link_cfg.path
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    fn write(&mut self, line: &str) -> session::ProcResult<()> {
        let path = self.link_cfg.path.clone();
        let deck = match self.deck.take() {
            Some(deck) => deck,
            // Reopened after `close`: never truncate what was already written
            None if self.link_cfg.append || self.started => {
                log::debug!("Appending to input deck {}", path);
                crate::io::open_append(&path)?
            },
            None => {
                log::debug!("Writing input deck {}", path);
                crate::io::create(&path)?
            },
        };
        self.started = true;
        let deck = self.deck.insert(deck);
        crate::io::write_line(deck, &path, line)?;
        self.lines_written += 1;
        Ok(())
    }
}

/// Deck transport config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkCfg {
    /// Input deck path.
    #[serde(default = "LinkCfg::default_path", alias = "output", alias = "out", alias = "o")]
    path: String,
    /// Append to an existing deck instead of overwriting it.
    #[serde(default)]
    append: bool,
}
impl LinkCfg {
    pub fn default_path() -> String {
        "input.inp".to_string()
    }
}
impl Default for LinkCfg {
    fn default() -> Self {
        LinkCfg{
            path: Self::default_path(),
            append: false,
        }
    }
}

impl transports::Transport for Link {
    fn get_transport_name(&self) -> &'static str {
        "Input Deck"
    }

    fn parse_transport_cfg(&mut self, transport_cfg_file: &str) -> args::ProcResult<()> {
        if self.deck.is_some() {
            return args::err_str("Deck transport config changed after the deck was opened");
        }
        self.link_cfg = crate::io::read_cfg_file(transport_cfg_file)?;
        self.started = false;
        Ok(())
    }

    fn get_transport_cfg(&self) -> args::ProcResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.link_cfg)?)
    }

    fn send(&mut self, command: &str) -> session::ProcResult<String> {
        self.write(command)?;
        Ok(String::new())
    }

    fn send_batch(&mut self, commands: &[String]) -> session::ProcResult<String> {
        for command in commands {
            self.write(command)?;
        }
        Ok(String::new())
    }

    fn close(&mut self) -> session::ProcResult<()> {
        if self.deck.take().is_some() {
            log::debug!("Closed input deck {} ({} lines)", self.link_cfg.path, self.lines_written);
        }
        Ok(())
    }
}
