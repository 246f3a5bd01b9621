use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Deserialize};

use crate::{
    args,
    command,
    session,
};
use session::transports;

/// Placeholder replaced by how many times the command has been sent.
const COUNT_PLACEHOLDER: &str = "{count}";

/// Echo transport.
/// Answers every command from a table of canned responses, for offline runs and tests.
#[derive(Debug)]
pub struct Link {
    link_cfg: LinkCfg,
    counts: HashMap<String, usize>,
    sent: Vec<String>,
}
impl Link {
    pub fn new() -> Self {
        Link{
            link_cfg: LinkCfg::default(),
            counts: HashMap::new(),
            sent: Vec::new(),
        }
    }

    /// Echo link with a response per mnemonic.
    pub fn with_responses<I, K, V>(responses: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut link = Link::new();
        link.link_cfg.responses = responses
            .into_iter()
            .map(|(mnemonic, response)| (mnemonic.into().trim().to_ascii_uppercase(), response.into()))
            .collect();
        link
    }

    /// Response for commands with no entry.
    pub fn default_response(mut self, response: impl Into<String>) -> Self {
        self.link_cfg.default_response = response.into();
        self
    }

    /// Every line sent so far, batches included.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    fn respond(&mut self, line: &str) -> String {
        self.sent.push(line.to_string());

        let mnemonic = line.split(',').next().unwrap_or_default().trim().to_ascii_uppercase();
        let count = self.counts.entry(mnemonic.clone()).or_insert(0);
        *count += 1;
        let count = *count;

        let template = self.link_cfg.responses
            .get(&mnemonic)
            .or_else(|| self.link_cfg.responses.get(&command::short_command(line)))
            .unwrap_or(&self.link_cfg.default_response);
        template.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

/// Echo transport config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkCfg {
    /// Response template per mnemonic (or four-letter short command).
    #[serde(default)]
    responses: BTreeMap<String, String>,
    /// Response when no template matches.
    #[serde(default = "LinkCfg::default_default_response")]
    default_response: String,
}
impl LinkCfg {
    pub fn default_default_response() -> String {
        String::new()
    }
}
impl Default for LinkCfg {
    fn default() -> Self {
        LinkCfg{
            responses: BTreeMap::new(),
            default_response: Self::default_default_response(),
        }
    }
}

impl transports::Transport for Link {
    fn get_transport_name(&self) -> &'static str {
        "Echo"
    }

    fn parse_transport_cfg(&mut self, transport_cfg_file: &str) -> args::ProcResult<()> {
        let link_cfg: LinkCfg = crate::io::read_cfg_file(transport_cfg_file)?;
        self.link_cfg = LinkCfg{
            responses: link_cfg.responses
                .into_iter()
                .map(|(mnemonic, response)| (mnemonic.trim().to_ascii_uppercase(), response))
                .collect(),
            default_response: link_cfg.default_response,
        };
        Ok(())
    }

    fn get_transport_cfg(&self) -> args::ProcResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.link_cfg)?)
    }

    fn send(&mut self, command: &str) -> session::ProcResult<String> {
        Ok(self.respond(command))
    }

    fn send_batch(&mut self, commands: &[String]) -> session::ProcResult<String> {
        let responses = commands
            .iter()
            .map(|line| self.respond(line))
            .filter(|response| !response.is_empty())
            .collect::<Vec<_>>();
        Ok(responses.join("\n"))
    }

    fn close(&mut self) -> session::ProcResult<()> {
        log::debug!("Echo transport closed after {} lines", self.sent.len());
        Ok(())
    }
}
