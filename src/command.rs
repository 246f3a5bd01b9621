//! A single formatted APDL command line.

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use crate::field::Field;

/// APDL command: mnemonic followed by positional fields.
/// Written to the solver as `MNEMONIC,field1,...,fieldN`, every slot kept (trailing blanks included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApdlCommand {
    mnemonic: String,
    fields: Vec<Field>,
}
impl ApdlCommand {
    /// Create a command with no fields.
    pub fn new(mnemonic: impl AsRef<str>) -> Self {
        ApdlCommand{
            mnemonic: mnemonic.as_ref().trim().to_ascii_uppercase(),
            fields: Vec::new(),
        }
    }

    /// Create a command from a list of positional fields.
    pub fn positional<I, F>(mnemonic: impl AsRef<str>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let mut command = ApdlCommand::new(mnemonic);
        command.fields = fields.into_iter().map(Into::into).collect();
        command
    }

    /// Append a field.
    pub fn push(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Split a raw APDL line into mnemonic and text fields.
    /// Blank fields become `Field::Unset`.
    pub fn from_line(line: &str) -> Self {
        let mut parts = line.trim().split(',');
        let mnemonic = parts.next().unwrap_or_default();
        ApdlCommand::positional(mnemonic, parts.map(|part| Field::from(part.trim())))
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }

    /// Four-letter abbreviation MAPDL uses to recognize the command.
    pub fn short_command(&self) -> String {
        short_command(&self.mnemonic)
    }
}

impl std::fmt::Display for ApdlCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fields.is_empty() {
            write!(f, "{}", self.mnemonic)
        } else {
            write!(f, "{},{}", self.mnemonic, self.fields.iter().join(","))
        }
    }
}

/// First four characters of the command name, uppercased.
/// `"K,,1,0,0"` gives `"K"`, `"VPLOT, ALL"` gives `"VPLO"`.
pub fn short_command(line: &str) -> String {
    line.split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .chars()
        .take(4)
        .collect::<String>()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_keypoint_with_blank_number() {
        let command = ApdlCommand::positional("k", [Field::Unset, 0.into(), 1.into(), 2.into()]);
        assert_eq!(command.to_string(), "K,,0,1,2");
    }

    #[test]
    fn keeps_trailing_blank_fields() {
        let command = ApdlCommand::new("ADELE")
            .push(1)
            .push(Field::Unset)
            .push("")
            .push(None::<i64>);
        assert_eq!(command.to_string(), "ADELE,1,,,");
    }

    #[test]
    fn bare_mnemonic() {
        assert_eq!(ApdlCommand::new("/prep7").to_string(), "/PREP7");
    }

    #[test]
    fn short_commands() {
        assert_eq!(short_command("K,,1,0,0"), "K");
        assert_eq!(short_command("VPLOT, ALL"), "VPLO");
        assert_eq!(short_command("  /nopr"), "/NOP");
        assert_eq!(ApdlCommand::new("blc4").short_command(), "BLC4");
    }

    #[test]
    fn splits_raw_lines() {
        let command = ApdlCommand::from_line(" block, 0, 1,,2 ");
        assert_eq!(command.mnemonic(), "BLOCK");
        assert_eq!(command.fields(), &[
            Field::Text("0".to_string()),
            Field::Text("1".to_string()),
            Field::Unset,
            Field::Text("2".to_string()),
        ]);
        assert_eq!(command.to_string(), "BLOCK,0,1,,2");
    }
}
