/*!
 * This is the command catalog.
 * Every supported APDL command is a row in one of the group tables below.
 *
 * New commands need:
 * - A row in the table of their group (mnemonic, fields in APDL order, optional parser, summary)
 * - A new `Group` variant wired into `Group::commands` if the group does not exist yet
 *
 * A blank field name ("") marks a reserved slot that is always written empty.
 */

use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::command::ApdlCommand;
use crate::field::Field;
use crate::parse::ParserKind;

/// Build a static command table for one group.
/// `"MNEMONIC" [fields] -> ParserKind, "summary";`
macro_rules! command_table {
    (@parser) => { None };
    (@parser $parser:ident) => { Some($crate::parse::ParserKind::$parser) };
    ($group:ident; $( $mnemonic:literal [ $($field:literal),* $(,)? ] $(-> $parser:ident)? , $summary:literal ; )* ) => {
        &[ $(
            $crate::commands::CommandDef{
                mnemonic: $mnemonic,
                group: $crate::commands::Group::$group,
                summary: $summary,
                fields: &[ $($field),* ],
                parser: command_table!(@parser $($parser)?),
            },
        )* ]
    };
}

mod proc_errors;
mod areas;
mod booleans;
mod data_tables;
mod element_type;
mod elements;
mod keypoints;
mod lines;
mod nodes;
mod primitives;
mod volumes;

// Re-export errors
pub use proc_errors::{
    CommandError,
    ProcResult,
    err_str,
};

/// Functional area of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Group {
    Areas,
    Booleans,
    DataTables,
    ElementType,
    Elements,
    Keypoints,
    Lines,
    Nodes,
    Primitives,
    Volumes,
}
impl Group {
    /// Catalog rows of this group.
    pub fn commands(self) -> &'static [CommandDef] {
        match self {
            Group::Areas => areas::COMMANDS,
            Group::Booleans => booleans::COMMANDS,
            Group::DataTables => data_tables::COMMANDS,
            Group::ElementType => element_type::COMMANDS,
            Group::Elements => elements::COMMANDS,
            Group::Keypoints => keypoints::COMMANDS,
            Group::Lines => lines::COMMANDS,
            Group::Nodes => nodes::COMMANDS,
            Group::Primitives => primitives::COMMANDS,
            Group::Volumes => volumes::COMMANDS,
        }
    }
}

/// Catalog row: one APDL command and its parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDef {
    pub mnemonic: &'static str,
    pub group: Group,
    pub summary: &'static str,
    pub fields: &'static [&'static str],
    pub parser: Option<ParserKind>,
}
impl CommandDef {
    /// Command with every field blank.
    pub fn command(&self) -> ApdlCommand {
        ApdlCommand::positional(self.mnemonic, self.fields.iter().map(|_| Field::Unset))
    }

    /// Start building a command from named or positional values.
    pub fn builder(&'static self) -> CommandBuilder {
        CommandBuilder{def: self, command: self.command()}
    }

    /// Names of the settable fields, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().copied().filter(|name| !name.is_empty())
    }

    /// Slot index of a named field (case-insensitive).
    fn slot(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.fields.iter().position(|field| field.eq_ignore_ascii_case(name))
    }
}

/// Builder filling the fields of one catalog command.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    def: &'static CommandDef,
    command: ApdlCommand,
}
impl CommandBuilder {
    /// Set a field by name.
    pub fn set(mut self, name: &str, value: impl Into<Field>) -> ProcResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return err_str(&format!("Empty field name for {}", self.def.mnemonic));
        }
        let slot = match self.def.slot(name) {
            Some(slot) => slot,
            None => return Err(CommandError::UnknownField{
                mnemonic: self.def.mnemonic.to_string(),
                field: name.to_string(),
            }),
        };
        self.command.fields_mut()[slot] = value.into();
        Ok(self)
    }

    /// Fill the named fields in order, skipping reserved slots.
    pub fn positional<I, F>(mut self, values: I) -> ProcResult<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<Field>>();
        let slots = self.def.fields
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(slot, _)| slot)
            .collect::<Vec<_>>();

        if values.len() > slots.len() {
            return Err(CommandError::TooManyFields{
                mnemonic: self.def.mnemonic.to_string(),
                expected: slots.len(),
                got: values.len(),
            });
        }
        for (slot, value) in slots.into_iter().zip(values) {
            self.command.fields_mut()[slot] = value;
        }
        Ok(self)
    }

    pub fn build(self) -> ApdlCommand {
        self.command
    }
}

/// Look up a command by mnemonic (case-insensitive).
pub fn lookup(mnemonic: &str) -> Option<&'static CommandDef> {
    let mnemonic = mnemonic.trim();
    all().find(|def| def.mnemonic.eq_ignore_ascii_case(mnemonic))
}

/// Look up a command, erroring if it is not in the catalog.
pub fn get(mnemonic: &str) -> ProcResult<&'static CommandDef> {
    match lookup(mnemonic) {
        Some(def) => Ok(def),
        None => Err(CommandError::UnknownCommand(mnemonic.trim().to_ascii_uppercase())),
    }
}

/// Every catalog row, group by group.
pub fn all() -> impl Iterator<Item = &'static CommandDef> {
    Group::iter().flat_map(|group| group.commands().iter())
}

/// Catalog rows of one group.
pub fn by_group(group: Group) -> &'static [CommandDef] {
    group.commands()
}

/// Parser applied to the response of a command, if any.
pub fn parser_for(mnemonic: &str) -> Option<ParserKind> {
    lookup(mnemonic).and_then(|def| def.parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mnemonics_are_unique() {
        let mut seen = HashSet::new();
        for def in all() {
            assert!(seen.insert(def.mnemonic), "duplicate catalog entry {}", def.mnemonic);
        }
    }

    #[test]
    fn rows_sit_in_their_group_table() {
        for group in Group::iter() {
            assert!(!by_group(group).is_empty(), "empty group {}", group);
            for def in by_group(group) {
                assert_eq!(def.group, group, "{} is filed under the wrong group", def.mnemonic);
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("blc4").map(|d| d.mnemonic), Some("BLC4"));
        assert_eq!(lookup(" K ").map(|d| d.mnemonic), Some("K"));
        assert!(lookup("NOPE").is_none());
        assert!(matches!(get("nope"), Err(CommandError::UnknownCommand(m)) if m == "NOPE"));
    }

    #[test]
    fn parsers_by_mnemonic() {
        assert_eq!(parser_for("E"), Some(ParserKind::Element));
        assert_eq!(parser_for("ET"), Some(ParserKind::ElementType));
        assert_eq!(parser_for("K"), Some(ParserKind::Keypoint));
        assert_eq!(parser_for("KDIST"), Some(ParserKind::KeypointDistance));
        assert_eq!(parser_for("NDIST"), Some(ParserKind::NodeDistance));
        assert_eq!(parser_for("V"), Some(ParserKind::VolumeNumber));
        assert_eq!(parser_for("BLOCK"), Some(ParserKind::OutputVolumeArea));
        assert_eq!(parser_for("CIRCLE"), Some(ParserKind::LineNumbers));
        assert_eq!(parser_for("AADD"), Some(ParserKind::OutputAreas));
        assert_eq!(parser_for("ADELE"), None);
        assert_eq!(parser_for("TB"), None);
    }

    #[test]
    fn blank_command_keeps_every_slot() {
        assert_eq!(get("ADELE").unwrap().command().to_string(), "ADELE,,,,");
        assert_eq!(get("K").unwrap().command().to_string(), "K,,,,");
        assert_eq!(get("EPLOT").unwrap().command().to_string(), "EPLOT");
    }

    #[test]
    fn builder_by_name() {
        let command = get("K").unwrap()
            .builder()
            .set("x", 0)
            .unwrap()
            .set("Y", 1)
            .unwrap()
            .set("z", 2)
            .unwrap()
            .build();
        assert_eq!(command.to_string(), "K,,0,1,2");

        let err = get("K").unwrap().builder().set("w", 1).unwrap_err();
        assert!(matches!(err, CommandError::UnknownField{..}));
    }

    #[test]
    fn builder_positional_skips_reserved_slots() {
        let command = get("EWRITE").unwrap()
            .builder()
            .positional(["file", "elem", "1", "LONG"])
            .unwrap()
            .build();
        assert_eq!(command.to_string(), "EWRITE,file,elem,,1,LONG");

        let command = get("TB").unwrap()
            .builder()
            .positional([Field::from("BISO"), 1.into(), 2.into()])
            .unwrap()
            .build();
        assert_eq!(command.to_string(), "TB,BISO,1,2,,,,");
    }

    #[test]
    fn builder_rejects_extra_values() {
        let err = get("LSTR").unwrap().builder().positional([1, 2, 3]).unwrap_err();
        assert!(matches!(err, CommandError::TooManyFields{expected: 2, got: 3, ..}));
    }

    #[test]
    fn reserved_slots_cannot_be_named() {
        assert!(get("EWRITE").unwrap().builder().set("", 1).is_err());
    }

    #[test]
    fn field_names_skip_reserved_slots() {
        let names = get("TB").unwrap().field_names().collect::<Vec<_>>();
        assert_eq!(names, vec!["lab", "matid", "ntemp", "npts", "tbopt", "funcname"]);
    }
}
