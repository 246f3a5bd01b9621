pub mod field;
pub mod command;
pub mod commands;
pub mod parse;
pub mod session;
pub mod args;
pub mod io;
pub mod example;
mod crate_errors;

use std::str::FromStr;

use itertools::Itertools;
use strum::IntoEnumIterator;

pub use crate_errors::{
    ApdlError,
    ApdlResult,
    err_str,
};
pub use command::{
    ApdlCommand,
    short_command,
};
pub use field::Field;
pub use parse::{
    ParseResult,
    Parsed,
    ParserKind,
};
pub use session::{
    Reply,
    Session,
};

/// Build the command line for the `format` subcommand.
/// Catalog commands are checked against their field names; `raw` lets any mnemonic through.
pub fn format_command(format_args: &args::FormatArgs) -> ApdlResult<ApdlCommand> {
    let fields = format_args.fields.iter().map(|value| Field::from(value.as_str()));

    if format_args.raw && commands::lookup(&format_args.mnemonic).is_none() {
        if !format_args.set.is_empty() {
            return err_str("Named fields (-s) need a catalog command");
        }
        return Ok(ApdlCommand::positional(&format_args.mnemonic, fields));
    }
    let def = commands::get(&format_args.mnemonic)?;

    let mut builder = def.builder().positional(fields)?;
    for assignment in format_args.set.iter() {
        let (name, value) = args::split_assignment(assignment)?;
        builder = builder.set(name, value)?;
    }
    Ok(builder.build())
}

/// Find a parser from its name, its legacy function name or a command that uses it.
pub fn resolve_parser(name: &str) -> args::ProcResult<ParserKind> {
    if let Ok(kind) = ParserKind::from_str(name.trim()) {
        return Ok(kind);
    }
    match commands::parser_for(name) {
        Some(kind) => Ok(kind),
        None => Err(args::ArgError::UnknownParser(name.to_string())),
    }
}

/// Run the `parse` subcommand on a file or stdin.
pub fn parse_output(parse_args: &args::ParseArgs) -> ApdlResult<ParseResult> {
    let kind = resolve_parser(&parse_args.parser)?;
    let text = match parse_args.input_path.as_ref() {
        Some(input_path) => io::read_to_string(input_path)?,
        None => io::read_stdin()?,
    };
    Ok(parse::parse(kind, Some(text.trim())))
}

/// Run an APDL script through a session built from a config file.
/// Blank lines and `!` comment lines are skipped.
pub fn run_script(run_args: &args::RunArgs) -> ApdlResult<()> {
    log::info!("Loading session config file: {}", run_args.cfg_file);
    let target = session::SessionTarget::from_cfg_file(&run_args.cfg_file)?;
    let mut session = Session::from_target(target)?;
    if run_args.ignore_errors {
        session.set_ignore_errors(true);
    }

    let script = io::read_to_string(&run_args.script)?;
    for line in script.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('!') {
            continue;
        }
        let reply = session.send_line(line)?;
        match run_args.format {
            args::OutputFormat::Text => print_reply(&reply),
            args::OutputFormat::Json => println!("{}", serde_json::to_string(&reply)?),
        }
    }

    session.exit()?;
    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("> {}", reply.command);
    if let Some(response) = reply.response.as_ref() {
        println!("{}", response);
    }
    match reply.parsed.clone().found() {
        Some(Parsed::Id(id)) => println!("= {}", id),
        Some(Parsed::Ids(ids)) => println!("= {}", ids.iter().join(" ")),
        Some(Parsed::Distance(distance)) => println!("= {}", distance.as_array().iter().join(" ")),
        None => {},
    }
}

/// Listing for the `list` subcommand.
pub fn list_catalog(list_args: &args::ListArgs) -> ApdlResult<String> {
    if list_args.parsers {
        let lines = ParserKind::iter()
            .map(|kind| {
                let users = commands::all()
                    .filter(|def| def.parser == Some(kind))
                    .map(|def| def.mnemonic)
                    .join(" ");
                format!("{:<20} {}", kind.to_string(), users)
            })
            .collect::<Vec<_>>();
        return Ok(lines.join("\n"));
    }

    let groups = match list_args.group.as_ref() {
        Some(group) => match commands::Group::from_str(group) {
            Ok(group) => vec![group],
            Err(_) => {
                let available = commands::Group::iter().join(", ");
                return err_str(&format!("Unknown group \"{}\". Available groups: {}", group, available));
            },
        },
        None => commands::Group::iter().collect(),
    };

    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("[{}]", group));
        for def in commands::by_group(group) {
            let parser = match def.parser {
                Some(kind) => format!(" -> {}", kind),
                None => String::new(),
            };
            lines.push(format!("  {:<10} {}{}", def.mnemonic, def.summary, parser));
            lines.push(format!("  {:<10} {}", "", def.command()));
        }
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_args(mnemonic: &str, fields: &[&str], set: &[&str], raw: bool) -> args::FormatArgs {
        args::FormatArgs{
            mnemonic: mnemonic.to_string(),
            set: set.iter().map(|s| s.to_string()).collect(),
            raw,
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn formats_catalog_commands() {
        let command = format_command(&format_args("k", &["", "0", "1", "2"], &[], false)).unwrap();
        assert_eq!(command.to_string(), "K,,0,1,2");

        let command = format_command(&format_args("ADELE", &["1"], &[], false)).unwrap();
        assert_eq!(command.to_string(), "ADELE,1,,,");

        let command = format_command(&format_args("ET", &["1"], &["ename=SOLID185"], false)).unwrap();
        assert_eq!(command.to_string(), "ET,1,SOLID185,,,,,,,");
    }

    #[test]
    fn format_errors() {
        assert!(matches!(
            format_command(&format_args("NOPE", &[], &[], false)),
            Err(ApdlError::CommandError(commands::CommandError::UnknownCommand(_)))
        ));
        assert!(matches!(
            format_command(&format_args("K", &[], &["w=1"], false)),
            Err(ApdlError::CommandError(commands::CommandError::UnknownField{..}))
        ));
        assert!(matches!(
            format_command(&format_args("K", &[], &["w"], false)),
            Err(ApdlError::ArgError(args::ArgError::BadAssignment(_)))
        ));
        assert!(format_command(&format_args("/SOLU", &[], &["a=1"], true)).is_err());
    }

    #[test]
    fn formats_raw_commands() {
        let command = format_command(&format_args("/solu", &[], &[], true)).unwrap();
        assert_eq!(command.to_string(), "/SOLU");
        let command = format_command(&format_args("antype", &["STATIC", ""], &[], true)).unwrap();
        assert_eq!(command.to_string(), "ANTYPE,STATIC,");
    }

    #[test]
    fn resolves_parsers() {
        assert_eq!(resolve_parser("keypoint").unwrap(), ParserKind::Keypoint);
        assert_eq!(resolve_parser("parse_kdist").unwrap(), ParserKind::KeypointDistance);
        assert_eq!(resolve_parser("blc4").unwrap(), ParserKind::OutputVolumeArea);
        assert!(matches!(resolve_parser("ADELE"), Err(args::ArgError::UnknownParser(_))));
    }

    #[test]
    fn parses_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        io::write_to_file(path.to_str().unwrap(), "\n ELEMENT TYPE   3 IS SOLID185\n").unwrap();
        let result = parse_output(&args::ParseArgs{
            parser: "ET".to_string(),
            input_path: Some(path.to_str().unwrap().to_string()),
        }).unwrap();
        assert_eq!(result.entity_id(), Some(3));
    }

    #[test]
    fn lists_catalog() {
        let listing = list_catalog(&args::ListArgs{group: Some("keypoints".to_string()), parsers: false}).unwrap();
        assert!(listing.starts_with("[keypoints]"));
        assert!(listing.contains("KDIST"));
        assert!(listing.contains("-> keypoint_distance"));
        assert!(!listing.contains("BLOCK"));

        let parsers = list_catalog(&args::ListArgs{group: None, parsers: true}).unwrap();
        assert!(parsers.lines().any(|line| line.starts_with("output_volume_area") && line.contains("BLC4")));

        assert!(list_catalog(&args::ListArgs{group: Some("meshing".to_string()), parsers: false}).is_err());
    }
}
