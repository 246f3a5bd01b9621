use serde::Serialize;

use crate::{
    args,
    session,
    err_str,
    ApdlResult,
};
use session::Transport;

/// Serialize a config in the requested file format.
fn to_cfg_string<T: Serialize>(cfg: &T, format: args::Format) -> args::ProcResult<String> {
    Ok(match format {
        args::Format::Yaml => serde_yaml::to_string(cfg)?,
        args::Format::Json => serde_json::to_string_pretty(cfg)?,
        args::Format::Toml => toml::to_string_pretty(cfg)?,
    })
}

fn extension(format: args::Format) -> &'static str {
    match format {
        args::Format::Yaml => "yaml",
        args::Format::Json => "json",
        args::Format::Toml => "toml",
    }
}

/// Example session config and transport config for a transport.
/// Without a transport name, the available transports are listed.
pub fn example_config(example_args: &args::ExampleArgs) -> ApdlResult<String> {
    let available_transports_str = format!(
        "Available transports:\n{}",
        session::TransportChoice::names().map(|name| format!("    {}", name)).collect::<Vec<_>>().join("\n"),
    );

    let transport_name = match example_args.transport.as_ref() {
        Some(transport_name) => transport_name,
        None => return Ok(available_transports_str),
    };
    if !session::TransportChoice::names().any(|name| name == transport_name) {
        return err_str(&format!("Transport \"{}\" not found. {}", transport_name, available_transports_str));
    }

    let target = session::SessionTarget::with_transport(transport_name)?;
    let ext = extension(example_args.format);
    let session_args = session::SessionArgs{
        transport_cfg: Some(format!("PATH/TO/TRANSPORT/CFG.{}", ext)),
        apdl_log: Some("OPTIONAL/PATH/TO/LOG.inp".to_string()),
        ..target.session_args
    };
    let transport_cfg = target.transport.get_transport_cfg()?;

    Ok(format!(
        "# Session config ({}.{})\n{}\n# Transport config for {} (CFG.{})\n{}",
        "session",
        ext,
        to_cfg_string(&session_args, example_args.format)?.trim_end(),
        target.transport.get_transport_name(),
        ext,
        to_cfg_string(&transport_cfg, example_args.format)?.trim_end(),
    ))
}

/// Print an example config.
pub fn display_config(example_args: &args::ExampleArgs) -> ApdlResult<()> {
    println!("{}", example_config(example_args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(transport: Option<&str>, format: args::Format) -> ApdlResult<String> {
        example_config(&args::ExampleArgs{transport: transport.map(str::to_string), format})
    }

    #[test]
    fn lists_transports() {
        let listing = example(None, args::Format::Yaml).unwrap();
        assert!(listing.contains("echo"));
        assert!(listing.contains("deck"));
    }

    #[test]
    fn every_transport_in_every_format() {
        for name in session::TransportChoice::names() {
            for format in [args::Format::Yaml, args::Format::Json, args::Format::Toml] {
                let text = example(Some(name), format).unwrap();
                assert!(text.contains(name), "{}", text);
                assert!(text.contains("ignore_errors"), "{}", text);
            }
        }
        assert!(example(Some("deck"), args::Format::Toml).unwrap().contains("input.inp"));
    }

    #[test]
    fn unknown_transport() {
        assert!(example(Some("corba"), args::Format::Json).is_err());
    }
}
