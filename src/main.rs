use std::process::ExitCode;

use apdl_client::args::CliCommand;

fn main() -> ExitCode {

    // 1. Logging, silent unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 2. Parse commandline arguments and run the subcommand
    let cli = apdl_client::args::parse_cli_args();
    let result = match cli.sub_command {
        CliCommand::Format(format_args) => {
            apdl_client::format_command(&format_args).map(|command| println!("{}", command))
        },
        CliCommand::Parse(parse_args) => {
            apdl_client::parse_output(&parse_args).and_then(|result| {
                println!("{}", serde_json::to_string(&result)?);
                Ok(())
            })
        },
        CliCommand::Run(run_args) => apdl_client::run_script(&run_args),
        CliCommand::List(list_args) => {
            apdl_client::list_catalog(&list_args).map(|listing| println!("{}", listing))
        },
        CliCommand::Example(example_args) => apdl_client::example::display_config(&example_args),
    };

    // 3. Report errors through the exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("{}", err);
            ExitCode::from(1)
        },
    }
}
