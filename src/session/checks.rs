//! Checks applied to commands before they are sent and to the text MAPDL returns.

use std::sync::LazyLock;

use regex::Regex;

use super::{SessionError, ProcResult};

/// Lines of an error block taken into account.
const ERROR_BLOCK_LINES: usize = 20;

/// Commands (by prefix) that cannot run in interactive mode, with the hint shown to the user.
const INVALID_COMMANDS: &[(&str, &str)] = &[
    ("*VWR", "*VWRITE cannot run interactively. Run it inside `non_interactive` followed by its format line."),
    ("*CFO", "Run *CFOPEN inside `non_interactive`."),
    ("*CRE", "Create the macro on the client side or run it inside `non_interactive`."),
    ("*END", "Create the macro on the client side or run it inside `non_interactive`."),
    ("/EOF", "Unsupported command. Use `exit` to stop the session."),
    ("*ASK", "Unsupported command. Ask for input on the client side."),
    ("*IF", "Branch on the client side or run it inside `non_interactive`."),
    ("CMAT", "Run CMATRIX inside `non_interactive`."),
    ("*REP", "Run *REPEAT inside `non_interactive`."),
    ("LSRE", "Run LSREAD inside `non_interactive`."),
];

/// Commands (by full mnemonic) replaced by a comment in interactive mode.
const SILENT_COMMANDS: &[(&str, &str)] = &[
    ("/NOPR", "Suppressing console output is disabled in interactive mode"),
];

/// Errors that are logged but do not fail the command.
static PERMITTED_ERRORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\*\*\* ERROR \*\*\*).*(?:[\r\n]+.*)+highly distorted.",
        r"(\*\*\* ERROR \*\*\*).*[\r\n]+.*is turning inside out.",
        r"(\*\*\* ERROR \*\*\*).*[\r\n]+.*The distributed memory parallel solution does not support KRYLOV method",
    ]
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(error) => {
                log::error!("Bad permitted error pattern {}: {}", pattern, error);
                None
            },
        })
        .collect()
});

static PARAMETER_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z\d_(),\s%]{0,31}$").ok());
static RESERVED_UNDERSCORE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^_[a-zA-Z\d_(),\s]{1,31}[a-zA-Z\d(),\s]$").ok());
static RESERVED_ARG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^(AR|ARG)(\d{1,3})$").ok());

fn is_match(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|regex| regex.is_match(text))
}

/// Hint for a command that cannot run interactively.
pub fn invalid_command_hint(command: &str) -> Option<&'static str> {
    let command = command.trim_start().to_ascii_uppercase();
    INVALID_COMMANDS
        .iter()
        .find(|(prefix, _)| command.starts_with(prefix))
        .map(|(_, hint)| *hint)
}

/// Reason a command is silently dropped in interactive mode.
pub fn silent_command_reason(mnemonic: &str) -> Option<&'static str> {
    SILENT_COMMANDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(mnemonic.trim()))
        .map(|(_, reason)| *reason)
}

/// Validate the left side of a parameter assignment.
pub fn check_parameter_name(name: &str) -> ProcResult<()> {
    let name = name.trim();
    let invalid = |reason| Err(SessionError::InvalidParameter{name: name.to_string(), reason});

    if !is_match(&PARAMETER_NAME, name) {
        return invalid("only letters, numbers and `_` are allowed, up to 32 characters, not starting with a number");
    }

    if name.contains('(') || name.contains(')') {
        if name.matches('(').count() != name.matches(')').count() {
            return invalid("parentheses must be balanced");
        }
        if !name.ends_with(')') {
            return invalid("nothing may follow the closing parenthesis");
        }
        // Indexed parameter: the array name itself is checked
        if let Some(open) = name.rfind('(') {
            return check_parameter_name(&name[..open]);
        }
    }

    if is_match(&RESERVED_UNDERSCORE, name) {
        return invalid("names starting with `_` are reserved for the GUI and MAPDL macros");
    }
    if is_match(&RESERVED_ARG, name) {
        return invalid("ARGnn and ARnn are reserved for macro local parameters");
    }
    Ok(())
}

/// Raise the errors MAPDL reports in a response.
pub fn check_response(text: &str, instance: &str) -> ProcResult<()> {
    // Joined so messages split over lines still match
    let flat = text.lines().map(str::trim).collect::<Vec<_>>().join(" ");

    if flat.contains("unable to open file") || (flat.contains("unable to open") && flat.contains("file")) {
        return Err(SessionError::FileNotFound(text.to_string()));
    }
    if flat.contains("is not a recognized") {
        return Err(SessionError::InvalidRoutine(text.replace("This command will be ignored.", "").trim().to_string()));
    }
    if flat.contains("command is ignored") {
        return Err(SessionError::CommandIgnored(text.to_string()));
    }
    if flat.contains("The component definition of") && flat.contains("contains no data.") {
        return Err(SessionError::ComponentNoData(text.to_string()));
    }
    if flat.contains("is not part of the currently active set.") || flat.contains("No nodes defined.") {
        return Err(SessionError::CommandIgnored(text.to_string()));
    }
    if flat.contains("For element type = ") && flat.contains("is invalid.") {
        if flat.contains("is normal behavior when a CDB file is used.") {
            log::warn!("{}", text);
        } else {
            return Err(SessionError::CommandIgnored(text.to_string()));
        }
    }
    if flat.contains("Cannot create another with the same name") {
        log::warn!("{}", text);
    }

    if flat.contains("*** ERROR ***") {
        check_error_blocks(text, instance)?;
    }
    Ok(())
}

/// Fail on the first `*** ERROR ***` block that is not a permitted error.
fn check_error_blocks(text: &str, instance: &str) -> ProcResult<()> {
    let lines = text.lines().collect::<Vec<_>>();
    for (index, line) in lines.iter().enumerate() {
        if !line.contains("*** ERROR ***") {
            continue;
        }
        let message = error_block(&lines[index..]);
        if PERMITTED_ERRORS.iter().any(|regex| regex.is_match(&message)) {
            log::warn!("Permitted error: {}", message);
            continue;
        }
        return Err(SessionError::Runtime{instance: instance.to_string(), message});
    }
    Ok(())
}

/// Error header plus the lines after it, up to a blank line or the next `***` header.
fn error_block(lines: &[&str]) -> String {
    let mut block = Vec::new();
    for (n, line) in lines.iter().take(ERROR_BLOCK_LINES).enumerate() {
        if n > 0 && (line.trim().is_empty() || line.contains("***")) {
            break;
        }
        block.push(line.trim_end());
    }
    block.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_commands_by_prefix() {
        assert!(invalid_command_hint("*VWRITE,ARR(1)").is_some());
        assert!(invalid_command_hint("*if,a,eq,1,then").is_some());
        assert!(invalid_command_hint("  /eof").is_some());
        assert!(invalid_command_hint("LSREAD,1").is_some());
        assert!(invalid_command_hint("K,1,0,0,0").is_none());
        assert!(invalid_command_hint("*GET,A,ACTIVE,0,ROUT").is_none());
    }

    #[test]
    fn silent_commands_by_mnemonic() {
        assert!(silent_command_reason("/nopr").is_some());
        assert!(silent_command_reason("/GOPR").is_none());
    }

    #[test]
    fn parameter_names() {
        assert!(check_parameter_name("WIDTH").is_ok());
        assert!(check_parameter_name(" my_par ").is_ok());
        assert!(check_parameter_name("ARR(1,2)").is_ok());
        assert!(check_parameter_name("trailing_").is_ok());

        for name in ["1ABC", "A-B", "ARR(1", "ARR(1)X", "_RESERVED", "ARG1", "AR20", "A_NAME_LONGER_THAN_THIRTY_TWO_CHARS"] {
            assert!(
                matches!(check_parameter_name(name), Err(SessionError::InvalidParameter{..})),
                "{} should be rejected", name
            );
        }
    }

    #[test]
    fn response_errors() {
        assert!(check_response(" KEYPOINT NUMBER =      1", "apdl").is_ok());
        assert!(matches!(
            check_response("Unable to open file\n unable to open\n file.cdb", "apdl"),
            Err(SessionError::FileNotFound(_))
        ));
        assert!(matches!(
            check_response("*** WARNING ***\n FOO is not a recognized PREP7 command. This command will be ignored.", "apdl"),
            Err(SessionError::InvalidRoutine(text)) if !text.contains("will be ignored")
        ));
        assert!(matches!(
            check_response("The command is ignored.", "apdl"),
            Err(SessionError::CommandIgnored(_))
        ));
        assert!(matches!(
            check_response("The component definition of MYCOMP\n contains no data.", "apdl"),
            Err(SessionError::ComponentNoData(_))
        ));
        assert!(matches!(
            check_response("No nodes defined.", "apdl"),
            Err(SessionError::CommandIgnored(_))
        ));
        assert!(matches!(
            check_response("For element type = 3 is invalid.", "apdl"),
            Err(SessionError::CommandIgnored(_))
        ));
        assert!(check_response("For element type = 3 is invalid.\nThis is normal behavior when a CDB file is used.", "apdl").is_ok());
    }

    #[test]
    fn runtime_error_keeps_first_block() {
        let response = concat!(
            " *** ERROR ***                           CP =       0.156   TIME= 10:33:42\n",
            " Keypoint 3 is referenced by only one line.\n",
            " Areas may not be defined by less than 3 lines.\n",
            "\n",
            " *** NOTE ***\n",
            " Something unrelated.",
        );
        match check_response(response, "mapdl-0") {
            Err(SessionError::Runtime{instance, message}) => {
                assert_eq!(instance, "mapdl-0");
                assert!(message.starts_with(" *** ERROR ***"));
                assert!(message.contains("less than 3 lines."));
                assert!(!message.contains("NOTE"));
            },
            other => panic!("expected a runtime error, got {:?}", other),
        }
    }

    #[test]
    fn permitted_errors_pass() {
        let response = " *** ERROR ***\n Element 12 is turning inside out.";
        assert!(check_response(response, "apdl").is_ok());

        let response = " *** ERROR ***\n Shape testing revealed that 4 elements\n are highly distorted.";
        assert!(check_response(response, "apdl").is_ok());
    }
}
