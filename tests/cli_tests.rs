use assert_cmd::Command;

fn apdl_client() -> Command {
    Command::cargo_bin("apdl-client").unwrap()
}

#[test]
fn test_subcommand_options(){
    let output = apdl_client().assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();

    assert!(stderr.contains("Usage: apdl-client <COMMAND>"));
    for sub_command in ["format", "parse", "run", "list", "example"] {
        assert!(stderr.contains(&format!("  {}", sub_command)), "{}", stderr);
    }
}

#[test]
fn test_format() {
    apdl_client()
        .args(["format", "k", "", "0", "1", "2"])
        .assert()
        .success()
        .stdout("K,,0,1,2\n");

    apdl_client()
        .args(["format", "-s", "z2=-2.5", "BLOCK", "0", "1", "0", "1"])
        .assert()
        .success()
        .stdout("BLOCK,0,1,0,1,,-2.5\n");

    apdl_client()
        .args(["format", "--raw", "/SOLU"])
        .assert()
        .success()
        .stdout("/SOLU\n");
}

#[test]
fn test_format_errors() {
    let output = apdl_client().args(["format", "NOTACMD", "1"]).assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("! COMMAND ERROR:"), "{}", stderr);
    assert!(stderr.contains("NOTACMD"), "{}", stderr);

    apdl_client().args(["format", "-s", "w=1", "K"]).assert().failure();
    apdl_client().args(["format", "LSTR", "1", "2", "3"]).assert().failure();
}

#[test]
fn test_parse_stdin() {
    apdl_client()
        .args(["parse", "K"])
        .write_stdin("\n KEYPOINT NUMBER =      7\n")
        .assert()
        .success()
        .stdout("{\"status\":\"found\",\"value\":{\"id\":7}}\n");

    apdl_client()
        .args(["parse", "line_numbers"])
        .write_stdin("LINE NO.=   1\nLINE NO.=   2\n")
        .assert()
        .success()
        .stdout("{\"status\":\"found\",\"value\":{\"ids\":[1,2]}}\n");

    apdl_client()
        .args(["parse", "parse_a"])
        .write_stdin("nothing to see here\n")
        .assert()
        .success()
        .stdout("{\"status\":\"not_found\"}\n");

    apdl_client().args(["parse", "not_a_parser"]).write_stdin("").assert().failure();
}

#[test]
fn test_list() {
    let output = apdl_client().args(["list", "-g", "primitives"]).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.starts_with("[primitives]"));
    assert!(stdout.contains("BLC4"));
    assert!(!stdout.contains("KDIST"));

    apdl_client().args(["list", "--parsers"]).assert().success();
    apdl_client().args(["list", "-g", "nope"]).assert().failure();
}

#[test]
fn test_example() {
    let output = apdl_client().args(["example", "-t", "echo", "-f", "json"]).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("\"transport\": \"echo\""), "{}", stdout);
    assert!(stdout.contains("default_response"), "{}", stdout);

    apdl_client().args(["example", "-t", "grpc"]).assert().failure();
}

#[test]
fn test_run_script() {
    let dir = tempfile::tempdir().unwrap();
    let echo_cfg = dir.path().join("echo.yaml");
    std::fs::write(&echo_cfg, "responses:\n  K: \"KEYPOINT NUMBER = {count}\"\n").unwrap();
    let cfg = dir.path().join("session.yaml");
    std::fs::write(&cfg, format!("transport: echo\ntransport_cfg: {}\n", echo_cfg.display())).unwrap();
    let script = dir.path().join("script.inp");
    std::fs::write(&script, "! two keypoints\nK,,0,0,0\n\nK,,1,0,0\n").unwrap();

    let output = apdl_client()
        .args(["run", "-c", cfg.to_str().unwrap(), script.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("> K,,0,0,0\nKEYPOINT NUMBER = 1\n= 1\n"), "{}", stdout);
    assert!(stdout.contains("> K,,1,0,0\nKEYPOINT NUMBER = 2\n= 2\n"), "{}", stdout);
    assert!(!stdout.contains("two keypoints"));

    let output = apdl_client()
        .args(["run", "-c", cfg.to_str().unwrap(), "--format", "json", script.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let replies = stdout.lines().map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()).collect::<Vec<_>>();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[1]["parsed"]["value"]["id"], 2);
}

#[test]
fn test_run_stops_on_errors() {
    let dir = tempfile::tempdir().unwrap();
    let echo_cfg = dir.path().join("echo.json");
    std::fs::write(&echo_cfg, r#"{"default_response": "*** ERROR ***\nSomething went wrong.\n"}"#).unwrap();
    let cfg = dir.path().join("session.json");
    std::fs::write(&cfg, format!(r#"{{"transport": "echo", "transport_cfg": {:?}}}"#, echo_cfg.to_str().unwrap())).unwrap();
    let script = dir.path().join("script.inp");
    std::fs::write(&script, "FINISH\n").unwrap();

    apdl_client()
        .args(["run", "-c", cfg.to_str().unwrap(), script.to_str().unwrap()])
        .assert()
        .failure();

    apdl_client()
        .args(["run", "-c", cfg.to_str().unwrap(), "--ignore-errors", script.to_str().unwrap()])
        .assert()
        .success();
}
