use assert_cmd::Command;
use httpmock::prelude::*;
use predicates as pred;
use tempfile::TempDir;

fn lookup_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_birthday-lookup"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn end_to_end_session_prints_people_and_logs_bad_rows() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/people.csv");
        then.status(200)
            .body("1,Alice,01/02/1990\n2,Bob,31/13/2000\n3,Carol,15/08/1985");
    });

    lookup_cmd(&temp_dir)
        .arg("--url")
        .arg(server.url("/people.csv"))
        .write_stdin("3\n2\n0\n")
        .assert()
        .success()
        .stdout(pred::str::contains(
            "Person #3 is Carol with a birthday of 1985-08-15\n\n",
        ))
        .stdout(pred::str::contains("No user found with that ID\n"));

    let log = std::fs::read_to_string(temp_dir.path().join("error.log")).expect("error.log written");
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("ERROR - Error processing line #2: for ID #2:"));
}

#[test]
fn custom_error_log_location() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/people.csv");
        then.status(200).body("1,Alice\n");
    });

    lookup_cmd(&temp_dir)
        .arg("--url")
        .arg(server.url("/people.csv"))
        .arg("--error-log")
        .arg("rows.log")
        .write_stdin("0\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("rows.log").exists());
    assert!(!temp_dir.path().join("error.log").exists());
}

#[test]
fn missing_url_flag_is_usage_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    lookup_cmd(&temp_dir)
        .assert()
        .failure()
        .stderr(pred::str::contains("--url"));
}

#[test]
fn invalid_url_exits_with_configuration_code() {
    let temp_dir = TempDir::new().expect("create temp dir");
    lookup_cmd(&temp_dir)
        .args(["--url", "ftp://example.com/people.csv"])
        .assert()
        .code(1)
        .stderr(pred::str::contains("Unsupported URL scheme: ftp"));
}

#[test]
fn http_failure_exits_with_network_code() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/people.csv");
        then.status(404);
    });

    lookup_cmd(&temp_dir)
        .arg("--url")
        .arg(server.url("/people.csv"))
        .write_stdin("1\n")
        .assert()
        .code(2)
        .stdout(pred::str::is_empty());
}

#[test]
fn undecodable_payload_exits_with_decode_code() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/people.csv");
        then.status(200).body(vec![0xffu8, 0xfe, 0x00]);
    });

    lookup_cmd(&temp_dir)
        .arg("--url")
        .arg(server.url("/people.csv"))
        .assert()
        .code(3);
}
