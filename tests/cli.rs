use assert_cmd::prelude::*;
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ean")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

#[test]
fn every_subcommand_has_help() -> Result<(), Box<dyn std::error::Error>> {
    for sub in ["lookup", "prefix", "search", "country", "checksum", "image"] {
        let mut cmd = Command::cargo_bin("ean")?;
        cmd.args([sub, "--help"]);
        cmd.assert().success();
    }

    Ok(())
}

// No request is sent when the token is missing, so this needs no network.
#[test]
fn missing_token_fails_before_any_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ean")?;

    cmd.env_remove("EAN_SEARCH_API_TOKEN")
        .args(["lookup", "5000112637922"]);
    cmd.assert().failure().code(2);

    Ok(())
}

#[test]
fn unknown_language_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("ean")?;

    cmd.args(["--token", "t", "--lang", "klingon", "lookup", "5000112637922"]);
    cmd.assert().failure();

    Ok(())
}
