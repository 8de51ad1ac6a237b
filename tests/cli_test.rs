use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn help_describes_the_server_flags() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-gateway"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--listen"))
        .stdout(predicate::str::contains("--bank-url"))
        .stdout(predicate::str::contains("--bank-timeout-secs"));

    Ok(())
}

#[test]
fn unknown_flags_are_rejected() {
    let mut cmd = Command::new(cargo_bin!("payment-gateway"));
    cmd.arg("--definitely-not-a-flag");

    cmd.assert().failure();
}
