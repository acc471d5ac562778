use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_csv_handling() {
    let file = NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(["action", "id", "amount", "method"]).unwrap();

    // Valid create
    wtr.write_record(["create", "1", "1.0", "card"]).unwrap();
    // Unknown action
    wtr.write_record(["refund", "1", "", ""]).unwrap();
    // Non-integer id
    wtr.write_record(["create", "abc", "1.0", "card"]).unwrap();
    // Missing amount
    wtr.write_record(["create", "2", "", "card"]).unwrap();
    // Unparsable amount
    wtr.write_record(["create", "3", "not_a_number", "card"]).unwrap();
    // Unknown payment label
    wtr.write_record(["process", "42", "", ""]).unwrap();
    // Valid create again
    wtr.write_record(["create", "4", "2.0", "cash"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("pagos"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading instruction"))
        .stderr(predicate::str::contains("Missing field: amount"))
        .stderr(predicate::str::contains("invalid amount: not_a_number"))
        .stderr(predicate::str::contains("Unknown payment id: 42"))
        .stdout(predicate::str::contains(",1.0,card,created"))
        .stdout(predicate::str::contains(",2.0,cash,created"));
}

#[test]
fn test_duplicate_label_keeps_first_payment() {
    let file = NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(["action", "id", "amount", "method"]).unwrap();
    wtr.write_record(["create", "1", "10", "card"]).unwrap();
    wtr.write_record(["create", "1", "99", "card"]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("pagos"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Payment id already used in this batch: 1"))
        .stdout(predicate::str::contains(",10,card,created"))
        .stdout(predicate::str::contains(",99,").not());
}
