use assert_cmd::cargo_bin;
use std::process::Command;

mod common;

#[test]
fn test_large_batch_streaming() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("large_batch.csv");
    common::generate_lifecycle_csv(&input, 10_000).expect("Failed to generate CSV");

    let output = Command::new(cargo_bin!("pagos"))
        .arg(&input)
        .env_remove("RUST_LOG")
        .env_remove("PAYMENT_PROCESSOR_TYPE")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Binary failed to process batch");

    let stdout = String::from_utf8_lossy(&output.stdout);
    // header + one row per payment
    assert_eq!(stdout.lines().count(), 10_001);
    assert!(stdout.lines().skip(1).all(|l| l.ends_with(",1.00,card,confirmed")));
    assert!(output.stderr.is_empty());
}
