//! End-to-end CLI tests
//!
//! Each test points LEDGER_CLI_DATA_DIR at its own temp directory so tests
//! never share state.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_data_files() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("data").join("transactions.json").exists());
    assert!(dir.path().join("data").join("categories.json").exists());
    assert!(dir.path().join("uploads").exists());
}

#[test]
fn balance_of_empty_ledger_is_zero() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:"))
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn add_and_list_transactions() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["transaction", "add", "Salary", "5000", "--type", "income", "--category", "Income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction"));

    ledger(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Income"))
        .stdout(predicate::str::contains("$5000.00"));
}

#[test]
fn outcome_exceeding_balance_is_rejected() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["transaction", "add", "Salary", "100", "--type", "income", "--category", "Income"])
        .assert()
        .success();

    ledger(&dir)
        .args(["transaction", "add", "Splurge", "100.01", "--type", "outcome", "--category", "Fun"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "You can not spend what you do not have",
        ));

    // Spending exactly the total is allowed
    ledger(&dir)
        .args(["transaction", "add", "All of it", "100", "--type", "outcome", "--category", "Fun"])
        .assert()
        .success();
}

#[test]
fn delete_missing_transaction_fails() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["transaction", "delete", "550e8400-e29b-41d4-a716-446655440000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn import_csv_end_to_end() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("statement.csv");
    std::fs::write(
        &csv_path,
        "title,type,value,category\n\
         Salary,income,5000,Income\n\
         Rent,outcome,1200,House\n",
    )
    .unwrap();

    ledger(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transaction(s)"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Rent"));

    // The caller's file is untouched; only the staged copy is consumed
    assert!(csv_path.exists());
    let uploads: Vec<_> = std::fs::read_dir(dir.path().join("uploads"))
        .unwrap()
        .collect();
    assert!(uploads.is_empty());

    ledger(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("$3800.00"));
}

#[test]
fn import_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("bad.csv");
    std::fs::write(
        &csv_path,
        "title,type,value,category\nOops,transfer,10,Misc\n",
    )
    .unwrap();

    ledger(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown transaction type"));

    ledger(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("uploads"));
}
