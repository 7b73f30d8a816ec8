use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_CLI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn create_account(data_dir: &TempDir, balance: &str) {
    ledger(data_dir)
        .args([
            "account",
            "create",
            "--balance",
            balance,
            "--type",
            "CHECKING",
            "--institution",
            "BANK A",
        ])
        .assert()
        .success();
}

#[test]
fn transfer_then_insufficient_funds() {
    let data_dir = TempDir::new().unwrap();
    create_account(&data_dir, "100");
    create_account(&data_dir, "50");

    ledger(&data_dir)
        .args(["account", "transfer", "1", "2", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From #1: $70.00"))
        .stdout(predicate::str::contains("To   #2: $80.00"));

    ledger(&data_dir)
        .args(["account", "transfer", "1", "2", "1000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Insufficient funds in account 1"));

    ledger(&data_dir)
        .args(["account", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$70.00"));

    ledger(&data_dir)
        .args(["account", "total"])
        .assert()
        .success()
        .stdout("$150.00\n");
}

#[test]
fn transfer_to_missing_account_is_not_found() {
    let data_dir = TempDir::new().unwrap();
    create_account(&data_dir, "10");

    ledger(&data_dir)
        .args(["account", "transfer", "1", "9", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: 9"));
}

#[test]
fn expense_account_tag_is_range_checked() {
    let data_dir = TempDir::new().unwrap();
    let expense = |account: &str| {
        let mut cmd = ledger(&data_dir);
        cmd.args([
            "expense",
            "create",
            "--value",
            "12.50",
            "--paid",
            "05-01-2024",
            "--expected",
            "05-01-2024",
            "--category",
            "FOOD",
            "--account",
            account,
        ]);
        cmd
    };

    expense("1000")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: account: account must be between 1 and 999",
        ));

    expense("999").assert().success();

    ledger(&data_dir)
        .args(["expense", "total"])
        .assert()
        .success()
        .stdout("$12.50\n");
}

#[test]
fn missing_fields_are_reported_one_per_line() {
    let data_dir = TempDir::new().unwrap();

    ledger(&data_dir)
        .args(["account", "create", "--balance", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: type: type must not be null"))
        .stderr(predicate::str::contains(
            "Error: financial_institution: financial_institution must not be blank",
        ));
}

#[test]
fn totals_of_empty_ledger_are_zero() {
    let data_dir = TempDir::new().unwrap();

    for kind in ["account", "expense", "revenue"] {
        ledger(&data_dir)
            .args([kind, "total"])
            .assert()
            .success()
            .stdout("$0.00\n");
    }
}

#[test]
fn expense_list_filters_by_date_range() {
    let data_dir = TempDir::new().unwrap();
    for (paid, category) in [("31-12-2023", "FOOD"), ("15-01-2024", "HEALTH")] {
        ledger(&data_dir)
            .args([
                "expense", "create", "-v", "10", "-p", paid, "-e", paid, "-c", category, "-a", "1",
            ])
            .assert()
            .success();
    }

    ledger(&data_dir)
        .args(["expense", "list", "--from", "01-01-2024", "--to", "31-01-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEALTH"))
        .stdout(predicate::str::contains("FOOD").not());

    ledger(&data_dir)
        .args(["expense", "list", "--from", "31-01-2024", "--to", "01-01-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: end:"));
}

#[test]
fn export_json_to_stdout() {
    let data_dir = TempDir::new().unwrap();
    create_account(&data_dir, "42");

    let output = ledger(&data_dir)
        .args(["export", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["accounts"][0]["financial_institution"], "BANK A");
    assert_eq!(value["metadata"]["total_balance"], 4200);
}

#[test]
fn export_csv_to_file() {
    let data_dir = TempDir::new().unwrap();
    create_account(&data_dir, "42");
    let out = data_dir.path().join("accounts.csv");

    ledger(&data_dir)
        .args(["export", "csv", "--kind", "accounts", "--output"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(out).unwrap();
    assert_eq!(text, "id,type,financial_institution,balance\n1,CHECKING,BANK A,42.00\n");
}

#[test]
fn list_total_overflow_is_reported_not_panicked() {
    let data_dir = TempDir::new().unwrap();
    create_account(&data_dir, "60000000000000000");
    create_account(&data_dir, "60000000000000000");

    ledger(&data_dir)
        .args(["account", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Account total overflows"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn parallel_transfers_from_separate_processes_lose_nothing() {
    let data_dir = TempDir::new().unwrap();
    create_account(&data_dir, "1000");
    create_account(&data_dir, "0");

    let succeeded: usize = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..6)
            .map(|_| {
                scope.spawn(|| {
                    (0..5)
                        .filter(|_| {
                            ledger(&data_dir)
                                .args(["account", "transfer", "1", "2", "1"])
                                .output()
                                .unwrap()
                                .status
                                .success()
                        })
                        .count()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).sum()
    });
    assert_eq!(succeeded, 30);

    ledger(&data_dir)
        .args(["account", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$970.00"));
    ledger(&data_dir)
        .args(["account", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$30.00"));
}

#[test]
fn parallel_creates_get_distinct_ids() {
    let data_dir = TempDir::new().unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| create_account(&data_dir, "5"));
        }
    });

    ledger(&data_dir)
        .args(["account", "total"])
        .assert()
        .success()
        .stdout("$40.00\n");
}
