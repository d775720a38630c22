use crate::tests::fake_directory::FakeDirectory;
use crate::tests::write_file;
use crate::{AutoConfirm, EngineError, RosterJob, RunOptions, RunOutcome, SilentReporter, process_roster};

use ua_core::Operation;

use std::path::Path;
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::eq;

fn job(roster: &Path, logs_dir: &Path) -> RosterJob {
    RosterJob {
        roster: roster.to_path_buf(),
        ignore_status: false,
        test_mode: false,
        options: RunOptions {
            operation: Operation::Suspend,
            dry_run: false,
            non_interactive: true,
            delay: Duration::ZERO,
            logs_dir: logs_dir.to_path_buf(),
        },
    }
}

fn audit_files(logs_dir: &Path) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(logs_dir)
        .map(|entries| {
            entries
                .map(|e| e.unwrap().path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("operation_log_"))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn given_three_identities_when_two_resolve_then_stats_audit_and_roster_agree() {
    // Given
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let roster = write_file(
        dir.path(),
        "users.csv",
        "email,User id,User status,Team\n\
         a@x.com,acc-a,active,Red\n\
         b@x.com,,active,Blue\n\
         c@x.com,,,Green\n",
    );
    let client = FakeDirectory::new().with_user("b@x.com", "acc-b", "Bob");
    let mut prompt = AutoConfirm(true);

    // When
    let report = process_roster(&client, job(&roster, &logs), &mut prompt, &SilentReporter)
        .await
        .unwrap();

    // Then
    assert_that!(report.stats.successful, eq(2));
    assert_that!(report.stats.failed, eq(1));
    assert_that!(report.stats.total, eq(3));

    let audit = report.audit_file.unwrap();
    let mut reader = csv::Reader::from_path(&audit).unwrap();
    assert_eq!(reader.records().count(), 3);

    let update = report.roster_update.unwrap();
    assert_eq!(update.matched, 2);
    assert_eq!(update.appended_columns, vec!["User name"]);
    assert_eq!(
        std::fs::read_to_string(&roster).unwrap(),
        "email,User id,User status,Team,User name\n\
         a@x.com,acc-a,suspended,Red,\n\
         b@x.com,acc-b,suspended,Blue,Bob\n\
         c@x.com,,,Green,\n"
    );
}

#[tokio::test]
async fn given_dry_run_when_processed_then_roster_is_untouched_but_audited() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let original = "email,User id\na@x.com,acc-a\n";
    let roster = write_file(dir.path(), "users.csv", original);
    let client = FakeDirectory::new();
    let mut prompt = AutoConfirm(true);
    let mut job = job(&roster, &logs);
    job.options.dry_run = true;

    let report = process_roster(&client, job, &mut prompt, &SilentReporter)
        .await
        .unwrap();

    assert_eq!(report.stats.successful, 1);
    assert!(report.roster_update.is_none());
    assert_eq!(std::fs::read_to_string(&roster).unwrap(), original);
    assert_eq!(audit_files(&logs).len(), 1);
    assert!(client.applied().is_empty());
}

#[tokio::test]
async fn given_test_mode_when_processed_then_only_first_identity_runs() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let roster = write_file(
        dir.path(),
        "users.csv",
        "email,User id\na@x.com,acc-a\nb@x.com,acc-b\n",
    );
    let client = FakeDirectory::new();
    let mut prompt = AutoConfirm(true);
    let mut job = job(&roster, &logs);
    job.test_mode = true;

    let report = process_roster(&client, job, &mut prompt, &SilentReporter)
        .await
        .unwrap();

    assert_eq!(report.stats.total, 1);
    assert_eq!(client.applied(), vec!["acc-a"]);
}

#[tokio::test]
async fn given_filtered_out_rows_when_processed_then_run_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let roster = write_file(
        dir.path(),
        "users.csv",
        "email,status\na@x.com,suspended\n",
    );
    let client = FakeDirectory::new();
    let mut prompt = AutoConfirm(true);

    let report = process_roster(&client, job(&roster, &logs), &mut prompt, &SilentReporter)
        .await
        .unwrap();

    assert!(matches!(report.outcome, RunOutcome::Empty));
    assert_eq!(report.load.excluded, 1);
    assert!(report.audit_file.is_none());
    assert!(audit_files(&logs).is_empty());
}

#[tokio::test]
async fn given_missing_roster_when_processed_then_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let client = FakeDirectory::new();
    let mut prompt = AutoConfirm(true);

    let result = process_roster(
        &client,
        job(&dir.path().join("nope.csv"), dir.path()),
        &mut prompt,
        &SilentReporter,
    )
    .await;

    assert!(matches!(result, Err(EngineError::Configuration { .. })));
}

#[tokio::test]
async fn given_row_with_unnamed_extra_cell_when_run_then_roster_is_left_alone() {
    // Given
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let original = "email\na@x.com,keepme\n";
    let roster = write_file(dir.path(), "users.csv", original);
    let client = FakeDirectory::new().with_user("a@x.com", "acc-1", "Alice");
    let mut prompt = AutoConfirm(true);

    // When
    let report = process_roster(&client, job(&roster, &logs), &mut prompt, &SilentReporter)
        .await
        .unwrap();

    // Then
    assert_that!(report.stats.successful, eq(1));
    assert!(report.roster_update.is_none());
    assert_eq!(std::fs::read_to_string(&roster).unwrap(), original);
}
