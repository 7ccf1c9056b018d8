use assert_cmd::Command;
use predicates::prelude::*;

fn auranote(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("auranote").unwrap();
    cmd.env("AURANOTE_DATA_DIR", data_dir);
    cmd
}

#[test]
fn first_run_creates_a_default_tab() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note 1"));
}

#[test]
fn create_close_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path())
        .args(["new", "Groceries"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Tab created: Groceries"));

    auranote(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note 1"))
        .stdout(predicates::str::contains("Groceries"));

    // Close the first tab; the second remains
    auranote(temp_dir.path())
        .args(["close", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Tab closed: Note 1"));

    auranote(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Groceries"))
        .stdout(predicates::str::contains("Note 1").not());
}

#[test]
fn closing_the_last_tab_recreates_a_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path()).arg("list").assert().success();

    auranote(temp_dir.path())
        .args(["close", "1"])
        .assert()
        .success();

    // Never empty: a fresh default tab takes over
    auranote(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note 1"));
}

#[test]
fn import_then_export_round_trips_content() {
    let temp_dir = tempfile::tempdir().unwrap();
    let import_file = temp_dir.path().join("Roadmap.md");
    std::fs::write(&import_file, "# Roadmap\n\n- ship the thing\n").unwrap();

    auranote(temp_dir.path())
        .arg("import")
        .arg(import_file.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicates::str::contains("Imported: Roadmap"));

    // Tab 1 is the auto-created default, tab 2 the import
    let export_dir = temp_dir.path().join("out");
    std::fs::create_dir_all(&export_dir).unwrap();
    auranote(temp_dir.path())
        .args(["export", "2", "-d"])
        .arg(export_dir.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported to"));

    let exported = std::fs::read_to_string(export_dir.join("Roadmap.md")).unwrap();
    assert_eq!(exported, "# Roadmap\n\n- ship the thing\n");
}

#[test]
fn imported_heading_drives_the_title_on_edit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let import_file = temp_dir.path().join("scratch.md");
    std::fs::write(&import_file, "# Quarterly Plan\n\ndetails\n").unwrap();

    auranote(temp_dir.path())
        .arg("import")
        .arg(import_file.to_str().unwrap())
        .assert()
        .success();

    // The raw view shows the markdown verbatim
    auranote(temp_dir.path())
        .args(["view", "2", "--raw"])
        .assert()
        .success()
        .stdout(predicates::str::contains("# Quarterly Plan"));

    // The rendered view strips the heading marker
    auranote(temp_dir.path())
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Quarterly Plan"))
        .stdout(predicates::str::contains("# Quarterly Plan").not());
}

#[test]
fn folder_lifecycle_with_cascade_and_orphan() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path())
        .args(["folder", "new", "Work"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Folder created: Work"));

    auranote(temp_dir.path())
        .args(["new", "Standup"])
        .assert()
        .success();

    // Rendered order: f1 Work, 1 Note 1, 2 Standup — move Standup in
    auranote(temp_dir.path())
        .args(["move", "2", "f1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Moved Standup to Work"));

    // Deleting with --keep-notes orphans the member back to the root
    auranote(temp_dir.path())
        .args(["folder", "delete", "f1", "--keep-notes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("moved to root"));

    auranote(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Standup"))
        .stdout(predicates::str::contains("Work").not());
}

#[test]
fn folder_cascade_removes_members() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path())
        .args(["folder", "new", "Archive"])
        .assert()
        .success();
    auranote(temp_dir.path())
        .args(["new", "Old note"])
        .assert()
        .success();
    auranote(temp_dir.path())
        .args(["move", "2", "f1"])
        .assert()
        .success();

    auranote(temp_dir.path())
        .args(["folder", "delete", "f1", "--delete-notes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("notes removed"));

    auranote(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Old note").not());
}

#[test]
fn rename_via_index() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path()).arg("list").assert().success();

    auranote(temp_dir.path())
        .args(["rename", "1", "Journal"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Tab renamed: Journal"));

    auranote(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Journal"));
}

#[test]
fn config_get_and_set() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path())
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout(predicates::str::contains("dark-mica"));

    auranote(temp_dir.path())
        .args(["config", "theme", "deep-ocean"])
        .assert()
        .success();

    auranote(temp_dir.path())
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout(predicates::str::contains("deep-ocean"));

    // Invalid values are rejected
    auranote(temp_dir.path())
        .args(["config", "theme", "hot-pink"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown theme"));
}

#[test]
fn reorder_moves_tabs_in_the_listing() {
    let temp_dir = tempfile::tempdir().unwrap();

    auranote(temp_dir.path())
        .args(["new", "Alpha"])
        .assert()
        .success();
    auranote(temp_dir.path())
        .args(["new", "Beta"])
        .assert()
        .success();

    // Sequence: Note 1, Alpha, Beta. Move Beta before Note 1.
    auranote(temp_dir.path())
        .args(["reorder", "3", "1"])
        .assert()
        .success();

    let output = auranote(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let beta = stdout.find("Beta").expect("Beta listed");
    let note1 = stdout.find("Note 1").expect("Note 1 listed");
    assert!(beta < note1, "Beta should be listed before Note 1");
}
