//! CLI integration tests
//!
//! Each test drives the built binary against a data file and database in a
//! fresh temp directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn data(&self) -> PathBuf {
        self.dir.path().join("school.json")
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("school.db")
    }

    fn run(&self, args: &[&str]) -> Output {
        let cli_bin = env!("CARGO_BIN_EXE_roster-cli");
        Command::new(cli_bin)
            .current_dir(self.dir.path())
            .env("RUST_LOG", "off")
            .env_remove("ROSTER_DATA")
            .env_remove("ROSTER_DB")
            .arg("--data")
            .arg(self.data())
            .arg("--db")
            .arg(self.db())
            .args(args)
            .output()
            .expect("Failed to execute CLI")
    }

    /// Run and require success, returning stdout
    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "roster {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    /// Run and require failure, returning stderr
    fn fails(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(!output.status.success(), "roster {:?} should fail", args);
        assert_eq!(output.status.code(), Some(1));
        String::from_utf8(output.stderr).unwrap()
    }

    fn seed(&self) {
        self.ok(&[
            "student", "add", "S1", "--name", "Ada", "--age", "20", "--email", "ada@example.org",
        ]);
        self.ok(&[
            "student", "add", "S2", "--name", "Bob", "--age", "22", "--email", "bob@example.org",
        ]);
        self.ok(&[
            "instructor",
            "add",
            "I1",
            "--name",
            "Grace",
            "--age",
            "45",
            "--email",
            "grace@navy.mil",
        ]);
        self.ok(&[
            "instructor",
            "add",
            "I2",
            "--name",
            "Alan",
            "--age",
            "41",
            "--email",
            "alan@bletchley.uk",
        ]);
        self.ok(&["course", "add", "C1", "Compilers"]);
        self.ok(&["course", "add", "C2", "Databases"]);
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_add_and_list_students() {
    let ws = Workspace::new();
    ws.seed();

    let table = ws.ok(&["list", "students"]);
    assert!(table.starts_with("| Student ID | Name | Age | Email | Registered Courses |\n"));
    assert!(table.contains("| S1 | Ada | 20 | ada@example.org |  |"));
    assert!(table.contains("| S2 | Bob | 22 | bob@example.org |  |"));
}

#[test]
fn test_register_updates_both_sides_of_the_file() {
    let ws = Workspace::new();
    ws.seed();

    let out = ws.ok(&["register", "S1", "C1"]);
    assert_eq!(out.trim(), "Ada registered for Compilers");

    let json = read_json(&ws.data());
    assert_eq!(json["students"][0]["registered_course_ids"][0], "C1");
    assert_eq!(json["courses"][0]["enrolled_student_ids"][0], "S1");

    let again = ws.ok(&["register", "S1", "C1"]);
    assert_eq!(again.trim(), "Ada is already registered in Compilers");
}

#[test]
fn test_assign_conflict_exits_with_error() {
    let ws = Workspace::new();
    ws.seed();
    ws.ok(&["assign", "I1", "C1"]);

    let stderr = ws.fails(&["assign", "I2", "C1"]);
    assert!(stderr.contains(
        "Error: C1 already has an instructor (Grace). Unassign first if reassignment is intended."
    ));

    ws.ok(&["unassign", "I1", "C1"]);
    let out = ws.ok(&["assign", "I2", "C1"]);
    assert_eq!(out.trim(), "Alan assigned to teach Compilers");
}

#[test]
fn test_invalid_age_is_rejected() {
    let ws = Workspace::new();
    let stderr = ws.fails(&[
        "student", "add", "S1", "--name", "Ada", "--age", "-3", "--email", "ada@example.org",
    ]);
    assert!(stderr.starts_with("Error: Invalid age"));
    assert!(!ws.data().exists());
}

#[test]
fn test_edit_changes_fields() {
    let ws = Workspace::new();
    ws.seed();
    ws.ok(&["student", "edit", "S1", "--age", "21", "--name", "Ada L."]);

    let shown = ws.ok(&["student", "show", "S1"]);
    assert!(shown.contains("Ada L."));
    let json = read_json(&ws.data());
    assert_eq!(json["students"][0]["age"], 21);
}

#[test]
fn test_edit_with_bad_email_changes_nothing() {
    let ws = Workspace::new();
    ws.seed();

    let stderr = ws.fails(&["instructor", "edit", "I1", "--name", "Hopper", "--email", "nope"]);
    assert!(stderr.starts_with("Error: Invalid email"));

    let json = read_json(&ws.data());
    assert_eq!(json["instructors"][0]["name"], "Grace");
    assert_eq!(json["instructors"][0]["email"], "grace@navy.mil");
}

#[test]
fn test_remove_unlinks_first() {
    let ws = Workspace::new();
    ws.seed();
    ws.ok(&["register", "S1", "C1"]);
    ws.ok(&["register", "S1", "C2"]);
    ws.ok(&["assign", "I1", "C1"]);

    let out = ws.ok(&["course", "remove", "C1"]);
    assert!(out.contains("unlinked from 2 relationship(s)"));

    let json = read_json(&ws.data());
    assert_eq!(json["courses"].as_array().unwrap().len(), 1);
    assert_eq!(
        json["students"][0]["registered_course_ids"],
        serde_json::json!(["C2"])
    );
    assert_eq!(
        json["instructors"][0]["assigned_course_ids"],
        serde_json::json!([])
    );
}

#[test]
fn test_list_filter_is_case_insensitive() {
    let ws = Workspace::new();
    ws.seed();
    ws.ok(&["register", "S1", "C1"]);
    ws.ok(&["register", "S2", "C2"]);

    let table = ws.ok(&["list", "courses", "--filter", "students=ada"]);
    assert!(table.contains("| C1 | Compilers |  | S1-Ada |"));
    assert!(!table.contains("C2"));

    let stderr = ws.fails(&["list", "courses", "--filter", "nonsense"]);
    assert!(stderr.starts_with("Error: Invalid filter"));
}

#[test]
fn test_db_save_load_and_backup() {
    let ws = Workspace::new();
    ws.seed();
    ws.ok(&["register", "S1", "C1"]);
    ws.ok(&["assign", "I1", "C1"]);

    let saved = ws.ok(&["db", "save"]);
    assert!(saved.starts_with("✓ Saved 2 students, 2 instructors, 2 courses"));

    // Lose the working file, then restore it from the database
    std::fs::remove_file(ws.data()).unwrap();
    ws.ok(&["db", "load"]);
    let shown = ws.ok(&["course", "show", "C1"]);
    assert!(shown.contains("Grace"));
    assert!(shown.contains("Ada"));

    let backup = ws.dir.path().join("backups").join("copy.db");
    ws.ok(&["db", "backup", backup.to_str().unwrap()]);
    assert!(backup.exists());
}

#[test]
fn test_db_save_replace_drops_stale_rows() {
    let ws = Workspace::new();
    ws.seed();
    ws.ok(&["db", "save"]);
    ws.ok(&["student", "remove", "S2"]);

    ws.ok(&["db", "save"]);
    std::fs::remove_file(ws.data()).unwrap();
    ws.ok(&["db", "load"]);
    assert!(ws.ok(&["list", "students"]).contains("S2"), "upsert keeps old rows");

    ws.ok(&["student", "remove", "S2"]);
    ws.ok(&["db", "save", "--replace"]);
    std::fs::remove_file(ws.data()).unwrap();
    ws.ok(&["db", "load"]);
    assert!(!ws.ok(&["list", "students"]).contains("S2"));
}

#[test]
fn test_unknown_id_is_not_found() {
    let ws = Workspace::new();
    ws.seed();
    let stderr = ws.fails(&["register", "S9", "C1"]);
    assert!(stderr.contains("S9"));
}
