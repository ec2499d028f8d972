use bugtracker_core::{BugStatus, Database, Priority, TrackerError};
use jiff::Zoned;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::open(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_bugs().expect("Failed to list bugs").is_empty());
}

#[test]
fn test_insert_then_list() {
    let (_temp_file, db) = create_test_db();

    let bug = db
        .insert_bug("T", "D", Priority::Low)
        .expect("Failed to insert bug");

    let bugs = db.list_bugs().expect("Failed to list bugs");
    assert_eq!(bugs.len(), 1);
    assert_eq!(bugs[0], bug);
    assert_eq!(bugs[0].title, "T");
    assert_eq!(bugs[0].description, "D");
    assert_eq!(bugs[0].priority, Priority::Low);
    assert_eq!(bugs[0].status, BugStatus::Open);
}

#[test]
fn test_insert_assigns_todays_date() {
    let (_temp_file, db) = create_test_db();

    let before = Zoned::now().with_time_zone(jiff::tz::TimeZone::UTC).date();
    let bug = db
        .insert_bug("Dated", "Has a creation date", Priority::Medium)
        .expect("Failed to insert bug");
    let after = Zoned::now().with_time_zone(jiff::tz::TimeZone::UTC).date();

    assert!(bug.date >= before && bug.date <= after);
}

#[test]
fn test_ids_are_increasing() {
    let (_temp_file, db) = create_test_db();

    let first = db.insert_bug("One", "First", Priority::Low).unwrap();
    let second = db.insert_bug("Two", "Second", Priority::High).unwrap();
    db.delete_bug(second.id).unwrap();
    let third = db.insert_bug("Three", "Third", Priority::Medium).unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    // AUTOINCREMENT never reuses a deleted ID
    assert!(third.id > second.id);
}

#[test]
fn test_list_is_in_insertion_order() {
    let (_temp_file, db) = create_test_db();

    for title in ["Alpha", "Beta", "Gamma"] {
        db.insert_bug(title, "desc", Priority::Low).unwrap();
    }

    let titles: Vec<String> = db
        .list_bugs()
        .unwrap()
        .into_iter()
        .map(|bug| bug.title)
        .collect();
    assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_for_each_bug_rereads_table() {
    let (_temp_file, db) = create_test_db();
    db.insert_bug("First", "desc", Priority::Low).unwrap();

    let mut seen = 0;
    db.for_each_bug(|_| {
        seen += 1;
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, 1);

    db.insert_bug("Second", "desc", Priority::Low).unwrap();

    let mut seen = 0;
    db.for_each_bug(|_| {
        seen += 1;
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, 2);
}

#[test]
fn test_for_each_bug_stops_on_callback_error() {
    let (_temp_file, db) = create_test_db();
    for title in ["A", "B", "C"] {
        db.insert_bug(title, "desc", Priority::Low).unwrap();
    }

    let mut seen = 0;
    let result = db.for_each_bug(|_| {
        seen += 1;
        Err(TrackerError::InputClosed)
    });

    assert!(matches!(result, Err(TrackerError::InputClosed)));
    assert_eq!(seen, 1);
}

#[test]
fn test_update_status() {
    let (_temp_file, db) = create_test_db();
    let bug = db.insert_bug("Status", "desc", Priority::High).unwrap();

    db.update_status(bug.id, BugStatus::InProgress)
        .expect("Failed to update status");
    let updated = db.get_bug(bug.id).unwrap().expect("Bug should exist");
    assert_eq!(updated.status, BugStatus::InProgress);

    db.update_status(bug.id, BugStatus::Resolved).unwrap();
    let updated = db.get_bug(bug.id).unwrap().unwrap();
    assert_eq!(updated.status, BugStatus::Resolved);
    assert_eq!(updated.title, bug.title);
    assert_eq!(updated.date, bug.date);
}

#[test]
fn test_update_status_on_missing_bug() {
    let (_temp_file, db) = create_test_db();
    let bug = db.insert_bug("Only", "desc", Priority::Low).unwrap();

    let result = db.update_status(999, BugStatus::Resolved);
    assert!(matches!(result, Err(TrackerError::BugNotFound { id: 999 })));

    let bugs = db.list_bugs().unwrap();
    assert_eq!(bugs, vec![bug]);
}

#[test]
fn test_delete_round_trip() {
    let (_temp_file, db) = create_test_db();
    let bug = db.insert_bug("Doomed", "desc", Priority::Low).unwrap();

    assert!(db.bug_exists(bug.id).unwrap());
    db.delete_bug(bug.id).expect("Failed to delete bug");
    assert!(!db.bug_exists(bug.id).unwrap());
    assert!(db.get_bug(bug.id).unwrap().is_none());
}

#[test]
fn test_delete_missing_bug() {
    let (_temp_file, db) = create_test_db();

    let result = db.delete_bug(42);
    assert!(matches!(result, Err(TrackerError::BugNotFound { id: 42 })));
}

#[test]
fn test_bug_exists_for_unknown_ids() {
    let (_temp_file, db) = create_test_db();

    assert!(!db.bug_exists(1).unwrap());
    assert!(!db.bug_exists(u64::MAX).unwrap());
}

#[test]
fn test_data_persists_across_connections() {
    let temp_file = NamedTempFile::new().unwrap();

    let id = {
        let db = Database::open(temp_file.path()).unwrap();
        db.insert_bug("Persistent", "Survives reopen", Priority::Medium)
            .unwrap()
            .id
    };

    let db = Database::open(temp_file.path()).unwrap();
    let bug = db.get_bug(id).unwrap().expect("Bug should survive reopen");
    assert_eq!(bug.title, "Persistent");
}

#[test]
fn test_open_in_missing_directory_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("bugs.db");

    let result = Database::open(&path);
    assert!(matches!(result, Err(TrackerError::Database { .. })));
}
