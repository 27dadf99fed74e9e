use tempfile::tempdir;
use timetable_tool::persistence::SettingsStore;
use timetable_tool::{
    JsonSettingsStore, Role, SETTINGS_SCHEMA_VERSION, Settings, SettingsManager,
};

#[test]
fn switching_to_teacher_clears_student_fields() {
    let mut settings = Settings::default();
    settings.group_id = Some("IT-21".to_string());
    settings.subgroup = Some("1".to_string());

    let settings = settings.with_role(Role::Teacher);
    assert_eq!(settings.role, Role::Teacher);
    assert_eq!(settings.group_id, None);
    assert_eq!(settings.subgroup, None);
}

#[test]
fn switching_to_student_clears_teacher_name() {
    let mut settings = Settings::default().with_role(Role::Teacher);
    settings.teacher_name = Some("Ivanov".to_string());

    let settings = settings.with_role(Role::Student);
    assert_eq!(settings.teacher_name, None);
}

#[test]
fn missing_fields_default_when_loading_an_old_record() {
    // A version-0 record from before the parity pin existed.
    let old = r#"{"role":"Student","subgroup":"2"}"#;
    let settings: Settings = serde_json::from_str(old).unwrap();
    assert_eq!(settings.schema_version, 0);
    assert_eq!(settings.subgroup.as_deref(), Some("2"));
    assert_eq!(settings.frequency_matches_week_number, None);
    assert!(!settings.lesson_notifications);
}

#[test]
fn manager_starts_from_defaults_without_a_stored_record() {
    let dir = tempdir().unwrap();
    let store = JsonSettingsStore::new(dir.path().join("settings.json"));
    let manager = SettingsManager::open(Box::new(store)).unwrap();
    assert_eq!(manager.current(), &Settings::default());
}

#[test]
fn manager_persists_updates_and_notifies_subscribers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut manager = SettingsManager::open(Box::new(JsonSettingsStore::new(&path))).unwrap();
    let snapshots = manager.subscribe();

    manager
        .update(|mut settings| {
            settings.subgroup = Some("1".to_string());
            settings
        })
        .unwrap();

    let snapshot = snapshots.try_recv().unwrap();
    assert_eq!(snapshot.subgroup.as_deref(), Some("1"));

    // A fresh manager over the same file sees the persisted record.
    let reopened = SettingsManager::open(Box::new(JsonSettingsStore::new(&path))).unwrap();
    assert_eq!(reopened.current().subgroup.as_deref(), Some("1"));
    assert_eq!(reopened.current().schema_version, SETTINGS_SCHEMA_VERSION);
}

#[test]
fn manager_upgrades_an_old_schema_on_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"role":"Teacher","teacher_name":"Petrov"}"#).unwrap();

    let manager = SettingsManager::open(Box::new(JsonSettingsStore::new(&path))).unwrap();
    assert_eq!(manager.current().schema_version, SETTINGS_SCHEMA_VERSION);
    assert_eq!(manager.current().teacher_name.as_deref(), Some("Petrov"));

    // The upgrade is written back.
    let store = JsonSettingsStore::new(&path);
    let stored = store.load_settings().unwrap().unwrap();
    assert_eq!(stored.schema_version, SETTINGS_SCHEMA_VERSION);
}
