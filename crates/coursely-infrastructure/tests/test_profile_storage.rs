use coursely_core::storage::{PROFILE_KEY, PersistenceAdapter};
use coursely_core::user::UserProfile;
use coursely_infrastructure::JsonFileStore;
use coursely_infrastructure::dto::{decode_profile, encode_profile};
use tempfile::TempDir;

#[test]
fn test_profile_survives_store_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");

    let profile = UserProfile {
        gpa: 3.2,
        minor: None,
        ..UserProfile::default()
    };
    JsonFileStore::new(path.clone()).save(PROFILE_KEY, &encode_profile(&profile).unwrap());

    // A fresh handle reads what the first one wrote
    let reopened = JsonFileStore::new(path);
    let payload = reopened.load(PROFILE_KEY).expect("profile should be stored");
    assert_eq!(decode_profile(&payload).unwrap(), profile);
}

#[test]
fn test_store_file_is_a_key_value_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    let store = JsonFileStore::new(path.clone());

    store.save(PROFILE_KEY, &encode_profile(&UserProfile::default()).unwrap());
    store.save("theme", "dark");

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(raw["theme"], "dark");
    // The profile is stored as an encoded string, not a nested object
    assert!(raw[PROFILE_KEY].is_string());
}
