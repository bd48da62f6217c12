use std::fs;

use testtimer::config::{load_settings, save_settings, Settings};

#[test]
fn test_missing_file_is_none() {
    let tmp_dir = std::env::temp_dir().join("testtimer_test_config_missing");
    let _ = fs::remove_dir_all(&tmp_dir);

    let loaded = load_settings(&tmp_dir.join("config.yaml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_save_then_load() {
    let tmp_dir = std::env::temp_dir().join("testtimer_test_config_save");
    let _ = fs::remove_dir_all(&tmp_dir);
    let path = tmp_dir.join("nested").join("config.yaml");

    let settings = Settings {
        hours: 2,
        minutes: 15,
        questions: 40,
    };
    save_settings(&path, &settings).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());

    let yaml = fs::read_to_string(&path).unwrap();
    assert!(yaml.contains("hours: 2"));
    assert!(yaml.contains("minutes: 15"));
    assert!(yaml.contains("questions: 40"));

    assert_eq!(load_settings(&path).unwrap(), Some(settings));
}

#[test]
fn test_partial_file_uses_defaults() {
    let tmp_dir = std::env::temp_dir().join("testtimer_test_config_partial");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    let path = tmp_dir.join("config.yaml");
    fs::write(&path, "minutes: 45\n").unwrap();

    let loaded = load_settings(&path).unwrap().unwrap();
    assert_eq!(loaded.minutes, 45);
    assert_eq!(loaded.hours, Settings::default().hours);
    assert_eq!(loaded.questions, Settings::default().questions);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let tmp_dir = std::env::temp_dir().join("testtimer_test_config_corrupt");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    let path = tmp_dir.join("config.yaml");
    fs::write(&path, "hours: [not, a, number\n").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(err.to_string().starts_with("Corrupt"));
}
