use super::*;

use std::collections::HashMap;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_are_auto_language_and_zero_count() {
    let settings = Settings::default();
    assert_eq!(settings.language, LanguagePreference::Auto);
    assert_eq!(settings.initial_count, 0);
    assert_eq!(settings.user_name, "Developer");
    assert!(settings.color);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    settings
        .apply_file(
            r#"
            language = "zh"
            initial_count = 10
            user_name = "Ada"
            data_dir = "/tmp/desktop-profile"
            color = false
            "#,
        )
        .expect("valid toml");

    assert_eq!(settings.language, LanguagePreference::Zh);
    assert_eq!(settings.initial_count, 10);
    assert_eq!(settings.user_name, "Ada");
    assert_eq!(settings.data_dir, Some(PathBuf::from("/tmp/desktop-profile")));
    assert!(!settings.color);
}

#[test]
fn unknown_language_token_in_file_becomes_auto() {
    let mut settings = Settings {
        language: LanguagePreference::En,
        ..Settings::default()
    };
    settings.apply_file("language = \"elvish\"").expect("valid toml");
    assert_eq!(settings.language, LanguagePreference::Auto);
}

#[test]
fn rejects_unknown_keys_and_bad_types() {
    let mut settings = Settings::default();
    assert!(settings.apply_file("theme = \"dark\"").is_err());
    assert!(settings.apply_file("initial_count = \"ten\"").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_file_values() {
    let mut settings = Settings::default();
    settings
        .apply_file("language = \"zh\"\ninitial_count = 3")
        .expect("valid toml");
    settings.apply_env(env_of(&[
        ("APP__LANGUAGE", "en"),
        ("APP__INITIAL_COUNT", " 42 "),
        ("APP__USER_NAME", "Grace"),
        ("APP__DATA_DIR", "/var/lib/desktop"),
        ("APP__COMMAND_LATENCY_MS", "250"),
        ("NO_COLOR", "1"),
    ]));

    assert_eq!(settings.language, LanguagePreference::En);
    assert_eq!(settings.initial_count, 42);
    assert_eq!(settings.user_name, "Grace");
    assert_eq!(settings.data_dir, Some(PathBuf::from("/var/lib/desktop")));
    assert_eq!(settings.command_latency_ms, 250);
    assert!(!settings.color);
}

#[test]
fn malformed_or_empty_env_values_are_ignored() {
    let mut settings = Settings::default();
    settings.apply_env(env_of(&[
        ("APP__INITIAL_COUNT", "many"),
        ("APP__USER_NAME", "   "),
        ("NO_COLOR", ""),
    ]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn explicit_config_path_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");
    let err = load_settings(Some(&missing)).expect_err("missing file");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "user_name = \"Linus\"\ncommand_latency_ms = 5").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.command_latency_ms, 5);
}

#[test]
fn invalid_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "initial_count = [").expect("write config");

    let err = load_settings(Some(&path)).expect_err("invalid file");
    assert!(format!("{err:#}").contains("invalid config file"));
}

#[test]
fn app_paths_live_under_configured_data_dir() {
    let settings = Settings {
        data_dir: Some(PathBuf::from("/tmp/profile-a")),
        ..Settings::default()
    };
    let paths = AppPaths::from_settings(&settings).expect("paths");
    assert_eq!(paths.data_root, PathBuf::from("/tmp/profile-a"));
    assert_eq!(
        paths.settings_path,
        PathBuf::from("/tmp/profile-a").join("settings.json")
    );
}

#[test]
fn default_data_dir_is_app_folder_under_local_data() {
    let settings = Settings::default();
    match dirs::data_local_dir() {
        Some(base) => {
            let paths = AppPaths::from_settings(&settings).expect("paths");
            assert_eq!(paths.data_root, base.join("desktop_shell"));
            assert!(paths.settings_path.ends_with("desktop_shell/settings.json"));
        }
        None => assert!(AppPaths::from_settings(&settings).is_err()),
    }
}

#[test]
fn unreadable_settings_file_falls_back_to_session_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = AppPaths {
        data_root: dir.path().to_path_buf(),
        settings_path: dir.path().join("settings.json"),
    };
    // A directory in place of the file makes every read fail.
    fs::create_dir(&paths.settings_path).expect("block settings path");

    let mut store = paths.open_store().expect("store");
    store.set("theme", "dark").expect("set");
    assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
}

#[test]
fn open_store_creates_data_root_and_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("profile");
    let paths = AppPaths {
        settings_path: root.join("settings.json"),
        data_root: root,
    };

    let mut store = paths.open_store().expect("store");
    store.set("theme", "light").expect("set");

    assert!(paths.settings_path.exists());
}
