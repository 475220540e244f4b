use profit_core::config::{CompanySettings, SettingsManager};
use tempfile::TempDir;

fn manager() -> (TempDir, SettingsManager) {
    let dir = TempDir::new().expect("temp dir");
    let manager = SettingsManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    (dir, manager)
}

fn sample_settings() -> CompanySettings {
    CompanySettings {
        company_name: "Atelier Bois & Fils".into(),
        hourly_cost_cents: 5_500,
        overhead_rate_bps: 1_200,
        ..CompanySettings::default()
    }
}

#[test]
fn load_returns_defaults_when_file_is_missing() {
    let (_dir, manager) = manager();
    let settings = manager.load().expect("load");
    assert_eq!(settings, CompanySettings::default());
    assert_eq!(settings.currency, "EUR");
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, manager) = manager();
    let settings = sample_settings();
    manager.save(&settings).expect("save");
    assert!(manager.path().exists());

    let loaded = manager.load().expect("load");
    assert_eq!(loaded, settings);
    assert_eq!(loaded.params().hourly_cost_cents, 5_500);
}

#[test]
fn backups_are_listed_and_restorable() {
    let (_dir, manager) = manager();
    let settings = sample_settings();
    let name = manager
        .backup(&settings, Some("avant hausse tarif"))
        .expect("backup");
    assert!(name.contains("avant-hausse-tarif"));

    let listed = manager.list_backups().expect("list");
    assert_eq!(listed, vec![name.clone()]);

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored, settings);
}

#[test]
fn backups_list_newest_first_even_with_notes() {
    let (dir, manager) = manager();
    let backups_dir = profit_core::utils::settings_backups_dir_in(dir.path());
    // An old noted backup must not sort after a newer plain one.
    std::fs::write(
        backups_dir.join("settings_20240101_0900_avant-migration.json"),
        "{}",
    )
    .expect("write old backup");
    std::fs::write(backups_dir.join("settings_20240315_1010.json"), "{}").expect("write new backup");

    let listed = manager.list_backups().expect("list");
    assert_eq!(
        listed,
        vec![
            "settings_20240315_1010.json".to_string(),
            "settings_20240101_0900_avant-migration.json".to_string(),
        ]
    );
}

#[test]
fn writes_leave_no_tmp_files_behind() {
    let (dir, manager) = manager();
    let settings = sample_settings();
    manager.save(&settings).expect("save");
    manager.backup(&settings, Some("avant hausse")).expect("backup");

    let backups_dir = profit_core::utils::settings_backups_dir_in(dir.path());
    for entry in std::fs::read_dir(&backups_dir).expect("read backups dir") {
        let name = entry.expect("entry").file_name().into_string().expect("name");
        assert!(name.ends_with(".json"), "stray file in backups dir: {name}");
    }
    assert!(!manager.path().with_extension("json.tmp").exists());
}

#[test]
fn restoring_a_missing_backup_fails() {
    let (_dir, manager) = manager();
    let err = manager.restore("settings_19990101_0000.json").unwrap_err();
    assert!(format!("{err}").contains("not found"), "{err}");
}
