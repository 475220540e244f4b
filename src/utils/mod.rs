use std::sync::Once;
use std::{env, path::PathBuf};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".profit_core";
const SETTINGS_BACKUP_DIR: &str = "settings_backups";

/// Returns the application-specific data directory, defaulting to
/// `~/.profit_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("PROFIT_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the company settings file.
pub fn settings_file_in(base: &std::path::Path) -> PathBuf {
    base.join("settings.json")
}

/// Returns the directory containing settings backups.
pub fn settings_backups_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(SETTINGS_BACKUP_DIR)
}

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("profit_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
