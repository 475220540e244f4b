use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::services::CompanyParams;
use crate::errors::ProfitError;
use crate::utils::{app_data_dir, settings_backups_dir_in, settings_file_in};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";

/// Company-level settings: the cost parameters every calculation consumes
/// plus presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanySettings {
    pub company_name: String,
    /// Company-wide labor cost per hour, in cents.
    pub hourly_cost_cents: i64,
    /// Overhead multiplier applied to direct costs, in basis points.
    pub overhead_rate_bps: i64,
    pub locale: String,
    pub currency: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            hourly_cost_cents: 0,
            overhead_rate_bps: 0,
            locale: "fr-FR".into(),
            currency: "EUR".into(),
        }
    }
}

impl CompanySettings {
    /// Cost parameters in the shape the services consume.
    pub fn params(&self) -> CompanyParams {
        CompanyParams {
            hourly_cost_cents: self.hourly_cost_cents,
            overhead_rate_bps: self.overhead_rate_bps,
        }
    }
}

/// Loads and persists [`CompanySettings`] as JSON, with atomic writes and
/// timestamped backups.
pub struct SettingsManager {
    path: PathBuf,
    backups_dir: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Result<Self, ProfitError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ProfitError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ProfitError> {
        ensure_dir(&base)?;
        let backups_dir = settings_backups_dir_in(&base);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            path: settings_file_in(&base),
            backups_dir,
        })
    }

    pub fn load(&self) -> Result<CompanySettings, ProfitError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(CompanySettings::default())
        }
    }

    pub fn save(&self, settings: &CompanySettings) -> Result<(), ProfitError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        persist_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "company settings saved");
        Ok(())
    }

    pub fn backup(
        &self,
        settings: &CompanySettings,
        note: Option<&str>,
    ) -> Result<String, ProfitError> {
        ensure_dir(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut name = format!("settings_{}", timestamp);
        if let Some(label) = sanitize_note(note) {
            name.push('_');
            name.push_str(&label);
        }
        name.push_str(&format!(".{}", BACKUP_EXTENSION));
        let path = self.backups_dir.join(&name);
        let json = serde_json::to_string_pretty(settings)?;
        persist_atomic(&path, &json)?;
        Ok(name)
    }

    pub fn restore(&self, backup_name: &str) -> Result<CompanySettings, ProfitError> {
        let path = self.backups_dir.join(backup_name);
        if !path.exists() {
            return Err(ProfitError::Storage(format!(
                "settings backup `{}` not found",
                backup_name
            )));
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn list_backups(&self) -> Result<Vec<String>, ProfitError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        entries.sort_by(|a, b| parse_timestamp(b).cmp(&parse_timestamp(a)));
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(path: &Path) -> Result<(), ProfitError> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn sanitize_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || matches!(ch, '-' | '.') {
            if !sanitized.is_empty() && !last_dash {
                sanitized.push('-');
                last_dash = true;
            }
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    // Names look like `settings_YYYYMMDD_HHMM` with an optional `_label`
    // tail, so the timestamp sits at fixed positions after the prefix.
    let mut segments = trimmed.split('_');
    if segments.next()? != "settings" {
        return None;
    }
    let date_part = segments.next()?;
    let time_part = segments.next()?;
    if date_part.len() != 8 || time_part.len() != 4 {
        return None;
    }
    let raw = format!("{}{}", date_part, time_part);
    chrono::NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes to a sibling tmp file, then renames into place so readers never see
/// a partial file.
fn persist_atomic(path: &Path, data: &str) -> Result<(), ProfitError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_note_slugifies_labels() {
        assert_eq!(
            sanitize_note(Some("Avant migration 2024")),
            Some("avant-migration-2024".into())
        );
        assert_eq!(sanitize_note(Some("  ")), None);
        assert_eq!(sanitize_note(None), None);
    }

    #[test]
    fn parse_timestamp_ignores_note_labels() {
        let noted = parse_timestamp("settings_20240315_1010_avant-hausse.json");
        let plain = parse_timestamp("settings_20240315_1010.json");
        assert!(noted.is_some());
        assert_eq!(noted, plain);
        assert_eq!(parse_timestamp("settings_garbage.json"), None);
        assert_eq!(parse_timestamp("other_20240315_1010.json"), None);
    }

    #[test]
    fn params_mirror_cost_fields() {
        let settings = CompanySettings {
            hourly_cost_cents: 5_000,
            overhead_rate_bps: 1_000,
            ..CompanySettings::default()
        };
        let params = settings.params();
        assert_eq!(params.hourly_cost_cents, 5_000);
        assert_eq!(params.overhead_rate_bps, 1_000);
    }
}
