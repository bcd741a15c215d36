//! Settings persistence. Failures never reach the player: a missing or
//! unreadable file means defaults, a failed save is logged and the
//! in-memory settings stay authoritative.

use std::fs;
use std::path::Path;

use crate::models::Settings;

use super::{Result, StorageError, write_atomic};

pub fn load(path: &Path) -> Settings {
    match read(path) {
        Ok(settings) => settings,
        Err(err) => {
            log::debug!("could not load settings ({err}), using defaults");
            Settings::default()
        }
    }
}

fn read(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(StorageError::from)
}

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    write_atomic(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("flashdrill_settings_missing.json");
        let _ = fs::remove_file(&path);

        assert_eq!(load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = std::env::temp_dir().join("flashdrill_settings_roundtrip.json");
        let mut settings = Settings::default();
        settings.recycle_incorrect_answers = true;
        settings.haptic_on_correct = false;

        save(&path, &settings).unwrap();
        assert_eq!(load(&path), settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let path = std::env::temp_dir().join("flashdrill_settings_corrupt.json");
        fs::write(&path, "not json at all").unwrap();

        assert_eq!(load(&path), Settings::default());

        let _ = fs::remove_file(&path);
    }
}
