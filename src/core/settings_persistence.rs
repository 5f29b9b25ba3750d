//! Settings persistence system
//!
//! Saves and loads [`ClientSettings`] to/from a JSON file in the user's
//! configuration directory. Load failures fall back to defaults; save
//! failures are logged but never interrupt the client.

use crate::core::error::CoreResult;
use crate::core::settings::ClientSettings;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Helper to resolve the settings file path
///
/// Falls back to a local `settings.json` if the system config dir cannot be
/// determined.
fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "remotechess", "remotechess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

fn read_settings(path: &Path) -> CoreResult<ClientSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_settings(path: &Path, settings: &ClientSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Load settings from file on startup
///
/// Runs in `PreStartup` so the resource exists before any system that reads
/// preferences. A missing or unparseable file yields defaults.
pub fn load_settings_system(mut commands: Commands) {
    let path = settings_path();

    if path.exists() {
        match read_settings(&path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                commands.insert_resource(settings);
                return;
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings from {:?}: {}. Using defaults.",
                    path, e
                );
            }
        }
    } else {
        info!("[SETTINGS] No settings file at {:?}. Using defaults.", path);
    }

    commands.insert_resource(ClientSettings::default());
}

/// Save settings to file when they change
pub fn save_settings_system(settings: Res<ClientSettings>) {
    if !settings.is_changed() {
        return;
    }

    let path = settings_path();
    match write_settings(&path, &settings) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::BoardTheme;

    fn temp_settings_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "remotechess-settings-test-{}-{}.json",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let path = temp_settings_path("roundtrip");
        let settings = ClientSettings {
            board_theme: BoardTheme::Slate,
            show_hints: false,
        };

        write_settings(&path, &settings).expect("Should write settings");
        let restored = read_settings(&path).expect("Should read settings");
        assert_eq!(restored, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let path = temp_settings_path("missing");
        assert!(read_settings(&path).is_err());
    }

    #[test]
    fn test_read_invalid_json_is_an_error() {
        let path = temp_settings_path("invalid");
        fs::write(&path, "not json").expect("Should write file");
        assert!(read_settings(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
