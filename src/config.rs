use serde::{Deserialize, Serialize};

use crate::filesystem::get_config_directory;

const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_title: String,
    pub icon_size: i32,

    /// When false, unavailable actions are hidden instead of shown greyed out.
    pub show_disabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Power Menu".to_owned(),
            icon_size: 24,
            show_disabled: true,
        }
    }
}

/// Reads the configuration file, falling back to defaults when it is missing
/// or does not parse.
pub fn read() -> Config {
    let path = format!("{}/{}", get_config_directory(), FILE_NAME);

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, %path, "Failed to parse configuration, using defaults");
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.window_title, "Power Menu");
        assert_eq!(config.icon_size, 24);
        assert!(config.show_disabled);
    }

    #[test]
    fn parses_a_full_file() {
        let config: Config = toml::from_str(
            r#"
            window_title = "Session"
            icon_size = 32
            show_disabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.window_title, "Session");
        assert_eq!(config.icon_size, 32);
        assert!(!config.show_disabled);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("icon_size = 16").unwrap();

        assert_eq!(config.icon_size, 16);
        assert_eq!(config.window_title, "Power Menu");
        assert!(config.show_disabled);
    }
}
