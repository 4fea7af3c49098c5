use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "word_scramble_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub words_file: String,
    pub dictionary_file: String,
    pub locale: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.words_file.is_empty() {
            return Err("words_file must not be empty".to_string());
        }
        if self.dictionary_file.is_empty() {
            return Err("dictionary_file must not be empty".to_string());
        }
        if self.locale.is_empty() {
            return Err("locale must not be empty".to_string());
        }
        if self.window_width < 200.0 || self.window_height < 200.0 {
            return Err("window size must be at least 200x200".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            words_file: "assets/start.txt".to_string(),
            dictionary_file: "assets/en.txt".to_string(),
            locale: "en".to_string(),
            window_width: 420.0,
            window_height: 640.0,
        }
    }
}

/// Reads the config next to the executable; a missing file means defaults.
pub fn load_config() -> Result<ClientConfig, String> {
    load_config_from(&get_config_path())
}

fn load_config_from(path: &str) -> Result<ClientConfig, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Ok(ClientConfig::default()),
    };

    let config: ClientConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", path, e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
