use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub recorder: RecorderSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Connection settings for the probe recorder service.
#[derive(Debug, Deserialize, Clone)]
pub struct RecorderSettings {
    pub host: String,
    pub token: String,
    pub database: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/recorder"))
        .add_source(config::Environment::with_prefix("PROBE_STATS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_settings_default_bind() {
        let settings = ServerSettings::default();
        assert_eq!(settings.bind, "0.0.0.0:8080");
    }
}
