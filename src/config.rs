use std::collections::HashMap;
use std::fs;
use std::time::Duration;

const CONFIG_FILE: &str = "photo-grader.toml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the inference server (scheme://host:port).
    pub server_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = Self::load_file(CONFIG_FILE);

        if let Ok(v) = std::env::var("PHOTO_GRADER_SERVER_URL") {
            config.server_url = v;
        }
        if let Ok(v) = std::env::var("PHOTO_GRADER_TIMEOUT_SECS") {
            if let Ok(secs) = v.parse::<u64>() {
                config.request_timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    fn load_file(path: &str) -> Self {
        let mut config = Config::default();

        if let Ok(raw) = fs::read_to_string(path) {
            if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
                if let Some(v) = file_cfg.get("server_url") {
                    config.server_url = v.clone();
                }
                if let Some(v) = file_cfg.get("request_timeout_secs") {
                    if let Ok(secs) = v.parse::<u64>() {
                        config.request_timeout = Duration::from_secs(secs);
                    }
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod config_test {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::Config;

    #[test]
    fn default_points_at_local_dev_server() {
        let config = Config::default();

        assert_eq!(config.server_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn file_overrides_defaults() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("photo_grader_config_{suffix}.toml"));
        std::fs::write(
            &path,
            "server_url = \"http://10.0.0.5:9000\"\nrequest_timeout_secs = \"5\"\n",
        )
        .expect("write config");

        let config = Config::load_file(&path.to_string_lossy());

        assert_eq!(config.server_url, "http://10.0.0.5:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_file("/nonexistent/photo-grader.toml");

        assert_eq!(config.server_url, Config::default().server_url);
    }
}
