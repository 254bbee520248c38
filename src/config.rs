use serde::Deserialize;

/// Immutable server configuration.
///
/// Built once at startup and threaded through the listener and the request
/// handler. Nothing mutates it afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Value of the `Server` response header.
    pub server_name: String,
    /// Bind address for the listening socket, e.g. "127.0.0.1:8080".
    pub listen_addr: String,
    /// Directory request paths are resolved against.
    pub document_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_name: "httpsrv".to_string(),
            listen_addr: "127.0.0.1:8080".to_string(),
            document_root: ".".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration: the YAML file named by `HTTPSRV_CONFIG` if
    /// set, then a `LISTEN` override for the bind address, then defaults.
    pub fn load() -> Self {
        let mut cfg = match std::env::var("HTTPSRV_CONFIG") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        cfg
    }

    /// Reads a YAML config file. Any read or parse failure falls back to the
    /// defaults rather than refusing to start.
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read config {}: {}", path, err);
                return Self::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!("failed to parse config {}: {}", path, err);
                Self::default()
            }
        }
    }
}
