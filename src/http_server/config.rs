//! Listener and CORS settings for the book API
//!
//! Lives under the `server` key of the configuration file.

use serde::{Deserialize, Serialize};

/// Where the book API listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface address or host name (default: all interfaces)
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port (default: 8084)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS; an empty list lets any origin through
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults, listening on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port`, suitable for `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
