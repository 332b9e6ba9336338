use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for both the HTTP server and the hub.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    pub hub: HubSettings,
}

/// Configuration settings for the server.
///
/// Defines the host and port the server will bind to.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration settings for the hub.
///
/// `max_subscribers` caps concurrent streaming connections (0 = no cap).
/// `channel_capacity` is how many undelivered messages one subscriber may
/// queue before further copies for it are dropped.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HubSettings {
    pub max_subscribers: usize,
    pub channel_capacity: usize,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub hub: Option<PartialHubSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct PartialHubSettings {
    pub max_subscribers: Option<usize>,
    pub channel_capacity: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            max_subscribers: 1000,
            channel_capacity: 1024,
        }
    }
}

impl PartialSettings {
    /// Fill every missing value from `default`.
    pub fn merge(self, default: Settings) -> Settings {
        let server = self.server;
        let hub = self.hub;

        Settings {
            server: ServerSettings {
                host: server
                    .as_ref()
                    .and_then(|s| s.host.clone())
                    .unwrap_or(default.server.host),
                port: server
                    .as_ref()
                    .and_then(|s| s.port)
                    .unwrap_or(default.server.port),
            },
            hub: HubSettings {
                max_subscribers: hub
                    .as_ref()
                    .and_then(|h| h.max_subscribers)
                    .unwrap_or(default.hub.max_subscribers),
                channel_capacity: hub
                    .as_ref()
                    .and_then(|h| h.channel_capacity)
                    .unwrap_or(default.hub.channel_capacity),
            },
        }
    }
}
