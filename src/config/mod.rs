use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// URL prefix under which raw image bytes are served.
pub const DEFAULT_MOUNT_PREFIX: &str = "/images";

/// Process-wide configuration, built once at startup from the command line
/// and passed by parameter. There is no config file and no environment
/// lookup; the frame is configured entirely at launch.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub pictures: PicturesConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct PicturesConfig {
    /// Directory whose immediate subdirectories become photo sets.
    pub root: PathBuf,
    pub mount_prefix: String,
}

impl Config {
    pub fn new(root: PathBuf, host: String, port: u16) -> Self {
        Self {
            server: ServerConfig { host, port },
            pictures: PicturesConfig {
                root,
                mount_prefix: DEFAULT_MOUNT_PREFIX.to_string(),
            },
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            PathBuf::from("pictures"),
            DEFAULT_HOST.to_string(),
            DEFAULT_PORT,
        )
    }
}
