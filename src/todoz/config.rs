use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "./todo_data.json";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Largest accepted request body, in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// The JSON file holding the whole dataset.
    pub data_file: PathBuf,
    /// Run each request's load→mutate→flush as one critical section.
    pub serialize_requests: bool,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            serialize_requests: false,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_file, PathBuf::from("./todo_data.json"));
        assert!(!config.serialize_requests);
        assert_eq!(config.body_limit, 102_400);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default().with_port(8080);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }
}
