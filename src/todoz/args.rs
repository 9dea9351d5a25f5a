use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use todoz::config::{ServerConfig, DEFAULT_BODY_LIMIT, DEFAULT_DATA_FILE, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(about = "REST API for todo lists stored in a single JSON file", long_about = None)]
#[command(version = version_string())]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "TODOZ_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "TODOZ_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON file holding all lists and todos
    #[arg(short, long, env = "TODOZ_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Handle one request at a time from load to write
    #[arg(long, env = "TODOZ_SERIALIZE_REQUESTS")]
    pub serialize_requests: bool,
}

impl Cli {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            data_file: self.data_file,
            serialize_requests: self.serialize_requests,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}
