use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;

pub const LISTEN_PORT: u16 = 80;

pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the backend's list endpoint.
    pub backend_api_url: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Ok(Self {
            backend_api_url: get_env("BACKEND_API_URL")?,
        })
    }

    pub fn server_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT))
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(get_config())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
