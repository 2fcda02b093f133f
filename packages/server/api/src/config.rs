use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Reads `RISK_API_HOST`, `RISK_API_PORT` and `RISK_API_BODY_LIMIT`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("RISK_API_HOST") {
            config.host = host
                .trim()
                .parse()
                .with_context(|| format!("RISK_API_HOST is not an IP address: {}", host))?;
        }
        if let Some(port) = lookup("RISK_API_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("RISK_API_PORT is not a valid port: {}", port))?;
        }
        if let Some(limit) = lookup("RISK_API_BODY_LIMIT") {
            config.body_limit = limit
                .trim()
                .parse()
                .with_context(|| format!("RISK_API_BODY_LIMIT is not a byte count: {}", limit))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
