use log::warn;
use std::net::SocketAddr;

pub const ADDR_ENV: &str = "TIMETABLE_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

impl ServerConfig {
    /// Reads the bind address from `TIMETABLE_ADDR`, keeping the default when unset or invalid.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ADDR_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::parse::<SocketAddr>) {
            Some(Ok(addr)) => Self { addr },
            Some(Err(e)) => {
                warn!("Ignoring {}: {}; using {}", ADDR_ENV, e, DEFAULT_ADDR);
                Self::default()
            }
            None => Self::default(),
        }
    }
}
