use crate::net::{Endpoint, Family, SocketType};

/// Configuration for the datagram listener
#[derive(Debug, Clone)]
pub struct DatagramConfig {
    /// Passive endpoint resolved to pick the bind address
    pub endpoint: Endpoint,
    /// Upper bound for a single receive; longer payloads are truncated
    pub buffer_size: usize,
}

impl Default for DatagramConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::bind(None, "5413", Family::V4, SocketType::Datagram),
            buffer_size: 2048,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatagramConfig::default();
        assert_eq!(config.endpoint.service, "5413");
        assert_eq!(config.endpoint.socket_type, SocketType::Datagram);
        assert!(config.endpoint.passive);
        assert_eq!(config.buffer_size, 2048);
    }
}
