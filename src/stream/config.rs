use crate::net::{Endpoint, Family, SocketType};

/// Configuration for the stream echo server
///
/// # Examples
///
/// ```
/// use dialsrv::stream::StreamConfig;
/// use dialsrv::net::{Endpoint, Family, SocketType};
///
/// let config = StreamConfig {
///     endpoint: Endpoint::bind(None, "5413", Family::Unspec, SocketType::Stream),
///     backlog: 8,
///     buffer_size: 2048,
///     reply: b"pong".to_vec(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Passive endpoint resolved to pick the bind address
    pub endpoint: Endpoint,
    /// Accept backlog used when the bound socket transitions to listening
    pub backlog: u32,
    /// Upper bound for a single receive; longer payloads are truncated
    pub buffer_size: usize,
    /// Fixed reply sent when a connection delivers at least one byte
    pub reply: Vec<u8>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::bind(None, "5413", Family::Unspec, SocketType::Stream),
            backlog: 8,
            buffer_size: 2048,
            reply: b"pong".to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StreamConfig::default();
        assert_eq!(config.endpoint.service, "5413");
        assert!(config.endpoint.passive);
        assert_eq!(config.backlog, 8);
        assert_eq!(config.buffer_size, 2048);
        assert_eq!(config.reply, b"pong");
    }
}
