use thiserror::Error;

/// Error types for the dialsrv library
#[derive(Error, Debug)]
pub enum DialError {
    /// Name/service resolution failed; the message comes from the OS resolver
    #[error("resolution error: {0}")]
    Resolution(std::io::Error),

    /// Every candidate in the sequence was tried and failed
    #[error("all {tried} candidate addresses failed, last error: {last}")]
    Exhausted {
        tried: usize,
        last: std::io::Error,
    },

    /// A send or receive on an established session failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (bad endpoint inputs, etc.)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the dialsrv library
pub type Result<T> = std::result::Result<T, DialError>;

pub mod datagram;
pub mod dial;
pub mod net;
pub mod stream;

// Re-export main types for convenience
pub use datagram::{DatagramConfig, DatagramListener, DatagramSender, broadcast};
pub use dial::{bind_datagram, bind_stream, connect_stream, try_candidates};
pub use net::{Candidate, Endpoint, Family, SocketType, format_addr, local_host_name, resolve};
pub use stream::{StreamClient, StreamConfig, StreamEchoServer};
