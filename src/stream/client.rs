use crate::net::{Endpoint, format_addr, resolve};
use crate::{Result, dial};
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::info;

/// One-shot stream client
///
/// Connects via ordered candidate fallback, then [`exchange`](Self::exchange)
/// sends exactly one message and performs exactly one bounded receive. No
/// retries of either operation.
///
/// # Examples
///
/// ```no_run
/// use dialsrv::net::{Endpoint, Family, SocketType};
/// use dialsrv::stream::StreamClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let endpoint = Endpoint::connect("localhost", "5413", Family::Unspec, SocketType::Stream);
///     let mut client = StreamClient::connect(&endpoint).await?;
///     let reply = client.exchange_string("ping").await?;
///     println!("reply: {reply}");
///     Ok(())
/// }
/// ```
pub struct StreamClient {
    stream: TcpStream,
    buffer_size: usize,
}

impl StreamClient {
    /// Resolves the endpoint and connects to the first reachable candidate
    pub async fn connect(endpoint: &Endpoint) -> Result<Self> {
        let candidates = resolve(endpoint).await?;
        let stream = dial::connect_stream(&candidates).await?;
        info!(peer = %format_addr(&stream.peer_addr()?), "connected");

        Ok(Self {
            stream,
            buffer_size: 1024,
        })
    }

    /// Overrides the receive bound (default 1024 bytes)
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Sends exactly one message and performs exactly one bounded receive
    ///
    /// A reply longer than the buffer bound is truncated; a closed peer
    /// yields an empty reply.
    pub async fn exchange(&mut self, message: &[u8]) -> Result<Vec<u8>> {
        self.stream.write_all(message).await?;
        self.stream.flush().await?;

        let mut buffer = BytesMut::zeroed(self.buffer_size);
        let n = self.stream.read(&mut buffer).await?;
        buffer.truncate(n);

        Ok(buffer.to_vec())
    }

    /// Sends a string message and returns the reply as text
    ///
    /// The reply is interpreted only up to the received length, lossily;
    /// no terminator is assumed.
    pub async fn exchange_string(&mut self, message: &str) -> Result<String> {
        let reply = self.exchange(message.as_bytes()).await?;
        Ok(String::from_utf8_lossy(&reply).into_owned())
    }
}
