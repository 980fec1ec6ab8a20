use super::StreamConfig;
use crate::net::{format_addr, resolve};
use crate::{Result, dial};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::signal;
use tracing::{error, info};

/// Serial stream echo server
///
/// Binds via ordered candidate fallback, listens, then services connections
/// strictly one at a time: accept, one bounded receive, one fixed reply if
/// any bytes arrived, close, accept the next. A connection that delivers no
/// data gets no reply. The loop runs until ctrl-c or the internal shutdown
/// signal; an I/O failure on one connection never disturbs the accept loop.
///
/// # Examples
///
/// ```no_run
/// use dialsrv::stream::{StreamConfig, StreamEchoServer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = StreamEchoServer::new(StreamConfig::default());
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct StreamEchoServer {
    config: StreamConfig,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl StreamEchoServer {
    /// Creates a new stream echo server with the given configuration
    pub fn new(config: StreamConfig) -> Self {
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);
        Self {
            config,
            shutdown_signal: Arc::new(shutdown_signal),
        }
    }

    /// Returns a shutdown signal sender that can be used to gracefully stop the server
    pub fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }

    /// Binds, listens, and runs the serial accept loop
    pub async fn run(&self) -> Result<()> {
        let candidates = resolve(&self.config.endpoint).await?;
        let socket = dial::bind_stream(&candidates).await?;
        let local = socket.local_addr()?;
        let listener = socket.listen(self.config.backlog)?;

        info!(address = %format_addr(&local), "stream echo server listening");

        let mut buffer = vec![0; self.config.buffer_size];
        let mut shutdown_rx = self.shutdown_signal.subscribe();

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((stream, addr)) => {
                            info!(addr = %format_addr(&addr), "accepted connection");
                            // One connection is fully serviced before the next accept
                            if let Err(e) = Self::handle_connection(stream, &mut buffer, &self.config.reply).await {
                                error!(addr = %format_addr(&addr), error = %e, "error handling connection");
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "failed to accept connection");
                        }
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("received shutdown signal, stopping server");
                    break;
                }
                _ = shutdown_rx.recv() => {
                    info!("received internal shutdown signal, stopping server");
                    break;
                }
            }
        }

        info!("stream echo server stopped");
        Ok(())
    }

    /// One bounded receive, one reply if any bytes arrived, then close
    async fn handle_connection(
        mut stream: TcpStream,
        buffer: &mut [u8],
        reply: &[u8],
    ) -> Result<()> {
        let addr = stream.peer_addr()?;

        let n = stream.read(buffer).await?;
        if n == 0 {
            info!(addr = %format_addr(&addr), "connection delivered no data");
            return Ok(());
        }

        let preview = String::from_utf8_lossy(&buffer[..n]);
        info!(addr = %format_addr(&addr), size = n, preview = %preview, "received data");

        stream.write_all(reply).await?;
        stream.flush().await?;
        info!(addr = %format_addr(&addr), size = reply.len(), "sent reply");

        Ok(())
    }
}
