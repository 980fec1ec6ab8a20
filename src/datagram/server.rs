use super::DatagramConfig;
use crate::net::{format_addr, resolve};
use crate::{Result, dial};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Datagram listener
///
/// Binds via ordered candidate fallback and blocks on one receive per
/// iteration, reporting each payload with its sender's formatted address.
/// There is no accept step and no reply; the loop runs until ctrl-c or the
/// internal shutdown signal.
pub struct DatagramListener {
    config: DatagramConfig,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl DatagramListener {
    /// Creates a new datagram listener with the given configuration
    pub fn new(config: DatagramConfig) -> Self {
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);
        Self {
            config,
            shutdown_signal: Arc::new(shutdown_signal),
        }
    }

    /// Returns a shutdown signal sender that can be used to gracefully stop the listener
    pub fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }

    /// Binds and runs the receive loop
    pub async fn run(&self) -> Result<()> {
        let candidates = resolve(&self.config.endpoint).await?;
        let socket = dial::bind_datagram(&candidates).await?;
        let local = socket.local_addr()?;

        info!(address = %format_addr(&local), "datagram listener waiting for messages");

        let mut buffer = vec![0; self.config.buffer_size];
        let mut shutdown_rx = self.shutdown_signal.subscribe();

        loop {
            tokio::select! {
                recv_result = socket.recv_from(&mut buffer) => {
                    match recv_result {
                        Ok((n, addr)) => {
                            // Interpret only the received bytes, no terminator assumed
                            let preview = String::from_utf8_lossy(&buffer[..n]);
                            info!(from = %format_addr(&addr), size = n, preview = %preview, "received datagram");
                        }
                        Err(e) => {
                            error!(error = %e, "failed to receive datagram");
                        }
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("received shutdown signal, stopping listener");
                    break;
                }
                _ = shutdown_rx.recv() => {
                    info!("received internal shutdown signal, stopping listener");
                    break;
                }
            }
        }

        info!("datagram listener stopped");
        Ok(())
    }
}
