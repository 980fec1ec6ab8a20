use crate::net::{Endpoint, format_addr, resolve};
use crate::{Result, dial};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::{info, warn};

/// Datagram sender bound to a local endpoint
///
/// [`send_to_all`](Self::send_to_all) resolves a destination endpoint and
/// sends one packet per resolved candidate. A failed send is reported and
/// skipped; it does not stop the remaining candidates.
pub struct DatagramSender {
    socket: UdpSocket,
}

impl DatagramSender {
    /// Binds a local datagram socket via ordered candidate fallback
    pub async fn bind(local: &Endpoint) -> Result<Self> {
        let candidates = resolve(local).await?;
        let socket = dial::bind_datagram(&candidates).await?;
        info!(address = %format_addr(&socket.local_addr()?), "datagram sender bound");

        Ok(Self { socket })
    }

    /// Sends one packet to every resolved candidate for the destination
    ///
    /// Returns how many candidates the payload was delivered to.
    pub async fn send_to_all(&self, dest: &Endpoint, payload: &[u8]) -> Result<usize> {
        let candidates = resolve(dest).await?;
        let mut delivered = 0;

        for candidate in &candidates {
            match self.socket.send_to(payload, candidate.addr).await {
                Ok(sent) => {
                    info!(to = %format_addr(&candidate.addr), size = sent, "sent datagram");
                    delivered += 1;
                }
                Err(e) => {
                    warn!(to = %format_addr(&candidate.addr), error = %e, "failed to send datagram");
                }
            }
        }

        Ok(delivered)
    }

    /// Local address the sender is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }
}

/// One-shot broadcast to the limited-broadcast address on `port`
///
/// Binds an ephemeral wildcard socket, enables the broadcast socket option,
/// sends a single packet to `255.255.255.255:<port>`, and closes the socket.
/// Returns the number of bytes sent.
pub async fn broadcast(port: u16, payload: &[u8]) -> Result<usize> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.set_broadcast(true)?;

    let dest = SocketAddr::from((Ipv4Addr::BROADCAST, port));
    let sent = socket.send_to(payload, dest).await?;
    info!(to = %format_addr(&dest), size = sent, "broadcast datagram");

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{Family, SocketType};

    #[tokio::test]
    async fn test_sender_binds_ephemeral() {
        let local = Endpoint::bind(Some("127.0.0.1"), "0", Family::V4, SocketType::Datagram);
        let sender = DatagramSender::bind(&local).await.unwrap();
        assert!(sender.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_broadcast_option_can_be_enabled() {
        let socket = UdpSocket::bind("0.0.0.0:0").await.unwrap();
        socket.set_broadcast(true).unwrap();
        assert!(socket.broadcast().unwrap());
    }

    #[tokio::test]
    async fn test_send_to_all_counts_candidates() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let dest_addr = receiver.local_addr().unwrap();

        let local = Endpoint::bind(Some("127.0.0.1"), "0", Family::V4, SocketType::Datagram);
        let sender = DatagramSender::bind(&local).await.unwrap();

        let dest = Endpoint::connect(
            "127.0.0.1",
            &dest_addr.port().to_string(),
            Family::V4,
            SocketType::Datagram,
        );
        let delivered = sender.send_to_all(&dest, b"hi").await.unwrap();
        assert_eq!(delivered, 1);

        let mut buf = [0u8; 64];
        let (n, from) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"hi");
        assert_eq!(from, sender.local_addr().unwrap());
    }
}
