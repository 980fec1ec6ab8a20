use crate::Result;
use crate::net::{Candidate, Family};
use tokio::net::{TcpSocket, UdpSocket};

/// Binds a stream socket to the first workable candidate
///
/// The returned socket is bound but not yet listening; the caller chooses
/// the backlog when transitioning it to a listener.
pub async fn bind_stream(candidates: &[Candidate]) -> Result<TcpSocket> {
    super::try_candidates(candidates, |c| async move {
        let socket = match c.family {
            Family::V6 => TcpSocket::new_v6()?,
            _ => TcpSocket::new_v4()?,
        };
        socket.bind(c.addr)?;
        Ok(socket)
    })
    .await
}

/// Binds a datagram socket to the first workable candidate
pub async fn bind_datagram(candidates: &[Candidate]) -> Result<UdpSocket> {
    super::try_candidates(candidates, |c| async move { UdpSocket::bind(c.addr).await }).await
}
