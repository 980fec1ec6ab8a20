use crate::Result;
use crate::net::Candidate;
use tokio::net::TcpStream;

/// Connects a stream socket to the first reachable candidate
///
/// Refused, unreachable, and timed-out candidates all fold into the
/// ordered fallback; only exhaustion surfaces to the caller.
pub async fn connect_stream(candidates: &[Candidate]) -> Result<TcpStream> {
    super::try_candidates(candidates, |c| async move { TcpStream::connect(c.addr).await }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DialError;
    use crate::net::{Endpoint, Family, SocketType, resolve};

    #[tokio::test]
    async fn test_connect_falls_through_to_live_candidate() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let live = listener.local_addr().unwrap();

        // A dead port first, the live listener second
        let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead_addr = dead.local_addr().unwrap();
        drop(dead);

        let dead_ep = Endpoint::connect(
            "127.0.0.1",
            &dead_addr.port().to_string(),
            Family::V4,
            SocketType::Stream,
        );
        let live_ep = Endpoint::connect(
            "127.0.0.1",
            &live.port().to_string(),
            Family::V4,
            SocketType::Stream,
        );

        let mut candidates = resolve(&dead_ep).await.unwrap();
        candidates.extend(resolve(&live_ep).await.unwrap());

        let stream = connect_stream(&candidates).await.unwrap();
        assert_eq!(stream.peer_addr().unwrap(), live);
    }

    #[tokio::test]
    async fn test_connect_refused_exhausts() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Endpoint::connect(
            "127.0.0.1",
            &addr.port().to_string(),
            Family::V4,
            SocketType::Stream,
        );
        let candidates = resolve(&endpoint).await.unwrap();

        let result = connect_stream(&candidates).await;
        assert!(matches!(
            result.map(|_| ()),
            Err(DialError::Exhausted { tried: 1, .. })
        ));
    }
}
