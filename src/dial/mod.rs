//! Ordered candidate traversal and role-specific attempt strategies
//!
//! [`try_candidates`] walks a resolved candidate sequence strictly in order,
//! invoking an attempt strategy per candidate until one succeeds. The bind
//! and connect helpers in [`bind`] and [`connect`] supply the two standard
//! strategies (server role and client role).

pub mod bind;
pub mod connect;

pub use bind::{bind_datagram, bind_stream};
pub use connect::connect_stream;

use crate::net::{Candidate, format_addr};
use crate::{DialError, Result};
use std::future::Future;
use tracing::{debug, warn};

/// Tries candidates strictly in sequence order; first success wins
///
/// `attempt` creates a socket for the candidate and performs the
/// role-specific operation (bind for servers, connect for clients). On
/// failure the attempt's socket is dropped (closed) before the next
/// candidate is tried; the failure itself is swallowed into the iteration.
/// Only exhaustion surfaces, as a recoverable [`DialError::Exhausted`]
/// carrying the attempt count and the last candidate's error.
///
/// Per-attempt logging is a diagnostic side channel only; it never drives
/// control flow.
pub async fn try_candidates<T, F, Fut>(candidates: &[Candidate], mut attempt: F) -> Result<T>
where
    F: FnMut(Candidate) -> Fut,
    Fut: Future<Output = std::io::Result<T>>,
{
    let mut last = None;

    for candidate in candidates {
        debug!(addr = %format_addr(&candidate.addr), "trying candidate");
        match attempt(*candidate).await {
            Ok(out) => {
                debug!(addr = %format_addr(&candidate.addr), "candidate succeeded");
                return Ok(out);
            }
            Err(e) => {
                warn!(addr = %format_addr(&candidate.addr), error = %e, "candidate failed");
                last = Some(e);
            }
        }
    }

    Err(DialError::Exhausted {
        tried: candidates.len(),
        last: last.unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty candidate sequence")
        }),
    })
}
