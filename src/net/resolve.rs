use crate::net::endpoint::{Endpoint, Family, SocketType};
use crate::{DialError, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::lookup_host;
use tracing::debug;

/// One resolved concrete transport address for a logical endpoint
///
/// Candidates are produced as an owned, ordered `Vec` by [`resolve`]; the
/// sequence is read-only during iteration and the OS-returned order is
/// preserved as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Concrete family of `addr` (always `V4` or `V6`)
    pub family: Family,
    /// Socket type carried over from the endpoint
    pub socket_type: SocketType,
    /// The resolved transport address
    pub addr: SocketAddr,
}

impl Candidate {
    fn from_addr(addr: SocketAddr, socket_type: SocketType) -> Self {
        let family = if addr.is_ipv4() {
            Family::V4
        } else {
            Family::V6
        };
        Self {
            family,
            socket_type,
            addr,
        }
    }
}

/// Resolves a logical endpoint into an ordered sequence of candidates
///
/// - `host = None` synthesizes wildcard (passive) or loopback (active)
///   candidates without touching the name service.
/// - An IP literal short-circuits the lookup.
/// - Anything else goes through the OS resolver; candidate order is the
///   resolver's order, filtered by the endpoint's family selector.
///
/// An empty sequence after filtering is a resolution failure; no partial
/// state is left behind.
pub async fn resolve(endpoint: &Endpoint) -> Result<Vec<Candidate>> {
    let port = endpoint.port()?;

    let addrs: Vec<SocketAddr> = match &endpoint.host {
        None => local_addrs(endpoint.family, endpoint.passive, port),
        Some(host) => {
            if let Ok(ip) = host.parse::<IpAddr>() {
                vec![SocketAddr::new(ip, port)]
            } else {
                lookup_host((host.as_str(), port))
                    .await
                    .map_err(DialError::Resolution)?
                    .collect()
            }
        }
    };

    let candidates: Vec<Candidate> = addrs
        .into_iter()
        .filter(|addr| endpoint.family.matches(addr))
        .map(|addr| Candidate::from_addr(addr, endpoint.socket_type))
        .collect();

    if candidates.is_empty() {
        return Err(DialError::Resolution(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!(
                "no usable addresses for host {:?} service {:?}",
                endpoint.host, endpoint.service
            ),
        )));
    }

    debug!(count = candidates.len(), "resolved candidates");
    Ok(candidates)
}

/// Wildcard or loopback addresses for a host-less endpoint
fn local_addrs(family: Family, passive: bool, port: u16) -> Vec<SocketAddr> {
    let (v4, v6): (IpAddr, IpAddr) = if passive {
        (Ipv4Addr::UNSPECIFIED.into(), Ipv6Addr::UNSPECIFIED.into())
    } else {
        (Ipv4Addr::LOCALHOST.into(), Ipv6Addr::LOCALHOST.into())
    };

    match family {
        Family::V4 => vec![SocketAddr::new(v4, port)],
        Family::V6 => vec![SocketAddr::new(v6, port)],
        Family::Unspec => vec![SocketAddr::new(v4, port), SocketAddr::new(v6, port)],
    }
}
