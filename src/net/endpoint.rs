use crate::{DialError, Result};
use std::net::SocketAddr;

/// Address family selector for resolution
///
/// `Unspec` requests candidates for every family the resolver returns;
/// `V4`/`V6` restrict the candidate sequence to one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Unspec,
    V4,
    V6,
}

impl Family {
    /// Returns true if `addr` belongs to this family selector
    pub fn matches(&self, addr: &SocketAddr) -> bool {
        match self {
            Family::Unspec => true,
            Family::V4 => addr.is_ipv4(),
            Family::V6 => addr.is_ipv6(),
        }
    }
}

/// Transport shape of the socket to be created for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketType {
    /// Connection-oriented (TCP)
    Stream,
    /// Connectionless, message-oriented (UDP)
    Datagram,
}

/// Logical endpoint fed to the resolver
///
/// Immutable once constructed. `host = None` resolves to the wildcard
/// address when `passive` is set (suitable for binding) and to loopback
/// otherwise (suitable for connecting).
///
/// # Examples
///
/// ```
/// use dialsrv::net::{Endpoint, Family, SocketType};
///
/// let server = Endpoint::bind(None, "5413", Family::Unspec, SocketType::Stream);
/// assert!(server.passive);
///
/// let client = Endpoint::connect("example.com", "5413", Family::V4, SocketType::Stream);
/// assert!(!client.passive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host name or IP literal; `None` means the local wildcard/loopback
    pub host: Option<String>,
    /// Numeric service (port) string
    pub service: String,
    /// Address family selector
    pub family: Family,
    /// Socket type for the resulting candidates
    pub socket_type: SocketType,
    /// True when the endpoint is intended for binding/listening
    pub passive: bool,
}

impl Endpoint {
    /// Creates a passive endpoint intended for binding/listening
    pub fn bind(
        host: Option<&str>,
        service: &str,
        family: Family,
        socket_type: SocketType,
    ) -> Self {
        Self {
            host: host.map(str::to_owned),
            service: service.to_owned(),
            family,
            socket_type,
            passive: true,
        }
    }

    /// Creates an active endpoint intended for connecting/sending
    pub fn connect(host: &str, service: &str, family: Family, socket_type: SocketType) -> Self {
        Self {
            host: Some(host.to_owned()),
            service: service.to_owned(),
            family,
            socket_type,
            passive: false,
        }
    }

    /// Parses the service string as a numeric port
    pub fn port(&self) -> Result<u16> {
        self.service.parse().map_err(|_| {
            DialError::Config(format!(
                "invalid service {:?}: expected a numeric port",
                self.service
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_endpoint() {
        let endpoint = Endpoint::bind(None, "5413", Family::Unspec, SocketType::Stream);
        assert!(endpoint.passive);
        assert!(endpoint.host.is_none());
        assert_eq!(endpoint.port().unwrap(), 5413);
    }

    #[test]
    fn test_connect_endpoint() {
        let endpoint = Endpoint::connect("example.com", "80", Family::V4, SocketType::Stream);
        assert!(!endpoint.passive);
        assert_eq!(endpoint.host.as_deref(), Some("example.com"));
        assert_eq!(endpoint.port().unwrap(), 80);
    }

    #[test]
    fn test_invalid_service() {
        let endpoint = Endpoint::bind(None, "http", Family::Unspec, SocketType::Stream);
        assert!(matches!(endpoint.port(), Err(DialError::Config(_))));
    }

    #[test]
    fn test_family_matches() {
        let v4: SocketAddr = "127.0.0.1:80".parse().unwrap();
        let v6: SocketAddr = "[::1]:80".parse().unwrap();

        assert!(Family::Unspec.matches(&v4));
        assert!(Family::Unspec.matches(&v6));
        assert!(Family::V4.matches(&v4));
        assert!(!Family::V4.matches(&v6));
        assert!(Family::V6.matches(&v6));
        assert!(!Family::V6.matches(&v4));
    }
}
