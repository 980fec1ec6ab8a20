use std::net::SocketAddr;

/// Renders an address numerically as `"<ip>:<port>"` for IPv4 and IPv6 alike
///
/// IPv6 addresses are rendered unbracketed (`::1:5413`), matching the classic
/// `inet_ntop` style. Never performs a reverse name lookup, so it is safe to
/// call from diagnostic paths.
pub fn format_addr(addr: &SocketAddr) -> String {
    format!("{}:{}", addr.ip(), addr.port())
}

/// Host name of the local machine, if the OS reports one
pub fn local_host_name() -> Option<String> {
    gethostname::gethostname()
        .into_string()
        .ok()
        .filter(|name| !name.is_empty())
}
