//! Logical endpoints, address resolution, and address formatting
//!
//! This module turns a logical endpoint (host, service, family, socket type,
//! passive flag) into an ordered sequence of concrete candidate addresses,
//! and renders addresses numerically for diagnostics.

pub mod endpoint;
pub mod format;
pub mod resolve;

pub use endpoint::{Endpoint, Family, SocketType};
pub use format::{format_addr, local_host_name};
pub use resolve::{Candidate, resolve};
