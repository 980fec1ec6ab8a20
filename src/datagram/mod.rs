//! Datagram (UDP) sessions: a receive-and-report listener, a per-candidate
//! sender, and a one-shot limited-broadcast helper

pub mod client;
pub mod config;
pub mod server;

pub use client::{DatagramSender, broadcast};
pub use config::DatagramConfig;
pub use server::DatagramListener;
