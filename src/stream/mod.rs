//! Stream (TCP) sessions: a serial one-exchange echo server and a one-shot client

pub mod client;
pub mod config;
pub mod server;

pub use client::StreamClient;
pub use config::StreamConfig;
pub use server::StreamEchoServer;
