use color_eyre::eyre::{Result, WrapErr};
use dialsrv::datagram::{DatagramConfig, DatagramListener, DatagramSender, broadcast};
use dialsrv::net::{Endpoint, Family, SocketType, format_addr, local_host_name, resolve};
use dialsrv::stream::{StreamClient, StreamConfig, StreamEchoServer};
use tracing::{info, warn};

/// Port the echo server and datagram listener bind by default
const HOST_PORT: &str = "5413";
/// Local port the datagram sender binds before sending
const SENDER_PORT: &str = "5414";

/// Lists the resolved candidates for the local host, for orientation
async fn list_local_candidates(service: &str) {
    let host = local_host_name();
    let endpoint = Endpoint::bind(host.as_deref(), service, Family::Unspec, SocketType::Stream);

    match resolve(&endpoint).await {
        Ok(candidates) => {
            for candidate in &candidates {
                info!(
                    family = ?candidate.family,
                    addr = %format_addr(&candidate.addr),
                    "local candidate"
                );
            }
        }
        Err(e) => {
            warn!(error = %e, "could not list local candidates");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("dialsrv=info")
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map(|s| s.to_lowercase()).unwrap_or_else(|| "serve".to_string());

    list_local_candidates(HOST_PORT).await;

    match mode.as_str() {
        "serve" => {
            let service = args.get(2).cloned().unwrap_or_else(|| HOST_PORT.to_string());
            let config = StreamConfig {
                endpoint: Endpoint::bind(None, &service, Family::Unspec, SocketType::Stream),
                ..StreamConfig::default()
            };

            info!(service = %service, "starting stream echo server");
            let server = StreamEchoServer::new(config);
            server.run().await.wrap_err("failed to run stream echo server")?;
        }
        "listen" => {
            let service = args.get(2).cloned().unwrap_or_else(|| HOST_PORT.to_string());
            let config = DatagramConfig {
                endpoint: Endpoint::bind(None, &service, Family::V4, SocketType::Datagram),
                ..DatagramConfig::default()
            };

            info!(service = %service, "starting datagram listener");
            let listener = DatagramListener::new(config);
            listener.run().await.wrap_err("failed to run datagram listener")?;
        }
        "send" => {
            let (host, msg) = match (args.get(2), args.get(3)) {
                (Some(host), Some(msg)) => (host.clone(), msg.clone()),
                _ => {
                    eprintln!("Usage: {} send <host> <message>", args[0]);
                    std::process::exit(1);
                }
            };

            let local = Endpoint::bind(None, SENDER_PORT, Family::V4, SocketType::Datagram);
            let sender = DatagramSender::bind(&local)
                .await
                .wrap_err("failed to bind datagram sender")?;

            let dest = Endpoint::connect(&host, HOST_PORT, Family::Unspec, SocketType::Datagram);
            let delivered = sender
                .send_to_all(&dest, msg.as_bytes())
                .await
                .wrap_err("failed to send datagrams")?;
            info!(delivered, "datagrams sent");
        }
        "broadcast" => {
            let msg = match args.get(2) {
                Some(msg) => msg.clone(),
                None => {
                    eprintln!("Usage: {} broadcast <message>", args[0]);
                    std::process::exit(1);
                }
            };

            let port: u16 = HOST_PORT.parse().expect("default port is numeric");
            let sent = broadcast(port, msg.as_bytes())
                .await
                .wrap_err("failed to broadcast")?;
            info!(sent, "broadcast sent");
        }
        "client" => {
            let (host, msg) = match (args.get(2), args.get(3)) {
                (Some(host), Some(msg)) => (host.clone(), msg.clone()),
                _ => {
                    eprintln!("Usage: {} client <host> <message>", args[0]);
                    std::process::exit(1);
                }
            };

            let endpoint = Endpoint::connect(&host, HOST_PORT, Family::Unspec, SocketType::Stream);
            let mut client = StreamClient::connect(&endpoint)
                .await
                .wrap_err("failed to connect")?;
            let reply = client
                .exchange_string(&msg)
                .await
                .wrap_err("exchange failed")?;
            info!(reply = %reply, "received reply");
        }
        _ => {
            eprintln!("Usage: {} [serve|listen|send|broadcast|client] ...", args[0]);
            eprintln!("  serve [port]             Stream echo server (default port {HOST_PORT})");
            eprintln!("  listen [port]            Datagram listener (default port {HOST_PORT})");
            eprintln!("  send <host> <message>    Send a datagram to every candidate of <host>");
            eprintln!("  broadcast <message>      Limited broadcast on port {HOST_PORT}");
            eprintln!("  client <host> <message>  One stream exchange with <host>");
            std::process::exit(1);
        }
    }

    Ok(())
}
