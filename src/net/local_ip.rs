//! Local address discovery for the startup banner.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Well-known external address used only to pick a route; nothing is sent.
const PROBE_TARGET: &str = "8.8.8.8:80";

/// Outbound-facing local IP, or `127.0.0.1` when it cannot be determined.
pub fn detect_local_ip() -> IpAddr {
    detect_via(PROBE_TARGET)
}

fn detect_via(target: &str) -> IpAddr {
    match probe(target) {
        Ok(ip) if !ip.is_unspecified() => ip,
        Ok(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        Err(e) => {
            tracing::debug!(error = %e, "Local IP detection failed, using loopback");
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

fn probe(target: &str) -> std::io::Result<IpAddr> {
    // Connecting a UDP socket only selects a route and local endpoint.
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect(target)?;
    Ok(socket.local_addr()?.ip())
}
