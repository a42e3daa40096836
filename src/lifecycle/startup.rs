//! Startup banner.
//!
//! Printed to stdout once the listener is bound, so operators can copy the
//! address and test URLs straight into a client.

use std::fmt::Write as _;
use std::net::{IpAddr, SocketAddr};

use crate::config::BannerConfig;
use crate::http::handlers::CONFIG_MANAGER_PATH;
use crate::net::local_ip::detect_local_ip;

const RULE_WIDTH: usize = 50;

/// Operator-facing startup summary.
#[derive(Debug, Clone)]
pub struct Banner {
    /// Address the listener is bound to.
    pub listen: SocketAddr,
    /// Address clients should use (the LAN address for wildcard binds).
    pub advertised: SocketAddr,
    pub username: String,
    pub password: String,
    pub motion_enabled: bool,
}

impl Banner {
    pub fn new(listen: SocketAddr, credentials: &BannerConfig, motion_enabled: bool) -> Self {
        let advertised = SocketAddr::new(advertised_ip(listen.ip()), listen.port());
        Self {
            listen,
            advertised,
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            motion_enabled,
        }
    }

    /// Base URL with embedded credentials.
    fn base_url(&self) -> String {
        format!(
            "http://{}:{}@{}{}",
            self.username, self.password, self.advertised, CONFIG_MANAGER_PATH
        )
    }

    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let base = self.base_url();
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "Camera Test Server");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Starting server on {}", self.listen);
        let _ = writeln!(
            out,
            "Motion detection: {}",
            if self.motion_enabled { "ON" } else { "OFF" }
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Configure your client with:");
        let _ = writeln!(out, "  IP Address: {}", self.advertised);
        let _ = writeln!(out, "  Username: {}", self.username);
        let _ = writeln!(out, "  Password: {}", self.password);
        let _ = writeln!(out);
        let _ = writeln!(out, "Test URLs:");
        let _ = writeln!(out, "  Get status: {base}?action=getConfig&name=MotionDetect");
        let _ = writeln!(out, "  Turn ON:    {base}?action=setConfig&MotionDetect[].Enable=true");
        let _ = writeln!(out, "  Turn OFF:   {base}?action=setConfig&MotionDetect[].Enable=false");
        let _ = writeln!(out);
        let _ = writeln!(out, "Tips:");
        let _ = writeln!(out, "  - Use {} in your client (not localhost)", self.advertised);
        let _ = writeln!(out, "  - Keep the client and this machine on the same network");
        let _ = writeln!(out, "  - Check firewall settings if the connection fails");
        let _ = writeln!(out);
        let _ = writeln!(out, "Press Ctrl+C to stop");
        let _ = write!(out, "{rule}");
        out
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

fn advertised_ip(bound: IpAddr) -> IpAddr {
    if bound.is_unspecified() {
        detect_local_ip()
    } else {
        bound
    }
}
