//! CLI module for peerboard
//!
//! Provides `-h`/`--help` and `-V`/`--version` plus environment variable
//! documentation. The service itself is configured entirely via environment
//! variables.

use clap::Parser;

/// Peerboard - Peer liveness/version dashboard service
#[derive(Parser, Debug)]
#[command(name = "peerboard")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PEER_SERVICES             Comma-separated name:url peer list
                              (default: blue/green built-in peers)
    PEERBOARD_HOST            Bind address (default: 0.0.0.0)
    PEERBOARD_PORT            Listen port (default: 5000)
    PEERBOARD_VERSION_FILE    Version file path (default: version.txt)
    PEERBOARD_SERVICE_NAME    Displayed service name (default: peerboard)
    PEERBOARD_LOG_LEVEL       Log level (default: info)
"#)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_without_args() {
        Cli::try_parse_from(["peerboard"]).unwrap();
    }

    #[test]
    fn cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["peerboard", "--bogus"]).is_err());
    }
}
