//! Tracing subscriber setup for applications using the SDK.
//!
//! The library crates only emit `tracing` events; nothing is printed until
//! an application installs a subscriber.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a `fmt` subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `filter` is used, e.g.
/// `"info,neo_rpc_client=debug"`. Returns an error if a global subscriber
/// is already set.
pub fn init(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(filter))?;
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_once() {
        // A second global subscriber is refused rather than replacing the first.
        let _ = init("debug");
        assert!(init("debug").is_err());
    }

    #[test]
    fn test_invalid_filter_rejected() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(init("neo=notalevel").is_err());
        }
    }
}
