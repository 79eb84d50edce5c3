//! Host identity lookup.
//!
//! The hostname and its resolved address are queried fresh on every call, so a
//! hostname or DNS change is visible on the next request without a restart.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::error::AppError;

/// Local host identity as reported to health-check clients.
#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub hostname: String,
    pub ip: Ipv4Addr,
}

/// Returns the local hostname.
pub fn local_hostname() -> Result<String, AppError> {
    let name = hostname::get().map_err(AppError::Hostname)?;
    Ok(name.to_string_lossy().into_owned())
}

/// Resolves `host` to its first IPv4 address, bounded by `timeout`.
///
/// The reported address is contractually IPv4; IPv6 entries in the resolved
/// set are skipped, and a host that resolves only to IPv6 is a failure.
pub async fn resolve_ipv4(host: &str, timeout: Duration) -> Result<Ipv4Addr, AppError> {
    let addrs = tokio::time::timeout(timeout, tokio::net::lookup_host((host, 0u16)))
        .await
        .map_err(|_| AppError::ResolveTimeout(timeout))?
        .map_err(|source| AppError::Resolve {
            host: host.to_string(),
            source,
        })?;

    addrs
        .filter_map(|addr| match addr.ip() {
            IpAddr::V4(ip) => Some(ip),
            IpAddr::V6(_) => None,
        })
        .next()
        .ok_or_else(|| AppError::NoIpv4(host.to_string()))
}

/// Queries the hostname and its resolved IPv4 address in one step.
pub async fn lookup(timeout: Duration) -> Result<HostIdentity, AppError> {
    let hostname = local_hostname()?;
    let ip = resolve_ipv4(&hostname, timeout).await?;
    Ok(HostIdentity { hostname, ip })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hostname_is_nonempty() {
        let name = local_hostname().unwrap();
        assert!(!name.is_empty());
    }

    #[tokio::test]
    async fn resolves_localhost_to_ipv4_loopback() {
        let ip = resolve_ipv4("localhost", Duration::from_secs(5))
            .await
            .unwrap();
        assert!(ip.is_loopback());
    }
}
