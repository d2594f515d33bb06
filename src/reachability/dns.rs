//! DNS-backed reachability probe.

use super::MailReachability;
use async_trait::async_trait;
use std::time::Duration;
use tokio::net;
use tracing::debug;

/// Reachability probe backed by the system resolver.
///
/// Resolving any host address for the domain is used as a proxy for "can
/// receive mail": presence in DNS, not mail-exchange confirmation. Lookups
/// are bounded by a timeout; timeouts and resolution errors both answer
/// `false`.
pub struct DnsMailReachability {
    timeout: Duration,
}

impl DnsMailReachability {
    /// Create a probe with the given lookup timeout in seconds.
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl MailReachability for DnsMailReachability {
    async fn can_receive_mail(&self, domain: &str) -> bool {
        // Port is a placeholder: lookup_host needs a service but only the
        // address resolution matters here.
        let target = (domain.to_string(), 25u16);

        match tokio::time::timeout(self.timeout, net::lookup_host(target)).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(error)) => {
                debug!(domain, %error, "DNS resolution failed");
                false
            }
            Err(_) => {
                debug!(domain, "DNS resolution timed out");
                false
            }
        }
    }
}
