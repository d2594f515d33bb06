//! Mail-server reachability capability.
//!
//! Validators never touch the network directly: they are handed a
//! [`MailReachability`] implementation and treat its answer as an opaque
//! boolean. This keeps the check logic testable without real DNS.

mod dns;
mod fixed;

pub use dns::DnsMailReachability;
pub use fixed::StaticMailReachability;

use async_trait::async_trait;

/// Capability answering "can this domain plausibly receive mail?".
///
/// Implementations must be infallible: any resolution failure, timeout, or
/// other error is reported as `false`, never as an error.
#[async_trait]
pub trait MailReachability: Send + Sync {
    /// Report whether the domain can plausibly receive mail.
    async fn can_receive_mail(&self, domain: &str) -> bool;
}
