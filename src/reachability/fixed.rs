//! Fixed-answer reachability for tests and offline runs.

use super::MailReachability;
use async_trait::async_trait;

/// Reachability that answers the same for every domain.
pub struct StaticMailReachability {
    reachable: bool,
}

impl StaticMailReachability {
    /// Create a probe that always gives `reachable` as its answer.
    pub fn new(reachable: bool) -> Self {
        Self { reachable }
    }
}

#[async_trait]
impl MailReachability for StaticMailReachability {
    async fn can_receive_mail(&self, _domain: &str) -> bool {
        self.reachable
    }
}
