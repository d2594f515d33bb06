use async_trait::async_trait;
use contact_validator::reachability::MailReachability;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock mail reachability for testing.
///
/// Answers per-domain from configured test data, falling back to a default
/// answer, and records every queried domain for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMailReachability {
    answers: Arc<Mutex<HashMap<String, bool>>>,
    queried: Arc<Mutex<Vec<String>>>,
    default_answer: bool,
}

#[allow(dead_code)]
impl MockMailReachability {
    /// Create a mock that answers `default_answer` for unconfigured domains.
    pub fn new(default_answer: bool) -> Self {
        Self {
            answers: Arc::new(Mutex::new(HashMap::new())),
            queried: Arc::new(Mutex::new(Vec::new())),
            default_answer,
        }
    }

    /// Configure the answer for one domain.
    pub fn set_answer(&self, domain: &str, reachable: bool) {
        let mut answers = self.answers.lock().unwrap();
        answers.insert(domain.to_string(), reachable);
    }

    /// Domains queried so far, in order.
    pub fn queried_domains(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    /// Number of lookups performed.
    pub fn query_count(&self) -> usize {
        self.queried.lock().unwrap().len()
    }
}

#[async_trait]
impl MailReachability for MockMailReachability {
    async fn can_receive_mail(&self, domain: &str) -> bool {
        self.queried.lock().unwrap().push(domain.to_string());

        let answers = self.answers.lock().unwrap();
        answers.get(domain).copied().unwrap_or(self.default_answer)
    }
}
