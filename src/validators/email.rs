//! Email address validation.
//!
//! Applies six ordered checks to one address: syntactic format, disposable
//! domain, mail-server reachability, suspicious domain, length bounds, and a
//! bot-pattern heuristic on the local part.

use crate::domain::EmailAddress;
use crate::models::{CheckOutcome, ValidationOutcome};
use crate::reachability::MailReachability;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Domains belonging to known temporary/throwaway email services.
static DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "mailinator.com",
    "guerrillamail.com",
    "tempmail.com",
    "fakeinbox.com",
    "temp-mail.org",
    "throwawaymail.com",
    "yopmail.com",
    "getnada.com",
    "mailnesia.com",
    "tempr.email",
    "discard.email",
    "sharklasers.com",
    "trashmail.com",
    "maildrop.cc",
    "temp-mail.ru",
    "emailondeck.com",
    "spamgourmet.com",
    "jetable.org",
    "mohmal.com",
    "tempinbox.com",
    "incognitomail.com",
    "getairmail.com",
    "tempmailaddress.com",
    "fakemail.net",
    "anonmails.de",
    "trash-mail.at",
    "mailnull.com",
];

/// Known legitimate email providers, never flagged as suspicious.
static KNOWN_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "mail.com",
    "icloud.com",
    "protonmail.com",
    "zoho.com",
    "yandex.com",
    "yahoo.co.uk",
    "yahoo.fr",
    "yahoo.com.au",
    "yahoo.ca",
    "yahoo.jp",
    "hotmail.co.uk",
    "hotmail.fr",
    "hotmail.de",
    "live.com",
    "msn.com",
    "comcast.net",
    "verizon.net",
    "att.net",
    "mail.ru",
    "web.de",
    "gmx.com",
    "gmx.de",
    "gmx.net",
    "inbox.com",
    "rocketmail.com",
];

/// Low-trust top-level labels often associated with spam.
static SUSPICIOUS_TLDS: &[&str] = &[
    ".xyz", ".top", ".space", ".website", ".site", ".online", ".fun", ".icu", ".club", ".live",
];

/// A run of 10+ alphanumerics in the local part.
static LOCAL_RANDOM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9]{10,}").expect("Failed to compile local run regex"));

/// A run of 15+ alphanumerics immediately before a dot in the domain.
static DOMAIN_RANDOM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9]{15,}\.").expect("Failed to compile domain run regex"));

/// Email validator with an injected mail-server reachability capability.
pub struct EmailValidator {
    reachability: Arc<dyn MailReachability>,
}

impl EmailValidator {
    /// Create an email validator using the given reachability probe.
    pub fn new(reachability: Arc<dyn MailReachability>) -> Self {
        Self { reachability }
    }

    /// Validate one email address.
    ///
    /// Checks run in a fixed order and each is recorded under its report
    /// label. A format failure stops evaluation: only "Basic Format" is
    /// recorded and the outcome is invalid. A disposable domain does not by
    /// itself fail the address; the domain clause passes when the domain is
    /// not disposable OR not suspicious.
    pub async fn validate(&self, email: &str) -> ValidationOutcome {
        let mut checks = CheckOutcome::new();

        let parsed = EmailAddress::new(email);
        checks.record("Basic Format", parsed.is_ok());
        let Ok(address) = parsed else {
            return ValidationOutcome::invalid(checks);
        };

        let not_disposable = !is_disposable_domain(address.domain());
        checks.record("Not Disposable Domain", not_disposable);

        let has_mail_server = self.probe_mail_server(address.domain()).await;
        checks.record("Valid Mail Server", has_mail_server);

        let not_suspicious = !is_suspicious_domain(address.domain());
        checks.record("Not Suspicious Domain", not_suspicious);

        let proper_length = has_proper_length(&address);
        checks.record("Proper Length", proper_length);

        let no_excessive_randomization = !has_excessive_randomization(address.local_part());
        checks.record("No Excessive Randomization", no_excessive_randomization);

        let is_valid = has_mail_server
            && (not_disposable || not_suspicious)
            && proper_length
            && no_excessive_randomization;

        ValidationOutcome { is_valid, checks }
    }

    /// Probe reachability, short-circuiting local testing domains.
    async fn probe_mail_server(&self, domain: &str) -> bool {
        if domain == "localhost" || domain == "example.com" {
            return false;
        }

        self.reachability.can_receive_mail(domain).await
    }
}

/// Whether the domain belongs to a known disposable provider.
fn is_disposable_domain(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    DISPOSABLE_DOMAINS.iter().any(|d| *d == domain)
}

/// Whether the domain looks computer-generated or uses a low-trust TLD.
///
/// Known providers are never suspicious.
fn is_suspicious_domain(domain: &str) -> bool {
    let domain = domain.to_lowercase();

    if KNOWN_PROVIDERS.iter().any(|p| *p == domain) {
        return false;
    }

    DOMAIN_RANDOM_RUN.is_match(&domain) || SUSPICIOUS_TLDS.iter().any(|tld| domain.ends_with(tld))
}

/// Local part in [3, 64] characters, whole address at most 254.
fn has_proper_length(address: &EmailAddress) -> bool {
    let local_len = address.local_part().chars().count();
    (3..=64).contains(&local_len) && address.as_str().chars().count() <= 254
}

/// Bot-pattern heuristic on the local part: mostly non-alphabetic
/// characters, or a long unbroken alphanumeric run.
fn has_excessive_randomization(local_part: &str) -> bool {
    let total = local_part.chars().count();
    let non_alphabetic = local_part.chars().filter(|c| !c.is_alphabetic()).count();
    let ratio = non_alphabetic as f64 / total as f64;

    ratio > 0.5 || LOCAL_RANDOM_RUN.is_match(local_part)
}
