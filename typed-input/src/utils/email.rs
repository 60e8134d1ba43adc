//! Email normalization and syntax checks used by the `email` type.
//!
//! Normalization lowercases the address and removes provider-specific
//! aliasing so that `John.Doe+news@GMAIL.com` and `johndoe@gmail.com` end up
//! as the same value:
//!
//! | Provider | Rule |
//! |----------|------|
//! | Gmail (`gmail.com`, `googlemail.com`) | drop `+tag`, drop dots, domain becomes `gmail.com` |
//! | iCloud (`icloud.com`, `me.com`) | drop `+tag` |
//! | Outlook (`outlook.com`, `hotmail.com`, `live.com`, ...) | drop `+tag` |
//! | Yahoo (`yahoo.com`, `ymail.com`, `rocketmail.com`, ...) | drop `-tag` |
use once_cell::sync::Lazy;
use regex::Regex;

const GMAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];
const ICLOUD_DOMAINS: &[&str] = &["icloud.com", "me.com"];
const OUTLOOK_DOMAINS: &[&str] = &[
    "hotmail.com",
    "hotmail.co.uk",
    "hotmail.fr",
    "hotmail.de",
    "live.com",
    "live.co.uk",
    "msn.com",
    "outlook.com",
    "outlook.fr",
    "outlook.de",
];
const YAHOO_DOMAINS: &[&str] = &[
    "rocketmail.com",
    "yahoo.ca",
    "yahoo.co.uk",
    "yahoo.com",
    "yahoo.de",
    "yahoo.fr",
    "ymail.com",
];

const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 254;
const MAX_LABEL_LEN: usize = 63;

static LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    let atom = r"[a-z0-9!#$%&'*+/=?^_`{|}~\x{00A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]+";
    Regex::new(&format!(r"^{atom}(?:\.{atom})*$")).expect("valid local part pattern")
});
static DOMAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$").expect("valid domain label pattern")
});
static TLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,}$").expect("valid top level domain pattern"));

/// Lowercases `raw` and strips provider sub-addressing.
///
/// Returns `None` when there is no `@` or nothing is left of the local part.
pub fn normalize(raw: &str) -> Option<String> {
    let (local, domain) = raw.rsplit_once('@')?;
    let mut local = local.to_lowercase();
    let mut domain = domain.to_lowercase();

    if GMAIL_DOMAINS.contains(&domain.as_str()) {
        local = strip_tag(&local, '+').replace('.', "");
        domain = "gmail.com".to_string();
    } else if ICLOUD_DOMAINS.contains(&domain.as_str())
        || OUTLOOK_DOMAINS.contains(&domain.as_str())
    {
        local = strip_tag(&local, '+').to_string();
    } else if YAHOO_DOMAINS.contains(&domain.as_str()) {
        local = strip_tag(&local, '-').to_string();
    }

    if local.is_empty() {
        return None;
    }

    Some(format!("{}@{}", local, domain))
}

fn strip_tag(local: &str, separator: char) -> &str {
    local.split(separator).next().unwrap_or(local)
}

/// Syntax check on an already normalized address.
pub fn is_email(address: &str) -> bool {
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };

    if local.len() > MAX_LOCAL_LEN || !LOCAL_PART.is_match(local) {
        return false;
    }

    is_fqdn(domain)
}

fn is_fqdn(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    if labels.len() < 2 || !TLD.is_match(tld) {
        return false;
    }

    labels
        .iter()
        .all(|label| label.len() <= MAX_LABEL_LEN && DOMAIN_LABEL.is_match(label))
}
