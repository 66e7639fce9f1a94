use url::{Host, Url};

/// Checks that `raw` is an absolute `http`/`https` URL whose host is a
/// dotted domain name ending in an alphabetic label of two or more letters.
///
/// IP-literal hosts and single-label hosts such as `localhost` are refused.
pub fn is_valid_url(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }

    let Ok(url) = Url::parse(raw) else {
        return false;
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    let Some(Host::Domain(domain)) = url.host() else {
        return false;
    };

    let mut labels = domain.rsplit('.');
    let tld = labels.next().unwrap_or_default();
    let has_parent = labels.next().is_some_and(|label| !label.is_empty());

    has_parent && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
