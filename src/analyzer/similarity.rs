//! Positional domain similarity
//!
//! Compares two normalized hostnames character by character at the same
//! index. This is not an edit distance: a single inserted or removed
//! character shifts every following position, so near-identical domains can
//! score close to zero.

const SCHEMES: [&str; 2] = ["https://", "http://"];
const WWW_PREFIX: &str = "www.";

/// Strip a leading `http://` or `https://` (case-sensitive)
pub fn strip_scheme(value: &str) -> &str {
    SCHEMES
        .iter()
        .find_map(|scheme| value.strip_prefix(scheme))
        .unwrap_or(value)
}

/// Scheme and leading `www.` removed, cut at the first `/`
pub fn normalize_domain(value: &str) -> &str {
    let host = strip_scheme(value);
    let host = host.strip_prefix(WWW_PREFIX).unwrap_or(host);
    host.split('/').next().unwrap_or(host)
}

/// Share of equal characters at equal positions, over the longer length.
/// Returns 0.0 when both normalized values are empty.
pub fn similarity_score(source: &str, target: &str) -> f64 {
    let a: Vec<char> = normalize_domain(source).chars().collect();
    let b: Vec<char> = normalize_domain(target).chars().collect();

    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }

    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matches as f64 / max_len as f64
}
