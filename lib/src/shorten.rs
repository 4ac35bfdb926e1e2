//! Short-name derivation for URIs. `shorten` keeps a URI's final fragment
//! or path segment; `rename` deterministically disambiguates collisions.

/// Derive the short name for a URI: the text following the last `#`, or
/// failing that the last path segment, with trailing slashes stripped
/// first. Deterministic given the URI alone; uniqueness across URIs is
/// the registries' job, not this function's.
pub fn shorten(uri: &str) -> &str {
    let trimmed = uri.trim_end_matches('/');
    if let Some(idx) = trimmed.rfind('#') {
        &trimmed[idx + 1..]
    } else if let Some(idx) = trimmed.rfind('/') {
        &trimmed[idx + 1..]
    } else {
        trimmed
    }
}

/// Produce a collision-resolved short name: `<short>-<HASH4>`, where
/// HASH4 is the first 4 hex characters (uppercase) of the hash of the
/// full URI. A pure function of the URI, so repeated runs over the same
/// graph rename to the same identifier while distinct colliding URIs get
/// different suffixes with overwhelming probability.
pub fn rename(short: &str, uri: &str) -> String {
    let digest = blake3::hash(uri.as_bytes());
    format!("{}-{}", short, digest.to_hex().as_str()[..4].to_ascii_uppercase())
}
