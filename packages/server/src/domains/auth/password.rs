use anyhow::Result;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(Into::into)
}

/// Check a password against a stored hash.
///
/// A malformed stored hash counts as a mismatch rather than an error; the
/// login path treats both the same way.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
