use bcrypt::{hash, verify, DEFAULT_COST};

use crate::AResult;

/// One-way salted hash; bcrypt generates a fresh random salt per call.
pub fn hash_password(password: &str) -> AResult<String> {
    Ok(hash(password, DEFAULT_COST)?)
}

pub fn verify_password(password: &str, password_hash: &str) -> AResult<bool> {
    Ok(verify(password, password_hash)?)
}
