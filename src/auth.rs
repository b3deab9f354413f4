//! Password hashing for seeded credentials.

use sha2::{Digest, Sha256};

/// Hash a plaintext password into the stored digest format.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    format!("sha256:{}", hex::encode(digest))
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    hash_password(password) == hashed
}
