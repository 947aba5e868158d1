//! Salted SHA-256 password hashes stored as `salt$digest` in hex.

use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    format!("{}${}", hex::encode(salt), digest(&salt, password))
}

/// Malformed stored hashes never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, expected)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    constant_time_eq(digest(&salt, password).as_bytes(), expected.as_bytes())
}

fn digest(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
