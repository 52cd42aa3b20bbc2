// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password hashing and session token material.
//!
//! Passwords are stored as `"{saltHex}:{hashHex}"` where the hash is scrypt
//! (N = 2^14, r = 8, p = 1, 64-byte output) over the password with the hex
//! salt text as the scrypt salt. Session tokens are random hex strings; only
//! their SHA-256 digest is ever persisted.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;

const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;
const SCRYPT_OUTPUT_LEN: usize = 64;
const SALT_LEN: usize = 16;
const TOKEN_LEN: usize = 48;

/// Failures raised by the key derivation function.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("invalid scrypt parameters: {0}")]
    InvalidParams(String),
    #[error("invalid scrypt output length: {0}")]
    InvalidOutputLength(String),
}

fn derive(password: &str, salt_hex: &str) -> Result<Vec<u8>, CredentialError> {
    let params: scrypt::Params =
        scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, SCRYPT_OUTPUT_LEN)
            .map_err(|e| CredentialError::InvalidParams(e.to_string()))?;
    let mut output: Vec<u8> = vec![0u8; SCRYPT_OUTPUT_LEN];
    scrypt::scrypt(password.as_bytes(), salt_hex.as_bytes(), &params, &mut output)
        .map_err(|e| CredentialError::InvalidOutputLength(e.to_string()))?;
    Ok(output)
}

/// Hashes a password with a fresh random salt.
///
/// # Errors
///
/// Returns an error if the scrypt parameters are rejected.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt: [u8; SALT_LEN] = rand::random();
    let salt_hex: String = hex::encode(salt);
    let derived: Vec<u8> = derive(password, &salt_hex)?;
    Ok(format!("{salt_hex}:{}", hex::encode(derived)))
}

/// Verifies a password against a stored `salt:hash` value.
///
/// Malformed stored values never verify.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, hash_hex)) = stored.split_once(':') else {
        return false;
    };
    if salt_hex.is_empty() {
        return false;
    }
    let Ok(expected) = hex::decode(hash_hex) else {
        return false;
    };
    if expected.len() != SCRYPT_OUTPUT_LEN {
        return false;
    }
    derive(password, salt_hex)
        .map(|actual| bool::from(actual.as_slice().ct_eq(expected.as_slice())))
        .unwrap_or(false)
}

/// Generates a new opaque session token (96 hex characters).
#[must_use]
pub fn generate_session_token() -> String {
    let bytes: [u8; TOKEN_LEN] = rand::random();
    hex::encode(bytes)
}

/// Returns the hex SHA-256 digest under which a token is stored.
#[must_use]
pub fn hash_session_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
