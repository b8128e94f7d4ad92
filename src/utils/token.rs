use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use rand::{distributions::Alphanumeric, Rng};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Random secret for a bearer token. Only the argon2 hash is stored.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

/// 60-character alphanumeric join token carried by a session.
pub fn join_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(60)
        .map(char::from)
        .collect()
}

/// Single-use invitation token.
pub fn invite_token() -> String {
    nanoid::nanoid!(32)
}

pub fn encrypt(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

/// Opaque bearer credential handed to clients: base64("{row_id}.{secret}").
pub fn construct_token(token_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{token_id}.{secret}"))
}

/// Inverse of `construct_token`. None on anything malformed.
pub fn extract_token_parts(bearer: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(bearer).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    let id = Uuid::parse_str(id).ok()?;
    if secret.is_empty() {
        return None;
    }
    Some((id, secret.to_owned()))
}
