//! Admin credential check.
//!
//! This gates a convenience admin UI and is **not** a security boundary:
//! the stored credential lives in client-visible configuration. Two stored
//! formats are understood:
//!
//! - legacy: the decimal output of [`simple_hash`], a 32-bit rolling hash
//!   kept so existing documents keep working
//! - `pbkdf2$<iterations>$<salt-hex>$<hash-hex>`: PBKDF2-HMAC-SHA256 with a
//!   random salt, written by every credential change

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::error::AuthError;
use crate::models::AdminAuth;

/// PBKDF2 rounds for newly written credentials.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Highest round count accepted from a stored credential; larger values
/// would stall the login check.
pub const MAX_ITERATIONS: u32 = 10 * DEFAULT_ITERATIONS;

const PBKDF2_PREFIX: &str = "pbkdf2";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Legacy 32-bit rolling hash (`h = h * 31 + unit`) over UTF-16 code
/// units, rendered as signed decimal.
pub fn simple_hash(input: &str) -> String {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .to_string()
}

/// A parsed stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// [`simple_hash`] output.
    Legacy(String),
    /// Salted PBKDF2-HMAC-SHA256.
    Pbkdf2 {
        iterations: u32,
        salt: Vec<u8>,
        hash: Vec<u8>,
    },
}

impl Credential {
    /// Parse a stored `password` field.
    pub fn parse(stored: &str) -> Result<Self, AuthError> {
        let Some(rest) = stored
            .strip_prefix(PBKDF2_PREFIX)
            .and_then(|r| r.strip_prefix('$'))
        else {
            return Ok(Credential::Legacy(stored.to_string()));
        };

        let malformed = || AuthError::MalformedCredential(stored.to_string());
        let mut parts = rest.split('$');
        let (Some(iterations), Some(salt), Some(hash), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let iterations: u32 = iterations.parse().map_err(|_| malformed())?;
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(malformed());
        }

        Ok(Credential::Pbkdf2 {
            iterations,
            salt: hex::decode(salt).map_err(|_| malformed())?,
            hash: hex::decode(hash).map_err(|_| malformed())?,
        })
    }

    /// Derive a fresh salted credential.
    pub fn new_salted(password: &str, iterations: u32) -> Self {
        let mut salt = vec![0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let hash = derive_key(password, &salt, iterations).to_vec();
        Credential::Pbkdf2 {
            iterations,
            salt,
            hash,
        }
    }

    pub fn verify(&self, password: &str) -> bool {
        match self {
            Credential::Legacy(expected) => simple_hash(password) == *expected,
            Credential::Pbkdf2 {
                iterations,
                salt,
                hash,
            } => derive_key(password, salt, *iterations).as_slice() == hash.as_slice(),
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Credential::Legacy(_))
    }

    /// The string stored in [`AdminAuth::password`].
    pub fn encode(&self) -> String {
        match self {
            Credential::Legacy(hash) => hash.clone(),
            Credential::Pbkdf2 {
                iterations,
                salt,
                hash,
            } => format!(
                "{}${}${}${}",
                PBKDF2_PREFIX,
                iterations,
                hex::encode(salt),
                hex::encode(hash)
            ),
        }
    }
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// New salted credential string with [`DEFAULT_ITERATIONS`].
pub fn hash_password(password: &str) -> String {
    Credential::new_salted(password, DEFAULT_ITERATIONS).encode()
}

/// Check a login attempt against the stored admin credential.
///
/// Username must match exactly. An unreadable stored credential rejects
/// every attempt.
pub fn authenticate(auth: &AdminAuth, username: &str, password: &str) -> bool {
    if username != auth.username {
        return false;
    }

    match Credential::parse(&auth.password) {
        Ok(credential) => credential.verify(password),
        Err(e) => {
            log::warn!("Rejecting login: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_config;

    #[test]
    fn test_simple_hash_known_values() {
        assert_eq!(simple_hash("admin"), "92668751");
        assert_eq!(simple_hash(""), "0");
        // wraps into negative values like a 32-bit integer
        assert_eq!(simple_hash("administrator"), "-652229939");
    }

    #[test]
    fn test_default_admin_login() {
        let config = default_config();
        assert!(authenticate(&config.admin_auth, "admin", "admin"));
        assert!(!authenticate(&config.admin_auth, "admin", "Admin"));
        assert!(!authenticate(&config.admin_auth, "admin", ""));
        assert!(!authenticate(&config.admin_auth, "root", "admin"));
    }

    #[test]
    fn test_salted_credential_roundtrip() {
        let credential = Credential::new_salted("s3cret", 1_000);
        let stored = credential.encode();
        assert!(stored.starts_with("pbkdf2$1000$"));

        let parsed = Credential::parse(&stored).unwrap();
        assert_eq!(parsed, credential);
        assert!(parsed.verify("s3cret"));
        assert!(!parsed.verify("s3cret "));
        assert!(!parsed.is_legacy());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = Credential::new_salted("same", 10).encode();
        let b = Credential::new_salted("same", 10).encode();
        assert_ne!(a, b);
    }

    #[test]
    fn test_authenticate_with_salted_credential() {
        let auth = AdminAuth {
            username: "owner".into(),
            password: Credential::new_salted("hunter2", 1_000).encode(),
        };
        assert!(authenticate(&auth, "owner", "hunter2"));
        assert!(!authenticate(&auth, "owner", "admin"));
    }

    #[test]
    fn test_malformed_credential_rejects_login() {
        for stored in [
            "pbkdf2$",
            "pbkdf2$abc$00$00",
            "pbkdf2$0$00$00",
            "pbkdf2$10$zz$00",
            "pbkdf2$4294967295$00$00",
            "pbkdf2$1000001$00$00",
        ] {
            assert!(Credential::parse(stored).is_err(), "{stored}");
            let auth = AdminAuth {
                username: "admin".into(),
                password: stored.into(),
            };
            assert!(!authenticate(&auth, "admin", "admin"));
        }
    }
}
