use serde::{Serialize, Deserialize};

use crate::types::{SECRET_BYTES, TotpAuthError};
use crate::utils::{base32_decode, base32_encode};

/// A TOTP shared secret: 10 bytes of entropy carried as a 16 character
/// base32 string, the form authenticator apps accept at enrollment.
///
/// Input is case-insensitive and normalized to uppercase, so parsing and
/// re-encoding always reproduces the generated text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Generate a fresh secret from the process CSPRNG.
    pub fn generate() -> Self {
        let raw: [u8; SECRET_BYTES] = rand::random();
        log::debug!("generating base32 TOTP shared secret");
        Self(base32_encode(&raw))
    }

    /// Parse a secret from its base32 text form.
    pub fn from_encoded(secret: &str) -> Result<Self, TotpAuthError> {
        let normalized = secret.to_ascii_uppercase();
        let _ = base32_decode(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw key bytes for the keyed hash.
    pub(crate) fn decode(&self) -> Result<Vec<u8>, TotpAuthError> {
        base32_decode(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::SharedSecret;
    use crate::types::{SECRET_BYTES, SECRET_CHARS, TotpAuthError};
    use crate::utils::base32_encode;

    #[test]
    fn generated_secret_is_16_chars() {
        let secret = SharedSecret::generate();
        assert_eq!(secret.as_str().len(), SECRET_CHARS);
        assert!(!secret.as_str().contains('='));
    }

    #[test]
    fn round_trip_reproduces_text() {
        let secret = SharedSecret::generate();
        let raw = secret.decode().unwrap();
        assert_eq!(raw.len(), SECRET_BYTES);
        assert_eq!(base32_encode(&raw), secret.as_str());
    }

    #[test]
    fn lowercase_input_normalizes() {
        let secret = SharedSecret::from_encoded("pt5umqiyf2o4zeig").unwrap();
        assert_eq!(secret.as_str(), "PT5UMQIYF2O4ZEIG");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            SharedSecret::from_encoded("TOOSHORT"),
            Err(TotpAuthError::WrongSecretSize)
        );
        assert_eq!(
            SharedSecret::from_encoded("1T5UMQIYF2O4ZEI8"),
            Err(TotpAuthError::InvalidBase32Encode)
        );
    }

    #[test]
    fn serde_round_trip() {
        let secret = SharedSecret::from_encoded("PT5UMQIYF2O4ZEIG").unwrap();
        let json = serde_json::to_string(&secret).unwrap();
        let back: SharedSecret = serde_json::from_str(&json).unwrap();
        assert_eq!(secret, back);
    }
}
