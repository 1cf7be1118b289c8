use std::time::{SystemTime, UNIX_EPOCH};
use crate::types::{SECRET_CHARS, TIME_STEP_SECS, Timestamp, TimeStep, TotpAuthError};

pub fn base32_decode(secret: &str) -> Result<Vec<u8>, TotpAuthError> {
    if secret.len() != SECRET_CHARS {
        return Err(TotpAuthError::WrongSecretSize);
    }
    match base32::decode(base32::Alphabet::RFC4648 { padding: false }, secret) {
        Some(s) => Ok(s),
        _ => Err(TotpAuthError::InvalidBase32Encode),
    }
}

pub fn base32_encode(s: &[u8]) -> String {
    base32::encode(base32::Alphabet::RFC4648 { padding: false }, s)
}

pub fn unix_time_now() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is set before the unix epoch")
        .as_secs()
}

pub fn time_step_at(unix_seconds: Timestamp) -> TimeStep {
    unix_seconds / TIME_STEP_SECS
}

pub fn current_time_step() -> TimeStep {
    time_step_at(unix_time_now())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_round_trips_through_encode() {
        let raw = base32_decode("PT5UMQIYF2O4ZEIG").unwrap();
        assert_eq!(base32_encode(&raw), "PT5UMQIYF2O4ZEIG");
    }

    #[test]
    fn decode_rejects_wrong_size() {
        assert_eq!(base32_decode("PT5UMQIY"), Err(TotpAuthError::WrongSecretSize));
        assert_eq!(
            base32_decode("PT5UMQIYF2O4ZEIGPT5UMQIYF2O4ZEIG"),
            Err(TotpAuthError::WrongSecretSize)
        );
    }

    #[test]
    fn decode_rejects_non_alphabet_chars() {
        // '1' and '8' are outside the RFC 4648 base32 alphabet
        assert_eq!(base32_decode("1T5UMQIYF2O4ZEI8"), Err(TotpAuthError::InvalidBase32Encode));
    }

    #[test]
    fn step_truncates_toward_zero() {
        assert_eq!(time_step_at(0), 0);
        assert_eq!(time_step_at(29), 0);
        assert_eq!(time_step_at(30), 1);
        assert_eq!(time_step_at(59), 1);
    }
}
