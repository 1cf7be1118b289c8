//! RFC 6238 code derivation and clock-skew-tolerant verification.

use hmacsha1::hmac_sha1;

use crate::code::AuthCode;
use crate::secret::SharedSecret;
use crate::types::{DEFAULT_CLOCK_SKEW_SECS, TIME_STEP_SECS, TimeStep, Timestamp, TotpAuthError};
use crate::utils::{current_time_step, time_step_at, unix_time_now};

pub struct TotpAuth {}

impl TotpAuth {
    /// Derive the code for one time step: HMAC-SHA1 over the 8-byte
    /// big-endian step counter, dynamically truncated per RFC 4226 and
    /// reduced mod 10^6. Deterministic for a fixed (secret, step) pair.
    ///
    /// Fails only when the secret does not decode as base32; the keyed
    /// hash accepts any key length.
    pub fn get_code(secret: &SharedSecret, step: TimeStep) -> Result<AuthCode, TotpAuthError> {
        let key = secret.decode()?;

        let hash = hmac_sha1(&key, &step.to_be_bytes());
        let offset = (hash[hash.len() - 1] & 0x0F) as usize;
        let mut truncated: [u8; 4] = Default::default();
        truncated.copy_from_slice(&hash[offset..offset + 4]);
        truncated[0] &= 0x7F;

        Ok(AuthCode::from_truncated(u32::from_be_bytes(truncated)))
    }

    /// Derive the code for the current time step.
    pub fn get_current_code(secret: &SharedSecret) -> Result<AuthCode, TotpAuthError> {
        Self::get_code(secret, current_time_step())
    }

    /// Verify a submitted code with the default 600 second tolerance,
    /// i.e. 41 candidate steps spanning 10 minutes either side of now.
    pub fn verify_code(secret: &SharedSecret, code: AuthCode) -> bool {
        Self::verify_code_with_skew(secret, code, DEFAULT_CLOCK_SKEW_SECS)
    }

    /// Verify a submitted code, allowing `clock_skew_secs` of drift either
    /// side of now. Negative skew is clamped to 0 (exact-step check).
    pub fn verify_code_with_skew(
        secret: &SharedSecret,
        code: AuthCode,
        clock_skew_secs: i64,
    ) -> bool {
        Self::verify_code_at(secret, code, clock_skew_secs, unix_time_now())
    }

    /// Verification against an explicit clock, for callers that already
    /// hold a timestamp and for deterministic tests.
    ///
    /// Scans the inclusive step range `[now - variance, now + variance]`
    /// where `variance = skew / 30`, truncating. The comparison is for
    /// membership, so traversal order does not matter. A derivation
    /// failure on any candidate is logged and treated as a non-match;
    /// this never panics and never returns an error to the caller.
    pub fn verify_code_at(
        secret: &SharedSecret,
        code: AuthCode,
        clock_skew_secs: i64,
        now_unix: Timestamp,
    ) -> bool {
        let variance = clock_skew_secs.max(0) as u64 / TIME_STEP_SECS;
        let now_step = time_step_at(now_unix);

        let lower_bound = now_step.saturating_sub(variance);
        let upper_bound = now_step.saturating_add(variance);

        for step in lower_bound..=upper_bound {
            match Self::get_code(secret, step) {
                Ok(candidate) => {
                    if candidate == code {
                        return true;
                    }
                }
                Err(e) => {
                    log::error!("code derivation failed during verification: {:?}", e);
                }
            }
        }
        false
    }
}
