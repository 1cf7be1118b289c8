use serde::{Serialize, Deserialize};

/// Raw entropy per shared secret, in bytes.
pub const SECRET_BYTES: usize = 10;
/// Length of the base32 text form of a shared secret. 10 bytes is 80 bits,
/// which base32 encodes to exactly 16 characters with no padding.
pub const SECRET_CHARS: usize = 16;

pub const CODE_DIGITS: u32 = 6;
/// Codes live in [0, 999_999].
pub const CODE_MODULUS: u32 = 1_000_000;

/// RFC 6238 time-step size in seconds.
pub const TIME_STEP_SECS: u64 = 30;
/// Default verification tolerance: 10 minutes either side of now.
pub const DEFAULT_CLOCK_SKEW_SECS: i64 = 600;

pub type Timestamp = u64;
/// Counter value `floor(unix_seconds / 30)`, derived fresh on every call.
pub type TimeStep = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotpAuthError {
    /// Secret text is not exactly [`SECRET_CHARS`] characters.
    WrongSecretSize,
    /// Secret text contains characters outside the RFC 4648 alphabet.
    InvalidBase32Encode,
    /// Submitted code text is not a decimal number of at most 6 digits.
    BadCode,
    /// QR renderer endpoint does not parse as a URL.
    BadEndpointUrl,
}
