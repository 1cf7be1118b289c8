//! Time-based one-time-passcode generation and verification per RFC 6238,
//! on the default SHA-1 / 30-second / 6-digit profile.
//!
//! Everything here is stateless and reentrant: secrets are value types,
//! derivation is a pure function of (secret, time step), and verification
//! scans a symmetric clock-skew window around now. Persistence of secrets
//! and transport of codes belong to the caller.

pub mod types;
pub mod utils;

pub mod secret;
pub mod code;
pub mod auth;
pub mod enroll;

// re-exports
pub use types::{TotpAuthError, TimeStep, Timestamp};
pub use secret::SharedSecret;
pub use code::AuthCode;
pub use auth::TotpAuth;
pub use enroll::{EnrollmentConfig, UriFormat, enrollment_uri, qr_url, DEFAULT_QR_ENDPOINT, QR_URL_FALLBACK};
