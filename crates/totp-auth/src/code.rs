use core::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::types::{CODE_DIGITS, CODE_MODULUS, TotpAuthError};

/// A 6-digit one-time code.
///
/// The identity of a code is its numeric value: leading zeros are not
/// significant, so `"000123"` and `"123"` parse to the same code. Callers
/// that need the form users see should render through [`Display`] or
/// [`AuthCode::digits`], which zero-pad to 6 digits.
///
/// [`Display`]: core::fmt::Display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCode(u32);

impl AuthCode {
    pub fn new(value: u32) -> Result<Self, TotpAuthError> {
        if value >= CODE_MODULUS {
            return Err(TotpAuthError::BadCode);
        }
        Ok(Self(value))
    }

    /// Invariant upheld by the derivation: the truncated value is already
    /// reduced mod 10^6.
    pub(crate) fn from_truncated(value: u32) -> Self {
        Self(value % CODE_MODULUS)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Zero-padded 6-digit rendering.
    pub fn digits(&self) -> String {
        format!("{:0>6}", self.0)
    }
}

impl fmt::Display for AuthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>6}", self.0)
    }
}

impl FromStr for AuthCode {
    type Err = TotpAuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > CODE_DIGITS as usize {
            return Err(TotpAuthError::BadCode);
        }
        let value: u32 = s.parse().map_err(|_| TotpAuthError::BadCode)?;
        Self::new(value)
    }
}
