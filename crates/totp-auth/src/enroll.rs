//! Enrollment URI construction and the hand-off URL for an external
//! QR-code renderer.

use serde::{Serialize, Deserialize};
use url::Url;

use crate::secret::SharedSecret;
use crate::types::TotpAuthError;

/// Chart endpoint the rendered QR is fetched from; the percent-encoded
/// otpauth URI is appended as the final query value.
pub const DEFAULT_QR_ENDPOINT: &str =
    "https://chart.googleapis.com/chart?chs=200x200&chld=M%7C0&cht=qr&chl=";

/// Returned instead of a QR link when the configured endpoint is unusable.
/// Deliberately not a network location, so a broken config cannot send
/// enrollment secrets anywhere.
pub const QR_URL_FALLBACK: &str = "about:blank";

/// Shape of the otpauth URI handed to authenticator apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UriFormat {
    /// Standard key-URI form: `otpauth://totp/<user>@<host>?secret=<S>&issuer=<host>`.
    #[default]
    Canonical,
    /// Pre-standard form with `&` in place of the query separator:
    /// `otpauth://totp/<user>@<host>&secret=<S>`. Only for devices already
    /// enrolled under it; most apps will not parse this.
    Legacy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    pub qr_endpoint: String,
    pub format: UriFormat,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            format: UriFormat::default(),
        }
    }
}

/// Build the otpauth URI an authenticator app scans at enrollment.
pub fn enrollment_uri(
    secret: &SharedSecret,
    user: &str,
    host: &str,
    format: UriFormat,
) -> String {
    match format {
        UriFormat::Canonical => format!(
            "otpauth://totp/{}@{}?secret={}&issuer={}",
            user,
            host,
            secret.as_str(),
            host
        ),
        UriFormat::Legacy => format!(
            "otpauth://totp/{}@{}&secret={}",
            user,
            host,
            secret.as_str()
        ),
    }
}

fn build_qr_url(
    config: &EnrollmentConfig,
    secret: &SharedSecret,
    user: &str,
    host: &str,
) -> Result<String, TotpAuthError> {
    Url::parse(&config.qr_endpoint).map_err(|_| TotpAuthError::BadEndpointUrl)?;

    let uri = enrollment_uri(secret, user, host, config.format);
    Ok(format!("{}{}", config.qr_endpoint, urlencoding::encode(&uri)))
}

/// Full URL for the external QR renderer. Loss of the QR link is non-fatal
/// to enrollment (the secret text can still be typed in), so an unusable
/// endpoint is logged and collapses to [`QR_URL_FALLBACK`] instead of
/// surfacing an error.
pub fn qr_url(
    config: &EnrollmentConfig,
    secret: &SharedSecret,
    user: &str,
    host: &str,
) -> String {
    match build_qr_url(config, secret, user, host) {
        Ok(url) => url,
        Err(e) => {
            log::error!(
                "failed to build QR render URL from endpoint {:?}: {:?}",
                config.qr_endpoint,
                e
            );
            QR_URL_FALLBACK.to_string()
        }
    }
}
