use anyhow::{Error, Result, anyhow};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Provider credential, derived once at startup and immutable afterwards.
///
/// The raw key embeds two UUIDs at fixed offsets from its end: the service
/// identifier at characters [-73, -37) and the signing secret at [-36, 0).
#[derive(Clone, Debug)]
pub struct NotifyApiKey {
    service_id: Uuid,
    mac: HmacSha256,
}

impl NotifyApiKey {
    /// Splits the raw key into its service id and signing secret. A
    /// malformed key is a configuration error that must abort startup; it
    /// is never surfaced per-request.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let chars: Vec<char> = raw.chars().collect();

        let service_id = Uuid::parse_str(&slice_from_end(&chars, 73, 37))
            .map_err(|_| anyhow!("Service ID is not a valid uuid"))?;

        let secret_key = Uuid::parse_str(&slice_from_end(&chars, 36, 0))
            .map_err(|_| anyhow!("API key is not a valid uuid"))?;

        let mac = HmacSha256::new_from_slice(secret_key.to_string().as_bytes())
            .map_err(|_| anyhow!("API key is not a valid uuid"))?;

        Ok(Self { service_id, mac })
    }

    pub fn service_id(&self) -> Uuid {
        self.service_id
    }

    /// Builds the short-lived HS256 bearer token for one provider call:
    /// issuer is the service id, issued-at is now. No expiry claim; the
    /// token is rebuilt per invocation.
    pub fn bearer_token(&self) -> String {
        let header = serde_json::json!({"typ": "JWT", "alg": "HS256"});
        let claims = serde_json::json!({
            "iss": self.service_id.to_string(),
            "iat": Utc::now().timestamp(),
        });

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header.to_string()),
            URL_SAFE_NO_PAD.encode(claims.to_string()),
        );

        let mut mac = self.mac.clone();
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{signing_input}.{signature}")
    }
}

/// Character slice [len - start, len - end), saturating at the front of the
/// string so short keys produce truncated slices that fail UUID parsing
/// instead of panicking.
fn slice_from_end(chars: &[char], start: usize, end: usize) -> String {
    let from = chars.len().saturating_sub(start);
    let to = chars.len().saturating_sub(end);
    chars[from..to].iter().collect()
}
