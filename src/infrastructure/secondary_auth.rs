use anyhow::Result;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

/// Minimal client for the external auth provider built on reqwest.
///
/// The local users table is the source of truth; this client only mirrors
/// accounts so sessions issued by the provider resolve to the same identity.
pub struct AuthProviderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthProviderClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    pub async fn upsert_user(&self, user_id: Uuid, email: &str) -> Result<()> {
        let body = json!({
            "id": user_id,
            "email": email,
        });

        let resp = self
            .http
            .post(format!("{}/admin/users", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = match resp.text().await {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => "<empty response body>".to_string(),
                Err(err) => format!("<failed to read response body: {err}>"),
            };

            error!(
                status = %status,
                response_body = %body,
                "auth provider user upsert failed"
            );

            anyhow::bail!("auth provider upsert failed for {} (status {})", email, status);
        }

        Ok(())
    }
}
