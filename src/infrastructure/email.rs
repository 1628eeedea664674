use anyhow::Result;
use tracing::info;

/// Mailer that writes messages to the service log instead of an SMTP
/// relay. Stands in for a real provider in every environment we run.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }

    pub async fn deliver(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(%to, %subject, %body, "email: delivering message");
        Ok(())
    }
}
