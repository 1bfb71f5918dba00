use crate::utils::AppError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Outbound mail relay. Built once at startup from the SMTP credentials
/// and injected into the handlers that send mail. One attempt per send,
/// no retries; callers decide what a failure means for their flow.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    pub fn new(relay: &str, username: &str, password: &str) -> Result<Self, String> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)
            .map_err(|e| format!("Invalid SMTP relay '{}': {}", relay, e))?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        let from = format!("FitLife <{}>", username)
            .parse()
            .map_err(|e| format!("Invalid sender address '{}': {}", username, e))?;

        Ok(Self { transport, from })
    }

    pub async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), AppError> {
        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|e| AppError::DeliveryFailed(format!("Invalid recipient '{}': {}", to, e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| AppError::DeliveryFailed(format!("Failed to build message: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::DeliveryFailed(e.to_string()))?;

        log::info!("📧 Email sent to {} - '{}'", to, subject);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailer_rejects_bad_sender() {
        let result = Mailer::new("smtp.gmail.com", "not an address", "secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_mailer_builds_with_valid_credentials() {
        let result = Mailer::new("smtp.gmail.com", "team@fitlife.example", "secret");
        assert!(result.is_ok());
    }
}
