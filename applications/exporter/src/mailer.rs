/// SMTP mail dispatcher
use crate::config::SmtpSettings;
use async_trait::async_trait;
use chorus_service::{MailDispatcher, MailError};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Hands export payloads to an SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| MailError::Dispatch(e.to_string()))?
            .port(settings.port);

        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = settings
            .from_address
            .parse::<Mailbox>()
            .map_err(|e| MailError::Dispatch(format!("invalid from address: {e}")))?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl MailDispatcher for SmtpMailer {
    async fn send(&self, to: &str, body: &str) -> Result<(), MailError> {
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| MailError::Dispatch(format!("invalid recipient {to}: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your playlist export")
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailError::Dispatch(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Dispatch(e.to_string()))
    }
}
