// crates/roster/src/infrastructure/email/log_email_transport.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::models::OutgoingEmail;
use crate::domain::ports::EmailTransport;

/// Transport simulé : l'enveloppe est tracée, rien ne sort du processus.
#[derive(Debug, Default, Clone)]
pub struct LogEmailTransport;

impl LogEmailTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailTransport for LogEmailTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            "📧 Email delivered (simulated)"
        );
        Ok(())
    }
}
