// crates/roster/src/domain/ports/email_transport.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::models::OutgoingEmail;

/// Transport sortant. N'est jamais appelé en dry-run.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;
}
