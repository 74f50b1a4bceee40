use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::models::OutgoingEmail;
use crate::domain::ports::EmailTransport;

#[derive(Default)]
pub struct EmailTransportStub {
    pub sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl EmailTransportStub {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmailTransport for EmailTransportStub {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
