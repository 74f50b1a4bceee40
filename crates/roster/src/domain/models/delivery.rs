// crates/roster/src/domain/models/delivery.rs

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    DryRun,
    Sent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryResult {
    pub status: DeliveryStatus,
    pub email: OutgoingEmail,
    pub message: String,
}
