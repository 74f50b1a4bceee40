// crates/roster/src/application/send_birthday_email/send_birthday_email_command.rs

use crate::domain::value_objects::{MemberId, Tone};

#[derive(Debug, Clone)]
pub struct SendBirthdayEmailCommand {
    pub member_id: MemberId,
    pub tone: Tone,
    /// Aperçu uniquement : le transport n'est pas appelé
    pub dry_run: bool,
}
