// crates/roster/src/application/generate_birthday_message/generate_birthday_message_command.rs

use crate::domain::value_objects::{Language, MemberId, Tone};

#[derive(Debug, Clone)]
pub struct GenerateBirthdayMessageCommand {
    pub member_id: MemberId,
    pub tone: Tone,
    /// Déduite du pays du membre si absente
    pub language: Option<Language>,
}
