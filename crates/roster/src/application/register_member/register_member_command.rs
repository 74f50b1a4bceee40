// crates/roster/src/application/register_member/register_member_command.rs

use serde::Deserialize;

/// Saisie brute (transport) : toute la validation se fait dans le use case.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterMemberCommand {
    pub first_name: String,
    pub last_name: String,
    /// "YYYY-MM-DD"
    pub birth_date: String,
    pub country: String,
    pub city: String,
}
