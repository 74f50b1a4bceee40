// crates/roster/src/application/list_members/list_members_query.rs

use serde::Deserialize;

use crate::domain::services::RankingOptions;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListMembersQuery {
    pub sort_by_birthday: bool,
    pub upcoming_only: bool,
    /// Fenêtre "à venir" ; la valeur configurée s'applique si absente
    pub window_days: Option<u32>,
}

impl ListMembersQuery {
    pub fn ranking_options(&self, default_window_days: u32) -> RankingOptions {
        RankingOptions {
            sort_by_birthday: self.sort_by_birthday,
            upcoming_only: self.upcoming_only,
            window_days: self.window_days.unwrap_or(default_window_days),
        }
    }
}
