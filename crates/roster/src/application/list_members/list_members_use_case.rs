// crates/roster/src/application/list_members/list_members_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::application::list_members::ListMembersQuery;
use crate::domain::models::RankedMember;
use crate::domain::repositories::MemberRepository;
use crate::domain::services::{RankingOptions, RosterRanker};

pub struct ListMembersUseCase {
    member_repo: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
    ranker: RosterRanker,
    default_window_days: u32,
}

impl ListMembersUseCase {
    pub fn new(member_repo: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            member_repo,
            clock,
            ranker: RosterRanker::default(),
            default_window_days: RankingOptions::DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_default_window_days(mut self, days: u32) -> Self {
        self.default_window_days = days;
        self
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, query: ListMembersQuery) -> Result<Vec<RankedMember>> {
        let members = self.member_repo.list_all().await?;
        let options = query.ranking_options(self.default_window_days);

        self.ranker.rank(members, self.clock.now(), options)
    }
}
