// crates/roster/src/application/get_member/get_member_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::get_member::GetMemberQuery;
use crate::domain::entities::Member;
use crate::domain::models::RankedMember;
use crate::domain::repositories::MemberRepository;
use crate::domain::services::BirthdayClock;

pub struct GetMemberUseCase {
    member_repo: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
    birthdays: BirthdayClock,
}

impl GetMemberUseCase {
    pub fn new(member_repo: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            member_repo,
            clock,
            birthdays: BirthdayClock::default(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, query: GetMemberQuery) -> Result<RankedMember> {
        let member: Member = self
            .member_repo
            .find_by_id(&query.member_id)
            .await?
            .ok_or_not_found(query.member_id)?;

        let birthday = self.birthdays.compute_for(&member, self.clock.now())?;
        Ok(RankedMember::new(member, birthday))
    }
}
