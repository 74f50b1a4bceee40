// crates/roster/src/application/get_member/get_member_query.rs

use crate::domain::value_objects::MemberId;

#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub member_id: MemberId,
}
