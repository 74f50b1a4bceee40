mod get_member_query;
mod get_member_use_case;

pub use get_member_query::GetMemberQuery;
pub use get_member_use_case::GetMemberUseCase;
