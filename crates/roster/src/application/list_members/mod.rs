mod list_members_query;
mod list_members_use_case;

pub use list_members_query::ListMembersQuery;
pub use list_members_use_case::ListMembersUseCase;
