mod member;

pub use member::{Member, MemberKey, NewMember};
