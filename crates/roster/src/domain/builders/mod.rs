mod member_builder;

pub use member_builder::MemberBuilder;
