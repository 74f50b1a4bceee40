mod in_memory_member_repository;
mod seed;

pub use in_memory_member_repository::InMemoryMemberRepository;
pub use seed::{SEED_MEMBERS, seed_roster};
