mod member_repository;

pub use member_repository::MemberRepository;

#[cfg(test)]
mod member_repository_stub;

#[cfg(test)]
pub use member_repository_stub::MemberRepositoryStub;
