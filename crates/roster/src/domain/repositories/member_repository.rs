// crates/roster/src/domain/repositories/member_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::{Member, NewMember};
use crate::domain::value_objects::MemberId;

/// Store des membres (collaborateur externe du cœur métier).
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Vérification d'unicité + insertion, de façon atomique.
    /// Collision sur (prénom, nom, pays, ville) -> `DomainError::AlreadyExists`.
    async fn create(&self, member: NewMember) -> Result<Member>;

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>>;

    /// Tous les membres, dans l'ordre d'insertion
    async fn list_all(&self) -> Result<Vec<Member>>;

    async fn exists(&self, member: &NewMember) -> Result<bool>;
}
