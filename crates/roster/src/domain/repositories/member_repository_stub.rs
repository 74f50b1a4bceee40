use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Member, NewMember};
use crate::domain::repositories::MemberRepository;
use crate::domain::value_objects::MemberId;
use crate::infrastructure::memory::InMemoryMemberRepository;

/// Store en mémoire avec injection d'erreur
#[derive(Default)]
pub struct MemberRepositoryStub {
    pub inner: InMemoryMemberRepository,
    /// Permet de simuler une erreur retournée par n'importe quelle méthode
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl MemberRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MemberRepositoryStub {
    async fn create(&self, member: NewMember) -> Result<Member> {
        self.check_error()?;
        self.inner.create(member).await
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>> {
        self.check_error()?;
        self.inner.find_by_id(id).await
    }

    async fn list_all(&self) -> Result<Vec<Member>> {
        self.check_error()?;
        self.inner.list_all().await
    }

    async fn exists(&self, member: &NewMember) -> Result<bool> {
        self.check_error()?;
        self.inner.exists(member).await
    }
}
