// crates/roster/src/infrastructure/memory/in_memory_member_repository.rs

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use shared_kernel::domain::entities::Entity;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{Member, MemberKey, NewMember};
use crate::domain::repositories::MemberRepository;
use crate::domain::value_objects::MemberId;

#[derive(Default)]
struct RosterState {
    /// Ordre d'insertion
    members: Vec<Member>,
    keys: HashSet<MemberKey>,
    last_id: i64,
}

/// Store en mémoire. Un seul verrou couvre la vérification d'unicité et
/// l'insertion ; il n'est jamais tenu à travers un `.await`.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    state: Mutex<RosterState>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, RosterState>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Infrastructure("Member store lock poisoned".into()))
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create(&self, member: NewMember) -> Result<Member> {
        let key = member.uniqueness_key();
        let mut state = self.lock()?;

        if state.keys.contains(&key) {
            tracing::warn!(member = %key, "⚠️ Duplicate member rejected");
            return Err(DomainError::AlreadyExists {
                entity: "Member",
                field: "name_and_location",
                value: key.to_string(),
            });
        }

        state.last_id += 1;
        let member = member.into_member(MemberId::new_unchecked(state.last_id));

        state.keys.insert(key);
        state.members.push(member.clone());

        Ok(member)
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>> {
        let state = self.lock()?;
        Ok(state.members.iter().find(|m| m.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>> {
        Ok(self.lock()?.members.clone())
    }

    async fn exists(&self, member: &NewMember) -> Result<bool> {
        Ok(self.lock()?.keys.contains(&member.uniqueness_key()))
    }
}
