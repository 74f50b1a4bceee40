// crates/roster/src/application/register_member/register_member_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::Entity;
use shared_kernel::errors::Result;

use crate::application::register_member::RegisterMemberCommand;
use crate::domain::entities::{Member, NewMember};
use crate::domain::repositories::MemberRepository;
use crate::domain::value_objects::{BirthDate, City, Country, PersonName};

pub struct RegisterMemberUseCase {
    member_repo: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterMemberUseCase {
    pub fn new(member_repo: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { member_repo, clock }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, command: RegisterMemberCommand) -> Result<Member> {
        // 1. Validation des champs (ordre du formulaire)
        let first_name = PersonName::try_new("first_name", command.first_name)?;
        let last_name = PersonName::try_new("last_name", command.last_name)?;
        let birth_date = BirthDate::parse(&command.birth_date)?;
        let country = Country::try_new(command.country)?;
        let city = City::try_new(command.city)?;

        // 2. Règle d'âge, évaluée à "maintenant"
        let draft = NewMember::builder(first_name, last_name, birth_date, country, city)
            .build(self.clock.now())?;

        // 3. Unicité + insertion atomiques côté store
        let member = self.member_repo.create(draft).await?;

        tracing::info!(member_id = %member.id(), name = %member.full_name(), "🎉 Member registered");
        Ok(member)
    }
}
