// crates/roster/src/application/generate_birthday_message/generate_birthday_message_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::{Entity, EntityOptionExt};
use shared_kernel::errors::Result;

use crate::application::generate_birthday_message::GenerateBirthdayMessageCommand;
use crate::domain::entities::Member;
use crate::domain::models::{GeneratedMessage, GenerationRequest};
use crate::domain::ports::MessageGenerator;
use crate::domain::repositories::MemberRepository;
use crate::domain::services::BirthdayClock;
use crate::domain::value_objects::{Language, MemberId, Tone};

pub struct GenerateBirthdayMessageUseCase {
    member_repo: Arc<dyn MemberRepository>,
    generator: Arc<dyn MessageGenerator>,
    clock: Arc<dyn Clock>,
    birthdays: BirthdayClock,
}

impl GenerateBirthdayMessageUseCase {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        generator: Arc<dyn MessageGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            member_repo,
            generator,
            clock,
            birthdays: BirthdayClock::default(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, command: GenerateBirthdayMessageCommand) -> Result<GeneratedMessage> {
        let member = self.load_member(command.member_id).await?;
        self.message_for(&member, command.tone, command.language).await
    }

    pub(crate) async fn load_member(&self, member_id: MemberId) -> Result<Member> {
        self.member_repo
            .find_by_id(&member_id)
            .await?
            .ok_or_not_found(member_id)
    }

    /// Génère le message pour un membre déjà chargé
    pub(crate) async fn message_for(
        &self,
        member: &Member,
        tone: Tone,
        language: Option<Language>,
    ) -> Result<GeneratedMessage> {
        // L'âge est celui du jour local du membre
        let birthday = self.birthdays.compute_for(member, self.clock.now())?;
        let language = language.unwrap_or_else(|| Language::for_country(member.country().as_str()));

        let request = GenerationRequest {
            member,
            age_years: birthday.age_years,
            tone,
            language,
        };

        let message = match self.generator.generate(&request).await {
            Ok(message) => message,
            Err(e) => {
                // Pas de repli sur les gabarits : l'échec remonte tel quel
                if e.is_generation_failure() {
                    tracing::warn!(member_id = %member.id(), error = %e, "⚠️ Message generation failed");
                }
                return Err(e);
            }
        };

        tracing::info!(
            member_id = %member.id(),
            model = %message.explanation.model,
            tone = %tone,
            "💌 Birthday message generated"
        );
        Ok(message)
    }
}
