// crates/roster/src/application/send_birthday_email/send_birthday_email_use_case.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::Entity;
use shared_kernel::errors::Result;

use crate::application::generate_birthday_message::GenerateBirthdayMessageUseCase;
use crate::application::send_birthday_email::SendBirthdayEmailCommand;
use crate::domain::entities::Member;
use crate::domain::models::{DeliveryResult, DeliveryStatus, OutgoingEmail};
use crate::domain::ports::{EmailTransport, MessageGenerator};
use crate::domain::repositories::MemberRepository;

pub struct SendBirthdayEmailUseCase {
    messages: GenerateBirthdayMessageUseCase,
    transport: Arc<dyn EmailTransport>,
    mail_domain: String,
}

impl SendBirthdayEmailUseCase {
    pub const DEFAULT_MAIL_DOMAIN: &'static str = "datavid.com";

    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        generator: Arc<dyn MessageGenerator>,
        transport: Arc<dyn EmailTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            messages: GenerateBirthdayMessageUseCase::new(member_repo, generator, clock),
            transport,
            mail_domain: Self::DEFAULT_MAIL_DOMAIN.to_string(),
        }
    }

    pub fn with_mail_domain(mut self, domain: impl Into<String>) -> Self {
        self.mail_domain = domain.into();
        self
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, command: SendBirthdayEmailCommand) -> Result<DeliveryResult> {
        let member = self.messages.load_member(command.member_id).await?;
        let message = self.messages.message_for(&member, command.tone, None).await?;

        let email = OutgoingEmail {
            to: self.address_of(&member),
            subject: format!("Happy Birthday, {}!", member.first_name()),
            body: message.text,
            dry_run: command.dry_run,
        };

        if command.dry_run {
            tracing::info!(member_id = %member.id(), to = %email.to, "📝 Dry-run: email not sent");
            return Ok(DeliveryResult {
                status: DeliveryStatus::DryRun,
                email,
                message: "Email NOT sent (dry-run mode).".to_string(),
            });
        }

        self.transport.send(&email).await?;

        tracing::info!(member_id = %member.id(), to = %email.to, "📨 Birthday email sent");
        Ok(DeliveryResult {
            status: DeliveryStatus::Sent,
            email,
            message: "Email sent successfully.".to_string(),
        })
    }

    /// "first.last@domain", en minuscules et sans espaces
    fn address_of(&self, member: &Member) -> String {
        let local = |s: &str| -> String {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect()
        };

        format!(
            "{}.{}@{}",
            local(member.first_name().as_str()),
            local(member.last_name().as_str()),
            self.mail_domain
        )
    }
}
