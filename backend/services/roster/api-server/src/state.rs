// backend/services/roster/api-server/src/state.rs

use std::sync::Arc;
use shared_kernel::clock::Clock;
use shared_kernel::errors::AppResult;

use roster::application::generate_birthday_message::GenerateBirthdayMessageUseCase;
use roster::application::get_member::GetMemberUseCase;
use roster::application::list_members::ListMembersUseCase;
use roster::application::register_member::RegisterMemberUseCase;
use roster::application::send_birthday_email::SendBirthdayEmailUseCase;
use roster::domain::ports::{EmailTransport, MessageGenerator};
use roster::domain::repositories::MemberRepository;
use roster::infrastructure::bootstrap::build_message_generator;
use roster::infrastructure::config::AppConfig;
use roster::infrastructure::email::LogEmailTransport;
use roster::infrastructure::memory::{seed_roster, InMemoryMemberRepository};

/// Use cases partagés entre les handlers
pub struct AppState {
    pub register_member: RegisterMemberUseCase,
    pub get_member: GetMemberUseCase,
    pub list_members: ListMembersUseCase,
    pub generate_message: GenerateBirthdayMessageUseCase,
    pub send_email: SendBirthdayEmailUseCase,
}

impl AppState {
    /// Câblage complet : store en mémoire, générateur choisi par la config, transport simulé
    pub async fn from_config(config: &AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let repo: Arc<dyn MemberRepository> = Arc::new(InMemoryMemberRepository::new());
        if config.seed_roster {
            seed_roster(repo.as_ref(), clock.as_ref()).await?;
        }

        let generator = build_message_generator(config)?;
        let transport: Arc<dyn EmailTransport> = Arc::new(LogEmailTransport::new());

        Ok(Self::new(config, repo, generator, transport, clock))
    }

    pub fn new(
        config: &AppConfig,
        repo: Arc<dyn MemberRepository>,
        generator: Arc<dyn MessageGenerator>,
        transport: Arc<dyn EmailTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            register_member: RegisterMemberUseCase::new(repo.clone(), clock.clone()),
            get_member: GetMemberUseCase::new(repo.clone(), clock.clone()),
            list_members: ListMembersUseCase::new(repo.clone(), clock.clone())
                .with_default_window_days(config.upcoming_window_days),
            generate_message: GenerateBirthdayMessageUseCase::new(
                repo.clone(),
                generator.clone(),
                clock.clone(),
            ),
            send_email: SendBirthdayEmailUseCase::new(repo, generator, transport, clock)
                .with_mail_domain(config.mail_domain.clone()),
        }
    }
}
