#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::{TimeZone, Utc};
    use shared_kernel::clock::FixedClock;
    use shared_kernel::domain::entities::Entity;
    use shared_kernel::errors::DomainError;

    use crate::application::register_member::{RegisterMemberCommand, RegisterMemberUseCase};
    use crate::application::send_birthday_email::{SendBirthdayEmailCommand, SendBirthdayEmailUseCase};
    use crate::domain::models::DeliveryStatus;
    use crate::domain::ports::{EmailTransportStub, MessageGeneratorStub};
    use crate::domain::repositories::MemberRepositoryStub;
    use crate::domain::value_objects::{MemberId, Tone};
    use crate::infrastructure::memory::seed_roster;

    struct Fixture {
        use_case: SendBirthdayEmailUseCase,
        repo: Arc<MemberRepositoryStub>,
        clock: Arc<FixedClock>,
        transport: Arc<EmailTransportStub>,
        generator: Arc<MessageGeneratorStub>,
    }

    async fn setup() -> Fixture {
        let repo = Arc::new(MemberRepositoryStub::new());
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()));
        seed_roster(repo.as_ref(), clock.as_ref()).await.unwrap();

        let transport = Arc::new(EmailTransportStub::new());
        let generator = Arc::new(MessageGeneratorStub::new());
        let use_case = SendBirthdayEmailUseCase::new(
            repo.clone(),
            generator.clone(),
            transport.clone(),
            clock.clone(),
        );

        Fixture { use_case, repo, clock, transport, generator }
    }

    fn command(id: i64, dry_run: bool) -> SendBirthdayEmailCommand {
        SendBirthdayEmailCommand {
            member_id: MemberId::new_unchecked(id),
            tone: Tone::Friendly,
            dry_run,
        }
    }

    // --- CAS 1 : DRY-RUN ---

    #[tokio::test]
    async fn test_dry_run_never_calls_transport() {
        let f = setup().await;

        let result = f.use_case.execute(command(2, true)).await.unwrap();

        assert_eq!(result.status, DeliveryStatus::DryRun);
        assert_eq!(result.email.to, "emma.johnson@datavid.com");
        assert_eq!(result.email.subject, "Happy Birthday, Emma!");
        assert_eq!(result.email.body, "Hi Emma!");
        assert!(result.email.dry_run);
        assert!(f.transport.sent.lock().unwrap().is_empty());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "dry_run");
    }

    // --- CAS 2 : ENVOI ---

    #[tokio::test]
    async fn test_send_calls_transport_once() {
        let f = setup().await;
        let use_case = f.use_case.with_mail_domain("example.org");

        let result = use_case.execute(command(1, false)).await.unwrap();

        assert_eq!(result.status, DeliveryStatus::Sent);
        let sent = f.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "john.smith@example.org");
        assert!(!sent[0].dry_run);
    }

    #[tokio::test]
    async fn test_address_strips_spaces_and_lowercases() {
        let f = setup().await;
        let register = RegisterMemberUseCase::new(f.repo.clone(), f.clock.clone());
        let member = register
            .execute(RegisterMemberCommand {
                first_name: "Mary Ann".into(),
                last_name: "Van Dyke".into(),
                birth_date: "1980-06-01".into(),
                country: "Australia".into(),
                city: "Sydney".into(),
            })
            .await
            .unwrap();

        let result = f
            .use_case
            .execute(SendBirthdayEmailCommand {
                member_id: *member.id(),
                tone: Tone::Formal,
                dry_run: true,
            })
            .await
            .unwrap();

        assert_eq!(result.email.to, "maryann.vandyke@datavid.com");
        assert_eq!(f.generator.calls.lock().unwrap()[0].2, Tone::Formal);
    }

    // --- CAS 3 : ERREURS ---

    #[tokio::test]
    async fn test_unknown_member_is_not_found() {
        let f = setup().await;

        let result = f.use_case.execute(command(77, true)).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_transport_failure_is_propagated() {
        let f = setup().await;
        *f.transport.error_to_return.lock().unwrap() =
            Some(DomainError::Infrastructure("smtp unreachable".into()));

        let result = f.use_case.execute(command(1, false)).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
