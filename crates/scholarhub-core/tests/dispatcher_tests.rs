//! Command dispatch tests with an in-process backend

use scholarhub_core::{
    fallback_store, Attachment, BackendApi, BackendError, Command, Dispatcher, Event,
    ListingFilter, LoginResponse, ScholarError, Session, SessionStore, SortKey, StatusFilter,
};
use scholarhub_domain::{
    ProfilePatch, Publication, PublicationDraft, PublicationPatch, PublicationStatus,
    Registration, SearchCriteria, User, UserRole,
};
use tempfile::TempDir;

/// Accepts one fixed account and echoes created records back as id 99
#[derive(Default)]
struct FakeBackend;

fn maria() -> User {
    User::new("1", "Dr. María García", "maria.garcia@universidad.edu")
}

impl BackendApi for FakeBackend {
    async fn create_publication(
        &self,
        draft: &PublicationDraft,
        attachment: &Attachment,
        user_id: &str,
    ) -> Result<Option<Publication>, BackendError> {
        if draft.title == "Rejected" {
            return Err(BackendError::Rejected {
                status: 400,
                message: "title already used".to_string(),
            });
        }
        let mut record = Publication::from_draft("99", draft.clone(), chrono::Utc::now());
        record.file_name = Some(attachment.file_name.clone());
        record.user_id = user_id.to_string();
        Ok(Some(record))
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, BackendError> {
        if email == "maria.garcia@universidad.edu" && password == "secret" {
            Ok(LoginResponse {
                access_token: "tok-1".to_string(),
                user: maria(),
            })
        } else {
            Err(BackendError::InvalidCredentials)
        }
    }

    async fn register(&self, registration: &Registration) -> Result<User, BackendError> {
        Ok(User::new("7", registration.name.clone(), registration.email.clone())
            .with_role(registration.role))
    }
}

fn dispatcher(dir: &TempDir) -> Dispatcher<FakeBackend> {
    Dispatcher::new(
        fallback_store(),
        Session::default(),
        SessionStore::new(dir.path().join("session.json")),
        FakeBackend::default(),
    )
}

fn attachment() -> Option<Attachment> {
    Some(Attachment {
        file_name: "paper.pdf".to_string(),
        mime: Some("application/pdf".to_string()),
        bytes: vec![1, 2, 3],
    })
}

async fn signed_in(dir: &TempDir) -> Dispatcher<FakeBackend> {
    let mut d = dispatcher(dir);
    d.handle(Command::Login {
        email: "maria.garcia@universidad.edu".to_string(),
        password: "secret".to_string(),
    })
    .await
    .unwrap();
    d
}

fn validation_fields(err: ScholarError) -> Vec<String> {
    match err {
        ScholarError::Validation(problems) => problems.into_iter().map(|p| p.field).collect(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// === Reads ===

#[tokio::test]
async fn test_search_issues_increasing_tokens() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let criteria = SearchCriteria::new().with_categories(["Inteligencia Artificial"]);

    let first = d.handle(Command::Search(criteria.clone())).await.unwrap();
    let second = d.handle(Command::Search(criteria)).await.unwrap();
    let (Event::SearchResults { token: t1, .. }, Event::SearchResults { token: t2, results }) =
        (first, second)
    else {
        panic!("expected search results");
    };
    assert!(t2 > t1);
    assert!(!d.searches().is_current(t1));
    assert!(d.searches().is_current(t2));
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[tokio::test]
async fn test_listing_filters_then_sorts() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let event = d
        .handle(Command::List {
            filter: ListingFilter::new("", StatusFilter::Only(PublicationStatus::Published)),
            sort: SortKey::Oldest,
        })
        .await
        .unwrap();
    let Event::Listing { results, total } = event else {
        panic!("expected listing");
    };
    assert_eq!(total, 4);
    let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);

    let Event::Listing { results, .. } = d
        .handle(Command::List {
            filter: ListingFilter::new("blockchain", StatusFilter::All),
            sort: SortKey::Recent,
        })
        .await
        .unwrap()
    else {
        panic!("expected listing");
    };
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "4");
}

#[tokio::test]
async fn test_show_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let event = d.handle(Command::Show { id: "42".to_string() }).await.unwrap();
    assert!(matches!(event, Event::NotFound { id } if id == "42"));
    let event = d.handle(Command::Show { id: "2".to_string() }).await.unwrap();
    assert!(matches!(event, Event::Found(p) if p.year == 2024));
}

#[tokio::test]
async fn test_dashboard_requires_user() {
    let dir = TempDir::new().unwrap();
    let mut anonymous = dispatcher(&dir);
    let Event::Dashboard { summary, recent } = anonymous.handle(Command::Dashboard).await.unwrap()
    else {
        panic!("expected dashboard");
    };
    assert_eq!(summary.total, 0);
    assert!(recent.is_empty());

    let mut d = signed_in(&dir).await;
    let Event::Dashboard { summary, recent } = d.handle(Command::Dashboard).await.unwrap() else {
        panic!("expected dashboard");
    };
    assert_eq!(summary.total, 2);
    assert_eq!(summary.published, 2);
    let ids: Vec<&str> = recent.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["3", "1"]);
}

// === Local edits ===

#[tokio::test]
async fn test_local_add_update_delete() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);

    let Event::Added(added) = d
        .handle(Command::AddLocal(PublicationDraft::new("Local", "Draft", 2025)))
        .await
        .unwrap()
    else {
        panic!("expected added");
    };
    assert_eq!(d.store().all()[0].id, added.id);
    assert_eq!(d.store().len(), 5);

    let patch = PublicationPatch {
        status: Some(PublicationStatus::UnderReview),
        ..Default::default()
    };
    let event = d
        .handle(Command::UpdateLocal {
            id: added.id.clone(),
            patch,
        })
        .await
        .unwrap();
    assert!(matches!(event, Event::Updated { .. }));
    assert_eq!(
        d.store().get(&added.id).map(|p| p.status),
        Some(PublicationStatus::UnderReview)
    );

    let event = d
        .handle(Command::DeleteLocal { id: added.id.clone() })
        .await
        .unwrap();
    assert!(matches!(event, Event::Deleted { .. }));
    let event = d.handle(Command::DeleteLocal { id: added.id }).await.unwrap();
    assert!(matches!(event, Event::NotFound { .. }));
    assert_eq!(d.store().len(), 4);
}

// === Auth ===

#[tokio::test]
async fn test_login_persists_session() {
    let dir = TempDir::new().unwrap();
    let d = signed_in(&dir).await;
    assert!(d.session().is_authenticated());

    let restored = SessionStore::new(dir.path().join("session.json"))
        .load()
        .unwrap();
    assert_eq!(restored.token.as_deref(), Some("tok-1"));
    assert_eq!(restored.user.map(|u| u.id), Some("1".to_string()));
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let err = d
        .handle(Command::Login {
            email: "  ".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(validation_fields(err), ["credentials"]);
    assert!(!d.session().is_authenticated());
}

#[tokio::test]
async fn test_login_rejected_keeps_anonymous() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let err = d
        .handle(Command::Login {
            email: "maria.garcia@universidad.edu".to_string(),
            password: "nope".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ScholarError::Backend(BackendError::InvalidCredentials)));
    assert!(d.session().user().is_none());
}

#[tokio::test]
async fn test_register_does_not_sign_in() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let event = d
        .handle(Command::Register(Registration {
            name: "Ana Torres".to_string(),
            email: "ana@uni.edu".to_string(),
            password: "pw".to_string(),
            affiliation: String::new(),
            role: UserRole::Reviewer,
        }))
        .await
        .unwrap();
    assert!(matches!(event, Event::Registered(ref u) if u.role == UserRole::Reviewer));
    assert!(d.session().user().is_some());
    assert!(!d.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_persisted_session() {
    let dir = TempDir::new().unwrap();
    let mut d = signed_in(&dir).await;
    assert!(matches!(d.handle(Command::Logout).await.unwrap(), Event::LoggedOut));
    assert!(!d.session().is_authenticated());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_update_profile() {
    let dir = TempDir::new().unwrap();
    let mut anonymous = dispatcher(&dir);
    assert!(anonymous
        .handle(Command::UpdateProfile(ProfilePatch::default()))
        .await
        .is_err());

    let mut d = signed_in(&dir).await;
    let event = d
        .handle(Command::UpdateProfile(ProfilePatch {
            bio: Some("Investigadora en IA".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert!(matches!(event, Event::ProfileUpdated(ref u) if u.bio.is_some()));
    let restored = SessionStore::new(dir.path().join("session.json"))
        .load()
        .unwrap();
    assert_eq!(
        restored.user.and_then(|u| u.bio).as_deref(),
        Some("Investigadora en IA")
    );
}

// === Create ===

#[tokio::test]
async fn test_create_requires_file_and_user() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let err = d
        .handle(Command::Create {
            draft: PublicationDraft::new("", "A", 2025),
            attachment: None,
        })
        .await
        .unwrap_err();
    assert_eq!(validation_fields(err), ["title", "file", "user"]);
}

#[tokio::test]
async fn test_create_prepends_echoed_record() {
    let dir = TempDir::new().unwrap();
    let mut d = signed_in(&dir).await;
    let event = d
        .handle(Command::Create {
            draft: PublicationDraft::new("New Study", "Findings", 2025),
            attachment: attachment(),
        })
        .await
        .unwrap();
    let Event::Created {
        publication: Some(created),
    } = event
    else {
        panic!("expected created record");
    };
    assert_eq!(created.user_id, "1");
    assert_eq!(created.file_name.as_deref(), Some("paper.pdf"));
    assert_eq!(d.store().all()[0].id, "99");
    assert_eq!(d.store().len(), 5);
}

#[tokio::test]
async fn test_create_rejection_leaves_store() {
    let dir = TempDir::new().unwrap();
    let mut d = signed_in(&dir).await;
    let err = d
        .handle(Command::Create {
            draft: PublicationDraft::new("Rejected", "Findings", 2025),
            attachment: attachment(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "title already used");
    assert_eq!(d.store().len(), 4);
}

// === Comments ===

fn comment(id: &str, content: &str) -> Command {
    Command::AddComment {
        publication_id: id.to_string(),
        content: content.to_string(),
    }
}

async fn thread(d: &mut Dispatcher<FakeBackend>, id: &str) -> Vec<String> {
    let event = d
        .handle(Command::Comments {
            publication_id: id.to_string(),
        })
        .await
        .unwrap();
    match event {
        Event::Comments { comments, .. } => comments.into_iter().map(|c| c.content).collect(),
        other => panic!("expected comments, got {other:?}"),
    }
}

#[tokio::test]
async fn test_comments_newest_first_and_trimmed() {
    let dir = TempDir::new().unwrap();
    let mut d = signed_in(&dir).await;

    let Event::CommentAdded(first) = d.handle(comment("2", "  Clear methodology ")).await.unwrap()
    else {
        panic!("expected comment");
    };
    assert_eq!(first.content, "Clear methodology");
    assert_eq!(first.user_id, "1");
    assert_eq!(first.user.name, "Dr. María García");
    assert_eq!(first.publication_id, "2");

    d.handle(comment("2", "Follow-up question")).await.unwrap();
    assert_eq!(thread(&mut d, "2").await, ["Follow-up question", "Clear methodology"]);
    assert!(thread(&mut d, "1").await.is_empty());
}

#[tokio::test]
async fn test_blank_comment_rejected() {
    let dir = TempDir::new().unwrap();
    let mut d = signed_in(&dir).await;
    let err = d.handle(comment("2", " \t ")).await.unwrap_err();
    assert_eq!(validation_fields(err), ["content"]);
    assert!(thread(&mut d, "2").await.is_empty());
}

#[tokio::test]
async fn test_comment_requires_user_and_publication() {
    let dir = TempDir::new().unwrap();
    let mut d = dispatcher(&dir);
    let err = d.handle(comment("2", "Hello")).await.unwrap_err();
    assert_eq!(validation_fields(err), ["user"]);

    let event = d.handle(comment("404", "Hello")).await.unwrap();
    assert!(matches!(event, Event::NotFound { id } if id == "404"));
}

#[test]
fn test_event_serializes_with_tag() {
    let value = serde_json::to_value(Event::Deleted { id: "3".to_string() }).unwrap();
    assert_eq!(value["event"], "deleted");
    assert_eq!(value["id"], "3");
}
