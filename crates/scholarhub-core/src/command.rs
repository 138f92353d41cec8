//! Command dispatch between the presentation layer and the core.
//!
//! The presentation layer sends a [`Command`]; the [`Dispatcher`] applies it
//! to the store or session (calling the backend when needed) and answers
//! with an [`Event`]. Nothing else mutates the store or the session.

use chrono::{Datelike, Utc};
use scholarhub_domain::{
    validate_criteria, validate_draft, Comment, ProfilePatch, Publication, PublicationDraft,
    PublicationPatch, Registration, SearchCriteria, User, ValidationError,
};
use serde::Serialize;

use crate::comments::CommentBoard;
use crate::dashboard::{dashboard, DashboardSummary};
use crate::error::{Result, ScholarError};
use crate::query::ListingFilter;
use crate::request::{RequestToken, SearchSession};
use crate::session::{Session, SessionStore};
use crate::sort::SortKey;
use crate::sources::{Attachment, BackendApi};
use crate::store::PublicationStore;

#[derive(Clone, Debug)]
pub enum Command {
    /// Search screen submission
    Search(SearchCriteria),
    /// Listing screen: quick filter then sort
    List { filter: ListingFilter, sort: SortKey },
    Show { id: String },
    /// Counts and recent records for the signed-in user
    Dashboard,
    AddLocal(PublicationDraft),
    UpdateLocal { id: String, patch: PublicationPatch },
    DeleteLocal { id: String },
    /// Submit a new publication to the backend
    Create {
        draft: PublicationDraft,
        attachment: Option<Attachment>,
    },
    Login { email: String, password: String },
    Register(Registration),
    Logout,
    UpdateProfile(ProfilePatch),
    /// Comment on a publication as the signed-in user
    AddComment { publication_id: String, content: String },
    Comments { publication_id: String },
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    SearchResults {
        token: RequestToken,
        results: Vec<Publication>,
    },
    Listing {
        results: Vec<Publication>,
        total: usize,
    },
    Found(Publication),
    NotFound { id: String },
    Dashboard {
        summary: DashboardSummary,
        recent: Vec<Publication>,
    },
    Added(Publication),
    Updated { id: String },
    Deleted { id: String },
    /// Backend accepted the publication; the record is present when echoed
    Created { publication: Option<Publication> },
    LoggedIn(User),
    Registered(User),
    LoggedOut,
    ProfileUpdated(User),
    CommentAdded(Comment),
    Comments {
        publication_id: String,
        comments: Vec<Comment>,
    },
}

/// Owns the session's store and auth state
pub struct Dispatcher<B> {
    store: PublicationStore,
    session: Session,
    session_store: SessionStore,
    backend: B,
    searches: SearchSession,
    comments: CommentBoard,
}

impl<B: BackendApi> Dispatcher<B> {
    pub fn new(
        store: PublicationStore,
        session: Session,
        session_store: SessionStore,
        backend: B,
    ) -> Self {
        Self {
            store,
            session,
            session_store,
            backend,
            searches: SearchSession::new(),
            comments: CommentBoard::new(),
        }
    }

    pub fn store(&self) -> &PublicationStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn searches(&self) -> &SearchSession {
        &self.searches
    }

    pub async fn handle(&mut self, command: Command) -> Result<Event> {
        match command {
            Command::Search(criteria) => Ok(self.search(&criteria)),
            Command::List { filter, sort } => Ok(Event::Listing {
                results: self.store.listing(&filter, sort),
                total: self.store.len(),
            }),
            Command::Show { id } => Ok(match self.store.get(&id) {
                Some(p) => Event::Found(p.clone()),
                None => Event::NotFound { id },
            }),
            Command::Dashboard => Ok(self.dashboard()),
            Command::AddLocal(draft) => Ok(Event::Added(self.store.add(draft))),
            Command::UpdateLocal { id, patch } => Ok(if self.store.update(&id, patch) {
                Event::Updated { id }
            } else {
                Event::NotFound { id }
            }),
            Command::DeleteLocal { id } => Ok(if self.store.delete(&id) {
                Event::Deleted { id }
            } else {
                Event::NotFound { id }
            }),
            Command::Create { draft, attachment } => self.create(draft, attachment).await,
            Command::Login { email, password } => self.login(&email, &password).await,
            Command::Register(registration) => self.register(&registration).await,
            Command::Logout => self.logout(),
            Command::UpdateProfile(patch) => self.update_profile(patch),
            Command::AddComment {
                publication_id,
                content,
            } => self.add_comment(publication_id, &content),
            Command::Comments { publication_id } => {
                Ok(if self.store.get(&publication_id).is_some() {
                    Event::Comments {
                        comments: self.comments.thread(&publication_id).to_vec(),
                        publication_id,
                    }
                } else {
                    Event::NotFound { id: publication_id }
                })
            }
        }
    }

    fn search(&mut self, criteria: &SearchCriteria) -> Event {
        for warning in validate_criteria(criteria) {
            tracing::info!(field = %warning.field, "{}", warning.message);
        }
        let token = self.searches.issue();
        let results = self.store.search(criteria);
        tracing::debug!(token = token.value(), hits = results.len(), "search complete");
        Event::SearchResults { token, results }
    }

    fn dashboard(&self) -> Event {
        let (summary, recent) = match self.session.user() {
            Some(user) => dashboard(&self.store, &user.id),
            None => (DashboardSummary::default(), Vec::new()),
        };
        Event::Dashboard { summary, recent }
    }

    async fn create(
        &mut self,
        mut draft: PublicationDraft,
        attachment: Option<Attachment>,
    ) -> Result<Event> {
        let mut problems: Vec<ValidationError> = validate_draft(&draft, Utc::now().year())
            .into_iter()
            .filter(ValidationError::is_error)
            .collect();
        if attachment.is_none() {
            problems.push(ValidationError::error("file", "A document file is required"));
        }
        let user_id = self.session.user().map(|u| u.id.clone());
        if user_id.is_none() {
            problems.push(ValidationError::error("user", "You must be signed in to publish"));
        }
        let (Some(attachment), Some(user_id), true) = (attachment, user_id, problems.is_empty())
        else {
            return Err(ScholarError::Validation(problems));
        };

        draft.user_id = user_id.clone();
        let created = self
            .backend
            .create_publication(&draft, &attachment, &user_id)
            .await?;
        if let Some(p) = &created {
            self.store.insert_front(p.clone());
        }
        Ok(Event::Created {
            publication: created,
        })
    }

    async fn login(&mut self, email: &str, password: &str) -> Result<Event> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ScholarError::invalid(
                "credentials",
                "Email and password are required",
            ));
        }
        let response = self.backend.login(email, password).await?;
        self.session = Session::authenticated(response.user.clone(), response.access_token);
        self.session_store.save(&self.session)?;
        tracing::info!(user = %response.user.id, "signed in");
        Ok(Event::LoggedIn(response.user))
    }

    async fn register(&mut self, registration: &Registration) -> Result<Event> {
        if registration.email.trim().is_empty() || registration.password.is_empty() {
            return Err(ScholarError::invalid(
                "credentials",
                "Email and password are required",
            ));
        }
        let user = self.backend.register(registration).await?;
        self.session = Session::registered(user.clone());
        self.session_store.save(&self.session)?;
        Ok(Event::Registered(user))
    }

    fn logout(&mut self) -> Result<Event> {
        self.session = Session::default();
        self.session_store.clear()?;
        tracing::info!("signed out");
        Ok(Event::LoggedOut)
    }

    fn add_comment(&mut self, publication_id: String, content: &str) -> Result<Event> {
        if self.store.get(&publication_id).is_none() {
            return Ok(Event::NotFound { id: publication_id });
        }
        let Some(user) = self.session.user().cloned() else {
            return Err(ScholarError::invalid("user", "You must be signed in to comment"));
        };
        match self.comments.add(&publication_id, user, content) {
            Some(comment) => Ok(Event::CommentAdded(comment)),
            None => Err(ScholarError::invalid("content", "Comment must not be empty")),
        }
    }

    fn update_profile(&mut self, patch: ProfilePatch) -> Result<Event> {
        if !self.session.update_profile(patch) {
            return Err(ScholarError::invalid("user", "No user is signed in"));
        }
        self.session_store.save(&self.session)?;
        match self.session.user() {
            Some(user) => Ok(Event::ProfileUpdated(user.clone())),
            None => Err(ScholarError::invalid("user", "No user is signed in")),
        }
    }
}
