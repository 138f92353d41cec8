//! Rendering of core events for the terminal

use scholarhub_core::{DashboardSummary, Event};
use scholarhub_domain::{Comment, Publication, User};

/// Prints events as text or JSON
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Status messages go to stderr so stdout stays parseable
    pub fn notice(&self, message: &str) {
        eprintln!("{message}");
    }

    pub fn user(&self, user: &User) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(user)?);
        } else {
            println!("{}", user_line(user));
        }
        Ok(())
    }

    pub fn event(&self, event: &Event) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(event)?);
            return Ok(());
        }
        for line in render(event) {
            println!("{line}");
        }
        Ok(())
    }
}

fn render(event: &Event) -> Vec<String> {
    match event {
        Event::SearchResults { results, .. } => {
            let mut lines = vec![count_line(results.len())];
            lines.extend(results.iter().map(publication_line));
            lines
        }
        Event::Listing { results, total } => {
            let mut lines = vec![format!("{} of {} publications", results.len(), total)];
            lines.extend(results.iter().map(publication_line));
            lines
        }
        Event::Found(p) => publication_detail(p),
        Event::NotFound { id } => vec![format!("No publication with id {id}")],
        Event::Dashboard { summary, recent } => {
            let mut lines = summary_lines(summary);
            if !recent.is_empty() {
                lines.push(String::new());
                lines.push("Recent:".to_string());
                lines.extend(recent.iter().map(publication_line));
            }
            lines
        }
        Event::Added(p) => vec![format!("Added {}", publication_line(p))],
        Event::Updated { id } => vec![format!("Updated {id}")],
        Event::Deleted { id } => vec![format!("Deleted {id}")],
        Event::Created { publication } => match publication {
            Some(p) => vec![format!("Created {}", publication_line(p))],
            None => vec!["Publication submitted".to_string()],
        },
        Event::LoggedIn(user) => vec![format!("Signed in as {}", user_line(user))],
        Event::Registered(user) => vec![
            format!("Registered {}", user_line(user)),
            "Sign in with `scholarhub login` to publish".to_string(),
        ],
        Event::LoggedOut => vec!["Signed out".to_string()],
        Event::ProfileUpdated(user) => vec![format!("Profile updated: {}", user_line(user))],
        Event::CommentAdded(comment) => vec![comment_line(comment)],
        Event::Comments { comments, .. } if comments.is_empty() => {
            vec!["No comments yet".to_string()]
        }
        Event::Comments { comments, .. } => comments.iter().map(comment_line).collect(),
    }
}

fn count_line(n: usize) -> String {
    match n {
        0 => "No publications found".to_string(),
        1 => "1 publication found".to_string(),
        n => format!("{n} publications found"),
    }
}

fn publication_line(p: &Publication) -> String {
    let authors = p.author_names();
    if authors.is_empty() {
        format!("[{}] {} ({})", p.id, p.title, p.year)
    } else {
        format!("[{}] {} ({}) - {}", p.id, p.title, p.year, authors)
    }
}

fn publication_detail(p: &Publication) -> Vec<String> {
    let mut lines = vec![
        p.title.clone(),
        format!("Authors:    {}", p.author_names()),
        format!("Year:       {}", p.year),
        format!("Status:     {}", p.status),
    ];
    if let Some(journal) = &p.journal {
        lines.push(format!("Journal:    {journal}"));
    }
    if let Some(doi) = &p.doi {
        lines.push(format!("DOI:        {doi}"));
    }
    if !p.categories.is_empty() {
        lines.push(format!("Categories: {}", p.categories.join(", ")));
    }
    if !p.keywords.is_empty() {
        lines.push(format!("Keywords:   {}", p.keywords.join(", ")));
    }
    lines.push(String::new());
    lines.push(p.abstract_text.clone());
    lines
}

fn comment_line(comment: &Comment) -> String {
    format!(
        "{}: {} ({})",
        comment.user.display_name(),
        comment.content,
        comment.created_at.format("%Y-%m-%d %H:%M")
    )
}

fn summary_lines(summary: &DashboardSummary) -> Vec<String> {
    vec![
        format!("Total:        {}", summary.total),
        format!("Published:    {}", summary.published),
        format!("Drafts:       {}", summary.drafts),
        format!("Under review: {}", summary.under_review),
    ]
}

fn user_line(user: &User) -> String {
    if user.email.is_empty() {
        format!("{} ({})", user.display_name(), user.role)
    } else {
        format!("{} <{}> ({})", user.display_name(), user.email, user.role)
    }
}
