//! Subcommand handlers: translate CLI input into core commands

use std::error::Error;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use scholarhub_core::export::{export_file_name, summary_text};
use scholarhub_core::{
    acquire, Attachment, BackendClient, Command, Dispatcher, Event, ListingFilter,
    PublicationStore, ScholarConfig, SessionStore, StoreOrigin,
};
use scholarhub_domain::{ProfilePatch, PublicationDraft, Registration, SearchCriteria};

use crate::args::{Cli, CliCommand, ConfigAction};
use crate::output::Output;

type CliResult = Result<(), Box<dyn Error>>;

pub async fn run(cli: Cli, config: ScholarConfig) -> CliResult {
    let output = Output::new(cli.json);

    if let CliCommand::Config { action } = &cli.command {
        return config_command(action, cli.config.as_deref(), &config, &output);
    }

    let backend = BackendClient::new(&config.backend)?;
    let store = if cli.command.needs_store() {
        acquire(&backend).await
    } else {
        PublicationStore::default()
    };
    if store.origin() == StoreOrigin::Fallback {
        output.notice(&format!(
            "Backend at {} unavailable, showing built-in sample publications",
            backend.base_url()
        ));
    }

    let session_store = SessionStore::resolve(config.session.path.as_deref())?;
    let session = session_store.load()?;
    let mut dispatcher = Dispatcher::new(store, session, session_store, backend);

    match cli.command {
        CliCommand::Whoami => {
            match dispatcher.session().user() {
                Some(user) => output.user(user)?,
                None => output.notice("Not signed in"),
            }
            Ok(())
        }
        CliCommand::Export { id, format, output: path } => {
            let event = dispatcher.handle(Command::Show { id }).await?;
            let publication = match event {
                Event::Found(p) => p,
                other => return output.event(&other),
            };
            let path =
                path.unwrap_or_else(|| PathBuf::from(export_file_name(&publication, format)));
            std::fs::write(&path, summary_text(&publication))?;
            tracing::info!(path = %path.display(), "exported summary");
            output.notice(&format!("Wrote {}", path.display()));
            Ok(())
        }
        mut command => {
            if let Some(slot) = command.password_slot() {
                eprint!("Password: ");
                *slot = Some(read_password(&mut io::stdin().lock())?);
            }
            let command = to_core_command(command)?;
            let event = dispatcher.handle(command).await?;
            output.event(&event)
        }
    }
}

/// First line of input without its line ending
fn read_password(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Map a subcommand onto the core command it stands for
fn to_core_command(command: CliCommand) -> Result<Command, Box<dyn Error>> {
    let command = match command {
        CliCommand::Search {
            query,
            author,
            from,
            to,
            categories,
            keywords,
        } => {
            let mut criteria = SearchCriteria {
                query,
                author,
                year_from: from,
                year_to: to,
                ..Default::default()
            };
            for category in &categories {
                criteria.add_category(category);
            }
            for keyword in &keywords {
                criteria.add_keyword(keyword);
            }
            Command::Search(criteria)
        }
        CliCommand::List { text, status, sort } => Command::List {
            filter: ListingFilter::new(text, status),
            sort,
        },
        CliCommand::Show { id } => Command::Show { id },
        CliCommand::Dashboard => Command::Dashboard,
        CliCommand::Create {
            title,
            abstract_text,
            year,
            content,
            doi,
            journal,
            keywords,
            categories,
            status,
            file,
        } => {
            let mut draft = PublicationDraft::new(title, abstract_text, year);
            draft.content = content;
            draft.doi = doi;
            draft.journal = journal;
            draft.status = status;
            for keyword in &keywords {
                draft.add_keyword(keyword);
            }
            for category in &categories {
                draft.add_category(category);
            }
            let attachment = file.as_deref().map(Attachment::from_path).transpose()?;
            Command::Create { draft, attachment }
        }
        CliCommand::Login { email, password } => Command::Login {
            email,
            password: password.unwrap_or_default(),
        },
        CliCommand::Register {
            name,
            email,
            password,
            affiliation,
            role,
        } => Command::Register(Registration {
            name,
            email,
            password: password.unwrap_or_default(),
            affiliation,
            role,
        }),
        CliCommand::Logout => Command::Logout,
        CliCommand::Comment { id, text } => Command::AddComment {
            publication_id: id,
            content: text,
        },
        CliCommand::Profile {
            name,
            affiliation,
            bio,
            role,
        } => Command::UpdateProfile(ProfilePatch {
            name,
            affiliation,
            bio,
            role,
            ..Default::default()
        }),
        CliCommand::Whoami | CliCommand::Export { .. } | CliCommand::Config { .. } => {
            return Err("command is handled by the CLI itself".into());
        }
    };
    Ok(command)
}

fn config_command(
    action: &ConfigAction,
    explicit: Option<&Path>,
    config: &ScholarConfig,
    output: &Output,
) -> CliResult {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(ScholarConfig::default_path);
    match action {
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Path => match path {
            Some(p) => println!("{}", p.display()),
            None => output.notice("No config directory available on this platform"),
        },
        ConfigAction::Init => {
            let Some(path) = path else {
                return Err("no config directory available on this platform".into());
            };
            if path.exists() {
                output.notice(&format!("{} already exists", path.display()));
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, ScholarConfig::default().to_toml()?)?;
            output.notice(&format!("Wrote {}", path.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn core(argv: &[&str]) -> Command {
        to_core_command(Cli::parse_from(argv).command).unwrap()
    }

    #[test]
    fn test_search_builds_trimmed_criteria() {
        let Command::Search(criteria) = core(&[
            "scholarhub", "search", "-k", " blockchain ", "-k", "blockchain", "-c", "Medicina",
        ]) else {
            panic!("expected search");
        };
        assert_eq!(criteria.keywords, Some(vec!["blockchain".to_string()]));
        assert_eq!(criteria.categories, Some(vec!["Medicina".to_string()]));
        assert!(criteria.query.is_none());
    }

    #[test]
    fn test_create_without_file_has_no_attachment() {
        let Command::Create { draft, attachment } = core(&[
            "scholarhub", "create", "--title", "T", "--abstract", "A", "--year", "2024",
        ]) else {
            panic!("expected create");
        };
        assert_eq!(draft.title, "T");
        assert_eq!(draft.year, 2024);
        assert!(attachment.is_none());
    }

    #[test]
    fn test_read_password_strips_line_ending() {
        let mut input = io::Cursor::new("s3cret pass\r\nignored\n");
        assert_eq!(read_password(&mut input).unwrap(), "s3cret pass");
        assert_eq!(read_password(&mut io::Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn test_login_password_from_flag() {
        let Command::Login { email, password } =
            core(&["scholarhub", "login", "maria@uni.edu", "--password", "secret"])
        else {
            panic!("expected login");
        };
        assert_eq!(email, "maria@uni.edu");
        assert_eq!(password, "secret");
    }

    #[test]
    fn test_comment_maps_to_add_comment() {
        let Command::AddComment {
            publication_id,
            content,
        } = core(&["scholarhub", "comment", "2", "Nice work"])
        else {
            panic!("expected comment");
        };
        assert_eq!(publication_id, "2");
        assert_eq!(content, "Nice work");
    }

    #[test]
    fn test_cli_only_commands_are_not_mapped() {
        assert!(to_core_command(Cli::parse_from(["scholarhub", "whoami"]).command).is_err());
    }
}
