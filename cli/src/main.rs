mod cli;
mod output;
mod session;
mod transport;

use std::process::ExitCode;

use clap::Parser;
use portfolio_core::{
    categories, filter_by_category, parse_tags, ApiError, CategoryFilter, FormError, Project,
    ProjectForm, ProjectUpdate,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, PatchArgs, ProjectArgs};
use session::{GallerySource, Session, SessionError};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// 2 when the server could not be reached at all, 1 otherwise.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Session(SessionError::Transport(_)) => 2,
            _ => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = Session::new(&cli.server);
    match run(&session, cli.command, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                CliError::Session(SessionError::Api(ApiError::Validation(detail))) => {
                    eprint!("{}", output::render_validation(detail));
                }
                CliError::Session(SessionError::Api(ApiError::NotFound)) => {
                    eprintln!("error: project not found");
                }
                other => eprintln!("error: {other}"),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portfolio={level},portfolio_core={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(session: &Session, command: Command, json: bool) -> Result<(), CliError> {
    match command {
        Command::Health => {
            let health = session.health()?;
            if json {
                output::print_json(&health)?;
            } else {
                println!("{}: {}", session.server(), health.status);
            }
        }
        Command::List { category } => {
            let listed = session.list()?;
            let filter = category.as_deref().map_or(CategoryFilter::All, CategoryFilter::parse);
            let shown = filter_by_category(&listed.projects, &filter);
            if json {
                output::print_json(&shown)?;
            } else {
                print!("{}", output::render_projects(shown));
            }
        }
        Command::Get { id } => {
            let project = session.get(id)?;
            if json {
                output::print_json(&project)?;
            } else {
                print!("{}", output::render_project(&project));
            }
        }
        Command::Create(args) => {
            let input = project_form(args).into_create()?;
            let project = session.create(&input)?;
            tracing::info!(id = project.id, "project created");
            if json {
                output::print_json(&project)?;
            } else {
                println!("created project #{}", project.id);
            }
        }
        Command::Update { id, patch } => {
            let patch = project_patch(patch);
            if patch.is_empty() {
                tracing::warn!(id, "no fields given, project will be unchanged");
            }
            let project = session.update(id, &patch)?;
            if json {
                output::print_json(&project)?;
            } else {
                print!("{}", output::render_project(&project));
            }
        }
        Command::Edit { id, changes } => {
            let current = session.get(id)?;
            let patch = edit_form(&current, changes).into_update()?;
            let project = session.update(id, &patch)?;
            tracing::info!(id, "project edited");
            if json {
                output::print_json(&project)?;
            } else {
                print!("{}", output::render_project(&project));
            }
        }
        Command::Delete { id } => {
            session.delete(id)?;
            if !json {
                println!("deleted project #{id}");
            }
        }
        Command::Init => {
            let seeded = session.initialize()?;
            if json {
                output::print_json(&seeded)?;
            } else {
                println!("{} projects in store", seeded.projects.len());
            }
        }
        Command::Categories => {
            let listed = session.list()?;
            let names = categories(&listed.projects);
            if json {
                output::print_json(&names)?;
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
        Command::Gallery { category } => {
            let gallery = session.gallery();
            let filter = category.as_deref().map_or(CategoryFilter::All, CategoryFilter::parse);
            let shown = filter_by_category(&gallery.projects, &filter);
            if json {
                output::print_json(&shown)?;
            } else {
                if gallery.source == GallerySource::Fallback {
                    eprintln!("using sample projects data");
                }
                let mut tabs = vec!["All".to_string()];
                tabs.extend(categories(&gallery.projects));
                println!("categories: {}", tabs.join(" | "));
                print!("{}", output::render_projects(shown));
            }
        }
    }
    Ok(())
}

fn project_form(args: ProjectArgs) -> ProjectForm {
    ProjectForm {
        title: args.title,
        description: args.description,
        category: args.category,
        image_url: args.image_url,
        tags_input: args.tags,
    }
}

fn project_patch(args: PatchArgs) -> ProjectUpdate {
    ProjectUpdate {
        title: args.title,
        description: args.description,
        category: args.category,
        image_url: args.image_url,
        tags: args.tags.as_deref().map(parse_tags),
    }
}

/// Pre-fill the editor from the stored project and overlay the given fields.
fn edit_form(current: &Project, changes: PatchArgs) -> ProjectForm {
    let mut form = ProjectForm::from_project(current);
    if let Some(title) = changes.title {
        form.title = title;
    }
    if let Some(description) = changes.description {
        form.description = description;
    }
    if let Some(category) = changes.category {
        form.category = category;
    }
    if let Some(image_url) = changes.image_url {
        form.image_url = image_url;
    }
    if let Some(tags) = changes.tags {
        form.tags_input = tags;
    }
    form
}
