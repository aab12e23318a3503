use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Manage the projects shown on the portfolio site")]
pub struct Cli {
    /// Projects server base URL
    #[arg(long, env = "PORTFOLIO_SERVER", default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// Print raw JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that the server is up
    Health,
    /// List stored projects
    List {
        /// Only show this category ("All" shows everything)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one project
    Get {
        /// Project id
        id: i64,
    },
    /// Add a project
    Create(ProjectArgs),
    /// Change some fields of a project
    Update {
        /// Project id
        id: i64,

        #[command(flatten)]
        patch: PatchArgs,
    },
    /// Rewrite a project through the editor: every field is resubmitted
    /// and all of them must end up non-empty
    Edit {
        /// Project id
        id: i64,

        #[command(flatten)]
        changes: PatchArgs,
    },
    /// Remove a project
    Delete {
        /// Project id
        id: i64,
    },
    /// Seed an empty store with the sample projects
    Init,
    /// List the categories in use
    Categories,
    /// Show the public gallery, seeding or falling back to samples as needed
    Gallery {
        /// Only show this category ("All" shows everything)
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Args)]
pub struct ProjectArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub image_url: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

#[derive(Args)]
pub struct PatchArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,

    /// Comma-separated tags; an empty string clears them
    #[arg(long)]
    pub tags: Option<String>,
}
