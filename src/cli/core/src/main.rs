/* src/cli/core/src/main.rs */

mod auth;
mod config;
mod context;
mod draft;
mod edit;
mod logging;
mod preview;
mod records;
mod save;
mod session;
#[cfg(test)]
mod testing;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use blockpage_engine::{BlockKind, component_for, resolve};
use clap::{Parser, Subcommand};

use context::Project;
use draft::DEFAULT_DRAFT;
use edit::DraftEdit;

#[derive(Parser)]
#[command(name = "blockpage", about = "Block-based page builder for the content API")]
struct Cli {
  /// Path to blockpage.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List block types with their endpoints and renderers
  Kinds,
  /// Sign in and store the session token
  Login {
    #[arg(short, long)]
    email: String,
    /// Prompted for when omitted
    #[arg(short, long)]
    password: Option<String>,
  },
  /// Remove the stored session
  Logout,
  /// List the records a block type can be bound to
  Options {
    kind: BlockKind,
    /// Label locale (defaults to editor.locale)
    #[arg(short, long)]
    locale: Option<String>,
  },
  /// List languages available for pages
  Languages,
  /// List existing pages (parent page candidates)
  Pages,
  /// Create a record with just a title
  Create {
    kind: BlockKind,
    title: String,
    /// Bind the new record to this block index of the draft
    #[arg(short, long)]
    bind: Option<usize>,
    #[arg(short, long, default_value = DEFAULT_DRAFT)]
    draft: PathBuf,
  },
  /// Edit or inspect a page draft
  Draft {
    #[arg(short, long, global = true, default_value = DEFAULT_DRAFT)]
    file: PathBuf,
    #[command(subcommand)]
    action: DraftCommand,
  },
  /// Render the draft's blocks against live records
  Preview {
    #[arg(short, long, default_value = DEFAULT_DRAFT)]
    draft: PathBuf,
    /// Also print the render props as JSON
    #[arg(long)]
    json: bool,
  },
  /// Build the page document from a draft
  Save {
    #[arg(short, long, default_value = DEFAULT_DRAFT)]
    draft: PathBuf,
    /// Output file (defaults to <slug>.json next to blockpage.toml)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// POST the document to the content API
    #[arg(long)]
    submit: bool,
  },
}

#[derive(Subcommand)]
enum DraftCommand {
  /// Append a block, or insert it at an index
  Add {
    kind: BlockKind,
    #[arg(long)]
    at: Option<usize>,
  },
  /// Remove the block at an index
  Remove { index: usize },
  /// Move a block from one index to another
  Move { from: usize, to: usize },
  /// Bind a block to a record id (0 unbinds)
  Bind { index: usize, record: u64 },
  /// Set a block's width in twelfths (1-12)
  Width { index: usize, columns: u8 },
  /// Show the draft and what a save would submit
  Show,
}

impl DraftCommand {
  /// `None` for the read-only `show`.
  fn into_edit(self) -> Option<DraftEdit> {
    let edit = match self {
      DraftCommand::Add { kind, at } => DraftEdit::Add { kind, at },
      DraftCommand::Remove { index } => DraftEdit::Remove { index },
      DraftCommand::Move { from, to } => DraftEdit::Move { from, to },
      DraftCommand::Bind { index, record } => DraftEdit::Bind { index, record },
      DraftCommand::Width { index, columns } => DraftEdit::Width { index, columns },
      DraftCommand::Show => return None,
    };
    Some(edit)
  }
}

fn print_kinds() {
  ui::banner("kinds");
  for (index, kind) in BlockKind::ALL.into_iter().enumerate() {
    let endpoint = resolve(kind).unwrap_or("-");
    let component = component_for(kind).unwrap_or("-");
    let placement = if kind.is_singleton() { "toggle" } else { "list" };
    ui::block_row(index, kind.as_str(), placement, &format!("{endpoint}  {component}"));
  }
}

/// Draft commands work without a config; the language id falls back to 1.
/// A config that exists but fails to load is still an error.
fn default_language_id(explicit: Option<PathBuf>) -> Result<u64> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let project = Project::load_optional(explicit, &cwd)?;
  Ok(project.map_or(1, |p| p.config.editor.language_id))
}

async fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Command::Kinds => print_kinds(),
    Command::Login { email, password } => {
      let project = Project::load(cli.config)?;
      auth::login(&project, email, password).await?;
    }
    Command::Logout => auth::logout(&Project::load(cli.config)?)?,
    Command::Options { kind, locale } => {
      let project = Project::load(cli.config)?;
      records::list_options(&project, kind, locale.as_deref()).await?;
    }
    Command::Languages => records::list_system(&Project::load(cli.config)?, "languages").await?,
    Command::Pages => records::list_system(&Project::load(cli.config)?, "pages").await?,
    Command::Create { kind, title, bind, draft } => {
      let project = Project::load(cli.config)?;
      records::create(&project, kind, &title, bind.map(|i| (draft.as_path(), i))).await?;
    }
    Command::Draft { file, action } => match action.into_edit() {
      Some(edit) => edit::apply(&file, edit)?,
      None => edit::show(&file, default_language_id(cli.config)?)?,
    },
    Command::Preview { draft, json } => {
      let project = Project::load(cli.config)?;
      preview::run(&project, &draft, json).await?;
    }
    Command::Save { draft, out, submit } => {
      let project = Project::load(cli.config)?;
      save::run(&project, &draft, out, submit).await?;
    }
  }
  Ok(())
}

#[tokio::main]
async fn main() {
  logging::init();
  let cli = Cli::parse();
  if let Err(err) = run(cli).await {
    ui::fail(&format!("{err:#}"));
    std::process::exit(1);
  }
}
