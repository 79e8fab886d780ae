use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use cinelog::{
    cli, config, error,
    types::{MovieDraft, MoviePatch, Role, Theme, WatchStatus},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in against the movie API
    Login(LoginOptions),

    /// Clear the stored session
    Logout,

    /// Show the identity behind the stored session
    Whoami,

    /// List roles accepted by the movie API
    Roles,

    /// List the collection
    List(ListOptions),

    /// Show one movie in full
    Show(IdOption),

    /// Add a movie to the collection
    Add(AddOptions),

    /// Update fields of an existing movie
    Update(UpdateOptions),

    /// Remove a movie from the collection
    Remove(IdOption),

    /// Toggle a movie's favorite flag
    Favorite(IdOption),

    /// Aggregate stats over the collection
    Stats,

    /// Show or change the UI theme
    Theme(ThemeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Username to authenticate as
    pub username: String,

    /// Requested role (enforced server-side)
    #[clap(long, value_enum, default_value_t = Role::User)]
    pub role: Role,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only show movies with this watch status
    #[clap(long, value_enum)]
    pub status: Option<WatchStatus>,

    /// Only show movies of this genre
    #[clap(long)]
    pub genre: Option<String>,

    /// Case-insensitive title search
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    #[clap(long)]
    pub title: String,

    #[clap(long)]
    pub director: String,

    /// Release year (1900 up to five years from now)
    #[clap(long)]
    pub year: i32,

    #[clap(long)]
    pub genre: String,

    /// Rating between 1 and 10
    #[clap(long)]
    pub rating: Option<f64>,

    #[clap(long, value_enum, default_value_t = WatchStatus::WantToWatch)]
    pub status: WatchStatus,

    /// Review or notes
    #[clap(long)]
    pub review: Option<String>,

    /// Mark as favorite right away
    #[clap(long)]
    pub favorite: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateOptions {
    /// Id of the movie to update
    pub id: i64,

    #[clap(long)]
    pub title: Option<String>,

    #[clap(long)]
    pub director: Option<String>,

    #[clap(long)]
    pub year: Option<i32>,

    #[clap(long)]
    pub genre: Option<String>,

    #[clap(long)]
    pub rating: Option<f64>,

    #[clap(long, value_enum)]
    pub status: Option<WatchStatus>,

    #[clap(long)]
    pub review: Option<String>,

    /// Set the favorite flag explicitly (true/false)
    #[clap(long)]
    pub favorite: Option<bool>,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Id of the movie
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct ThemeOptions {
    /// Set the theme
    #[clap(long, value_enum)]
    pub set: Option<Theme>,

    /// Flip between light and dark
    #[clap(long)]
    pub toggle: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Login(opt) => cli::login(opt.username, opt.role).await,
        Command::Logout => cli::logout().await,
        Command::Whoami => cli::whoami().await,
        Command::Roles => cli::roles().await,

        Command::List(opt) => cli::list(opt.status, opt.genre, opt.search).await,
        Command::Show(opt) => cli::show(opt.id).await,

        Command::Add(opt) => {
            let draft = MovieDraft {
                title: opt.title,
                director: opt.director,
                year: opt.year,
                genre: opt.genre,
                rating: opt.rating,
                status: opt.status,
                review: opt.review,
                is_favorite: opt.favorite,
            };
            cli::add(draft).await
        }

        Command::Update(opt) => {
            let patch = MoviePatch {
                title: opt.title,
                director: opt.director,
                year: opt.year,
                genre: opt.genre,
                rating: opt.rating,
                status: opt.status,
                review: opt.review,
                is_favorite: opt.favorite,
            };
            cli::update(opt.id, patch).await
        }

        Command::Remove(opt) => cli::remove(opt.id).await,
        Command::Favorite(opt) => cli::favorite(opt.id).await,
        Command::Stats => cli::stats().await,
        Command::Theme(opt) => cli::theme(opt.set, opt.toggle).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
