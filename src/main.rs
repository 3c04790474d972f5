use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotdump::{cli, config, error, spotify, warning};

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
    /// Spotify user id to save tracks for
    #[clap(required_unless_present = "completions")]
    username: Option<String>,

    /// Output file, or an existing directory with --all_playlists
    #[clap(required_unless_present = "completions")]
    output_path: Option<PathBuf>,

    /// Save the user's saved tracks
    #[clap(long = "use_music_library")]
    use_music_library: bool,

    /// Save the tracks of the user's playlist with this name
    #[clap(long, value_name = "NAME")]
    playlist: Option<String>,

    /// Save every playlist the user owns into the output directory
    #[clap(long = "all_playlists")]
    all_playlists: bool,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let (Some(username), Some(output_path)) = (cli.username, cli.output_path) else {
        error!("Both username and output_path are required");
    };

    let mode = match cli::select_mode(
        cli.use_music_library,
        cli.playlist.as_deref(),
        cli.all_playlists,
        &output_path,
    ) {
        Ok(mode) => mode,
        Err(e) => error!("{}", e),
    };

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let session = match spotify::init_session(&config, &username).await {
        Ok(session) => session,
        Err(e) => {
            warning!("{}", e);
            error!("Did not log in successfully");
        }
    };

    if let Err(e) = cli::run(
        session.catalog(),
        session.user(),
        &mode,
        &output_path,
        config.tracks_limit,
    )
    .await
    {
        error!("{}", e);
    }
}
