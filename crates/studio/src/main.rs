//! `vibeshift-studio`: run one generation from the command line and print
//! the Director transcript and the resulting timeline.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vibeshift_studio::{format_time, HttpBackend, Role, StudioError, StudioSession};

#[derive(Parser, Debug)]
#[command(name = "vibeshift-studio")]
#[command(about = "Generate an AI music video from song lyrics")]
#[command(version)]
struct Args {
    /// Lyrics text (use --lyrics-file for longer songs)
    #[arg(short, long, conflicts_with = "lyrics_file")]
    lyrics: Option<String>,

    /// Read lyrics from a file
    #[arg(short = 'f', long)]
    lyrics_file: Option<PathBuf>,

    /// Public URL of the song, used for lip-sync
    #[arg(short, long)]
    audio_url: Option<String>,

    /// Base URL of the VibeShift API
    #[arg(long, env = "VIBESHIFT_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Owner recorded on the created project
    #[arg(long, env = "VIBESHIFT_USER_ID")]
    user_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), StudioError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibeshift_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let lyrics = match (&args.lyrics, &args.lyrics_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let backend = HttpBackend::new(reqwest::Client::new(), &args.api_url);
    let mut session = StudioSession::new(backend);
    if let Some(user_id) = args.user_id {
        session = session.with_user(user_id);
    }
    if let Some(url) = args.audio_url {
        let name = url.rsplit('/').next().unwrap_or(url.as_str()).to_string();
        session.upload_audio(name, url);
    }
    session.set_lyrics(lyrics);

    let result = session.generate().await;

    for message in session.messages() {
        let speaker = match message.role {
            Role::User => "You",
            Role::Assistant => "Director",
        };
        println!("{speaker}: {}", message.content);
    }

    if !session.timeline().is_empty() {
        println!();
        println!("Timeline:");
        for clip in session.timeline() {
            println!(
                "  {} - {}  {:<5}  {}",
                format_time(f64::from(clip.start_secs)),
                format_time(f64::from(clip.start_secs + clip.duration_secs)),
                clip.kind.as_str(),
                clip.url
            );
        }
    }

    result.map(|_| ())
}
