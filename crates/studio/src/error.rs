/// Errors surfaced by the studio client.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Transport failure talking to the API.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Generation was requested with blank lyrics.
    #[error("Please add lyrics first")]
    MissingLyrics,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
