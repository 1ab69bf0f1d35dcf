#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was missing, unreadable or not valid UTF-8.
    #[error("input unavailable: {source_name}: {source}")]
    InputUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn unavailable(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Error::InputUnavailable {
            source_name: source_name.into(),
            source,
        }
    }
}
