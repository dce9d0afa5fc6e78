use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no such border style: {0}")]
    UnknownStyle(String),

    #[error("could not find cowfile: {0}")]
    TemplateNotFound(String),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
