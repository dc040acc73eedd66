#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Document contains no words")]
    EmptyInput,

    #[error("Only .txt files are allowed")]
    UnsupportedFileType(String),

    #[error(transparent)]
    Decode(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Template(#[from] minijinja::Error),
}

impl Error {
    /// HTTP status an upload failure maps to.
    pub const fn status(&self) -> u16 {
        match self {
            Self::UnsupportedFileType(_) => 400,
            _ => 500,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::UnsupportedFileType(_) => self.to_string(),
            _ => format!("Error processing file: {self}"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
