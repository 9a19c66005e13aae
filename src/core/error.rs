/// Errors produced by core `goexpose` operations.
#[derive(Debug, thiserror::Error)]
pub enum ExposeError {
    #[error(
        "passed empty GOPATH!\nYou must pass a valid GOPATH environment variable or use --gopath to specify the Go environment to work with."
    )]
    EmptyGopath,

    #[error("path \"{0}\" does not exist!")]
    PathNotFound(String),

    #[error("path to code: \"{0}\"")]
    PathStat(#[source] std::io::Error),

    #[error("\"{0}\" is not a directory!")]
    NotADirectory(String),

    #[error("specify correct project name explicitly!")]
    InvalidProjectName,

    #[error("project name (\"{0}\") must not be an absolute path!")]
    AbsoluteProjectName(String),

    #[error("\"{0}\" already exists in GOPATH.")]
    AlreadyExposed(String),

    #[error("failed to read config: {0}")]
    ConfigRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{0}")]
    Resolve(#[source] std::io::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ExposeError {
    /// Process exit code for this error: `1` for runtime failures during
    /// link creation, `2` for usage, validation, and configuration errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AlreadyExposed(_) | Self::Io(_) => 1,
            _ => 2,
        }
    }
}
