#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    FromUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Asset(#[from] brushwork_assets::Error),

    #[error("host integration unavailable, highlighting disabled: {0}")]
    Host(String),
}
