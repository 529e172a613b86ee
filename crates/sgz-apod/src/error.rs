use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApodError {
    #[error("APOD request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("APOD service responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("no image entry found after {attempts} attempts")]
    NoImage { attempts: u32 },
}
