use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("x = {x} is outside the curve domain [-sqrt(3), sqrt(3)]")]
    Domain { x: f64 },

    #[error("Invalid tick delta: {0}")]
    InvalidTickDelta(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
