use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Capacity reached: the store holds at most {0} reviews")]
    CapacityReached(usize),

    #[error("Invalid rating {0}: expected a number between 1 and 10")]
    InvalidRating(i32),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
