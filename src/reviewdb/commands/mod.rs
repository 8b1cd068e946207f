use crate::config::ReviewConfig;
use crate::model::Review;

pub mod add;
pub mod config;
pub mod list;
pub mod load;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_reviews: Vec<Review>,
    pub listed_reviews: Vec<Review>,
    pub loaded: usize,
    pub config: Option<ReviewConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.affected_reviews = reviews;
        self
    }

    pub fn with_listed_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.listed_reviews = reviews;
        self
    }

    pub fn with_config(mut self, config: ReviewConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command reported at least one message at `level`.
    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
