pub mod mock;
pub mod yesno;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::consts::{ERROR_LABEL, ERROR_MESSAGE};

/// What the magic ball said. Taken verbatim from the remote payload,
/// or synthesized locally when the call fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Answer {
    /// The fallback shown (and recorded) when the endpoint can't be reached.
    pub fn error() -> Self {
        Self {
            answer: ERROR_LABEL.to_string(),
            image: None,
            message: Some(ERROR_MESSAGE.to_string()),
        }
    }

    pub fn kind(&self) -> AnswerKind {
        AnswerKind::of(&self.answer)
    }

    pub fn is_error(&self) -> bool {
        self.kind() == AnswerKind::Error
    }

    /// Image URL, if present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

/// Label classification, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Yes,
    No,
    Maybe,
    Error,
    Other,
}

/// A 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl AnswerKind {
    pub fn of(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "yes" => Self::Yes,
            "no" => Self::No,
            "maybe" => Self::Maybe,
            ERROR_LABEL => Self::Error,
            _ => Self::Other,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Yes => Rgb(0x4C, 0xAF, 0x50),
            Self::No => Rgb(0xF4, 0x43, 0x36),
            Self::Maybe => Rgb(0xFF, 0xEB, 0x3B),
            Self::Error | Self::Other => Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Where answers come from. An HTTP endpoint in production, a script in tests.
///
/// Resolving never fails: any failure collapses into [`Answer::error`].
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn resolve(&self) -> Answer;
}
