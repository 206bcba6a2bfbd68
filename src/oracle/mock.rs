use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Answer, Oracle};

/// A scripted oracle for tests. Returns pre-defined answers in order,
/// then [`Answer::error`] once the script runs out.
pub struct MockOracle {
    answers: Vec<Answer>,
    index: AtomicUsize,
}

impl MockOracle {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            index: AtomicUsize::new(0),
        }
    }

    /// Convenience: script plain labels with no image.
    pub fn labels(labels: &[&str]) -> Self {
        Self::new(
            labels
                .iter()
                .map(|label| Answer {
                    answer: label.to_string(),
                    image: None,
                    message: None,
                })
                .collect(),
        )
    }

    /// How many times [`Oracle::resolve`] has been called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn resolve(&self) -> Answer {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.answers.get(i).cloned().unwrap_or_else(Answer::error)
    }
}
