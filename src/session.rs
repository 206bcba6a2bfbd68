//! The single controller: owns all interactive state, runs submissions,
//! and projects itself into a [`View`] for rendering.

use std::sync::Arc;

use thiserror::Error;

use crate::history::{Filter, HistoryEntry, HistoryStore};
use crate::oracle::{Answer, Oracle, Rgb};
use crate::validator::{HELPER_TEXT, ValidationError, validate};

pub const SUBMIT_LABEL: &str = "Preguntar 🔮";
pub const SUBMITTING_LABEL: &str = "Consultando...";
pub const LOADING_TEXT: &str = "Consultando la bola mágica...";

/// `Idle → Submitting → Answered | Errored`.
///
/// `Answered` and `Errored` are idle too: they only keep the last answer on
/// display, and the next question leaves them exactly as it leaves `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Answered(Answer),
    Errored(Answer),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a question is already being answered")]
    Busy,
}

pub struct Session {
    oracle: Arc<dyn Oracle>,
    history: HistoryStore,
    phase: Phase,
    feedback: Option<ValidationError>,
    history_visible: bool,
    filter: Filter,
    asked: usize,
}

impl Session {
    pub fn new(oracle: Arc<dyn Oracle>, history: HistoryStore) -> Self {
        Self {
            oracle,
            history,
            phase: Phase::Idle,
            feedback: None,
            history_visible: false,
            filter: Filter::All,
            asked: 0,
        }
    }

    /// Validate, ask, record. At most one question is in flight; a second
    /// submission while one is outstanding is refused, not queued.
    ///
    /// Dropping the returned future mid-call leaves the session in
    /// `Submitting` for good, and every later call returns
    /// [`SubmitError::Busy`]. Calls can't be cancelled, so callers either
    /// await it to completion or abandon the session.
    pub async fn submit(&mut self, raw: &str) -> Result<Answer, SubmitError> {
        if self.phase == Phase::Submitting {
            return Err(SubmitError::Busy);
        }

        if let Err(e) = validate(raw) {
            tracing::debug!(reason = ?e, "question rejected");
            self.feedback = Some(e);
            self.phase = Phase::Idle;
            return Err(e.into());
        }

        let question = raw.trim();
        self.feedback = None;
        self.phase = Phase::Submitting;

        let answer = self.oracle.resolve().await;
        self.asked += 1;

        if let Err(e) = self.history.record(question, &answer.answer) {
            tracing::warn!(error = %e, "history not persisted");
        }

        self.phase = if answer.is_error() {
            Phase::Errored(answer.clone())
        } else {
            Phase::Answered(answer.clone())
        };
        Ok(answer)
    }

    pub fn show_history(&mut self) {
        self.history_visible = true;
    }

    pub fn hide_history(&mut self) {
        self.history_visible = false;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_visible(&self) -> bool {
        self.history_visible
    }

    /// Questions sent to the oracle since the session started.
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// The answer currently on display, if any.
    pub fn answer(&self) -> Option<&Answer> {
        match &self.phase {
            Phase::Answered(answer) | Phase::Errored(answer) => Some(answer),
            Phase::Idle | Phase::Submitting => None,
        }
    }

    /// Project the current state into what should be on screen.
    pub fn view(&self) -> View {
        let loading = self.phase == Phase::Submitting;

        let history = self
            .history_visible
            .then(|| HistoryView::of(&self.history, self.filter));

        View {
            helper: self
                .feedback
                .map(|e| e.to_string())
                .unwrap_or_else(|| HELPER_TEXT.to_string()),
            input_error: self.feedback.is_some(),
            submit_label: if loading { SUBMITTING_LABEL } else { SUBMIT_LABEL },
            submit_enabled: !loading,
            loading,
            result: self.answer().map(ResultView::from),
            history,
        }
    }
}

/// Everything the terminal needs to draw, independent of how it draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub helper: String,
    pub input_error: bool,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub history: Option<HistoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub label: String,
    pub color: Rgb,
    pub image: Option<String>,
    pub message: Option<String>,
}

impl From<&Answer> for ResultView {
    fn from(answer: &Answer) -> Self {
        Self {
            label: answer.answer.to_uppercase(),
            color: answer.kind().color(),
            image: answer.image_url().map(str::to_string),
            message: answer.message.clone().filter(|m| !m.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    pub filter: Filter,
    pub counts: [(Filter, usize); 4],
    pub entries: Vec<HistoryEntry>,
}

impl HistoryView {
    /// Snapshot of `history` under `filter`, with tallies for every filter.
    pub fn of(history: &HistoryStore, filter: Filter) -> Self {
        Self {
            filter,
            counts: Filter::ALL.map(|f| (f, history.count(f))),
            entries: history.filtered(filter).cloned().collect(),
        }
    }
}
