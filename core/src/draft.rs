//! Local draft for the add screen.
//!
//! # Design
//! The add screen holds one string and nothing else. Submit validates
//! trimmed non-emptiness and reports an outcome value instead of invoking
//! UI callbacks directly; the presentation layer maps the outcome to a
//! blocking alert and, on success, a single navigate-back action. No
//! record is created, stored, or transmitted anywhere — "success" is
//! purely an acknowledgment, and the draft is discarded when the screen
//! goes away.

/// Result of submitting the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft passed validation. Carries the text as typed (untrimmed).
    /// The presentation layer acknowledges and navigates back exactly once.
    Added { title: String },
    /// The draft was empty after trimming. The screen stays put and the
    /// text field is left as-is.
    EmptyInput,
}

impl SubmitOutcome {
    /// The alert text the presentation layer shows for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Added { .. } => "Task added successfully!",
            SubmitOutcome::EmptyInput => "Please enter a task.",
        }
    }
}

/// The add screen's text field state.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    text: String,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft wholesale, as the text field does on every edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Validate and report. Leaves the draft text untouched either way.
    pub fn submit(&self) -> SubmitOutcome {
        if self.text.trim().is_empty() {
            return SubmitOutcome::EmptyInput;
        }
        tracing::info!(title = %self.text, "adding new task");
        SubmitOutcome::Added {
            title: self.text.clone(),
        }
    }
}
