//! Confirmation modal state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Store;

/// Lesson reference shown in a modal; pages pass either a display string or
/// a list position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LessonNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for LessonNumber {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for LessonNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for LessonNumber {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Visibility and content of a modal dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_number: Option<LessonNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ModalState {
    /// Visible modal for a lesson.
    pub fn for_lesson(lesson_number: impl Into<LessonNumber>) -> Self {
        Self { visible: true, lesson_number: Some(lesson_number.into()), message: None }
    }

    /// Visible modal carrying a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { visible: true, lesson_number: None, message: Some(message.into()) }
    }
}

impl Store<ModalState> {
    /// Show the modal for a lesson.
    pub fn show_lesson(&self, lesson_number: impl Into<LessonNumber>) {
        self.set(ModalState::for_lesson(lesson_number));
    }

    /// Show the modal with a message.
    pub fn show_message(&self, message: impl Into<String>) {
        self.set(ModalState::with_message(message));
    }

    /// Hide the modal and clear its content.
    pub fn hide(&self) {
        self.set(ModalState::default());
    }

    pub fn is_visible(&self) -> bool {
        self.tx.borrow().visible
    }
}

/// Modal stores shared by the lesson pages.
#[derive(Clone, Debug, Default)]
pub struct ModalStores {
    /// Shown after a successful enrollment.
    pub success: Store<ModalState>,
    /// Shown after a successful cancellation.
    pub cancel: Store<ModalState>,
    /// Shown when a repository call fails; carries the resolved message.
    pub error: Store<ModalState>,
}

impl ModalStores {
    /// Route a repository result to the matching modal.
    pub fn report<T>(&self, target: &Store<ModalState>, lesson_number: impl Into<LessonNumber>, result: &Result<T, String>) {
        match result {
            Ok(_) => target.show_lesson(lesson_number),
            Err(message) => self.error.show_message(message.clone()),
        }
    }

    /// Hide every modal.
    pub fn hide_all(&self) {
        self.success.hide();
        self.cancel.hide();
        self.error.hide();
    }
}
