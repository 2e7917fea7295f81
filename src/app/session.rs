//! Session state and the event transitions that mutate it.
//!
//! The UI owns exactly one [`SessionState`] and funnels every user action
//! through [`SessionState::apply`], so the state machine is testable without
//! an egui harness. Nothing here is persisted; the record dies with the
//! process.

use tracing::debug;

use super::prompt::{assemble_prompt, AttachedFile};
use super::task_type::TaskType;

/// A user action, as seen by the session state machine.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The user picked a task category from the menu.
    SelectTaskType(TaskType),
    /// The user edited the instructions text.
    EditInstructions(String),
    /// A settled intake batch is ready to be committed.
    AttachBatch(Vec<AttachedFile>),
    /// The user removed an attachment by name.
    RemoveFile(String),
    /// The user cleared every attachment at once.
    ClearAttachments,
    /// The user asked for the prompt to be (re)built.
    GeneratePrompt,
}

/// The whole per-session state of the tool.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    /// Selected category; `None` until the user picks one.
    pub task_type: Option<TaskType>,
    /// Free-form instructions, seeded from the category template.
    pub instructions: String,
    /// Attachments in insertion order. Names may repeat.
    pub files: Vec<AttachedFile>,
    /// Output of the last explicit generate action, empty before the first.
    pub generated_prompt: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event to the state.
    ///
    /// Selecting a task type unconditionally reseeds the instructions with
    /// that category's template; no other event ever touches text the user
    /// has typed. Removal deletes every attachment sharing the given name,
    /// since names are not unique.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SelectTaskType(task_type) => {
                debug!("Task type selected: {}", task_type);
                self.task_type = Some(task_type);
                self.instructions = task_type.default_instructions().to_string();
            }
            SessionEvent::EditInstructions(text) => {
                self.instructions = text;
            }
            SessionEvent::AttachBatch(batch) => {
                debug!("Committing intake batch of {} file(s)", batch.len());
                self.files.extend(batch);
            }
            SessionEvent::RemoveFile(name) => {
                let before = self.files.len();
                self.files.retain(|file| file.name != name);
                debug!(
                    "Removed {} attachment(s) named '{}'",
                    before - self.files.len(),
                    name
                );
            }
            SessionEvent::ClearAttachments => {
                debug!("Cleared {} attachment(s)", self.files.len());
                self.files.clear();
            }
            SessionEvent::GeneratePrompt => {
                self.generated_prompt = assemble_prompt(&self.instructions, &self.files);
                debug!(
                    "Generated prompt: {} chars from {} attachment(s)",
                    self.generated_prompt.len(),
                    self.files.len()
                );
            }
        }
    }

    /// True once a generate action has produced output to display.
    pub fn has_prompt(&self) -> bool {
        !self.generated_prompt.is_empty()
    }
}
