//! Desktop user interface implementation for PromptDash.
//!
//! This module provides the egui-based single-window interface for building
//! AI prompts: a task-type selector, an instructions editor, a drop zone and
//! file picker for attachments, and the generated-prompt view with clipboard
//! export.
//!
//! # UI Architecture
//!
//! - [`app::PromptDashApp`] owns the session state and drives everything
//!   from the per-frame `update` loop; user actions are dispatched as
//!   [`crate::app::session::SessionEvent`] values.
//! - [`file_picker::FilePicker`] is a fuzzy-search directory browser used
//!   for click-to-browse attachment; OS drag-and-drop is handled directly
//!   from egui's raw input.
//! - [`help_window::HelpWindow`] shows shortcuts and build info (F1).
//! - [`menu`] builds the top menu bar and reports the chosen action.
//!
//! Intake results arrive through [`crate::app::file_intake::FileIntake`],
//! polled once per frame, so all state mutation stays on the UI thread.

pub mod app;
pub mod file_picker;
pub mod help_window;
pub mod menu;

pub use app::PromptDashApp;
