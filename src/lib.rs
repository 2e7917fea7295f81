//! PromptDash - AI Prompt Builder
//!
//! PromptDash is a single-window desktop tool for assembling prompts to paste
//! into an external AI chat tool. The user picks a task category, edits the
//! auto-populated instructions, attaches local files by drag-and-drop or a
//! built-in picker, and the tool concatenates everything into one formatted
//! text block with a fixed output-format directive section and a code-context
//! section listing each file in a fenced block.
//!
//! # Architecture Overview
//!
//! - **Prompt Core** ([`app::task_type`], [`app::prompt`], [`app::session`]):
//!   pure template selection, prompt assembly, and a single owned session
//!   state driven by explicit events. All of it is testable without a UI.
//! - **File Intake** ([`app::file_intake`]): batched asynchronous file
//!   reading. Each drop is one batch, read concurrently in the background
//!   and committed atomically once every read has settled.
//! - **UI Layer** ([`app::dashui`]): egui-based desktop interface with a
//!   menu bar, file picker, help window, and clipboard export.
//!
//! Session state is deliberately transient: nothing but the color theme
//! survives an application restart.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::PromptDashApp;
