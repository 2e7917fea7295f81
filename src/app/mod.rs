//! Core application modules for PromptDash.
//!
//! This module contains the business logic and data models for prompt
//! assembly, plus the egui user interface that drives them.
//!
//! # Module Organization
//!
//! ## Prompt Core
//! - [`task_type`] - Task categories and their default instruction templates
//! - [`prompt`] - Attached files and the prompt assembler
//! - [`session`] - Per-session state and its event transitions
//!
//! ## File Handling
//! - [`file_intake`] - Batched asynchronous reading of dropped/selected files
//!
//! ## UI
//! - [`dashui`] - Complete user interface implementation
//!
//! # Architecture
//!
//! The application is a single-window egui app with one UI thread. User
//! actions become [`session::SessionEvent`] values applied to a single owned
//! [`session::SessionState`]; the only background work is file reading in
//! [`file_intake`], which reports back over a channel polled each frame.

pub mod file_intake;
pub mod prompt;
pub mod session;
pub mod task_type;

pub mod dashui;

pub use dashui::app::PromptDashApp;
