//! Task categories and their default instruction templates.
//!
//! A [`TaskType`] selects the instructional text that seeds the editor when
//! the user picks a category. The set is closed and defined at build time;
//! anything else parses to the [`TaskType::Feature`] fallback.

use std::fmt;
use std::str::FromStr;

/// The closed set of task categories, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TaskType {
    Feature,
    Fix,
    Refactor,
    Question,
    Blog,
    Others,
}

impl TaskType {
    /// All categories in the order they appear in the selection menu.
    pub const ALL: [TaskType; 6] = [
        TaskType::Feature,
        TaskType::Fix,
        TaskType::Refactor,
        TaskType::Question,
        TaskType::Blog,
        TaskType::Others,
    ];

    /// Default instructional text for this category.
    ///
    /// Each template ends in a blank line so the user can start typing the
    /// task details directly under the directive sentence. "Others" carries
    /// no directive at all.
    pub fn default_instructions(&self) -> &'static str {
        match self {
            TaskType::Feature => {
                "You are tasked to implement a feature. Instructions are as follows:\n\n"
            }
            TaskType::Fix => "You are tasked to fix a bug. Instructions are as follows:\n\n",
            TaskType::Refactor => {
                "You are tasked to do a code refactoring. Instructions are as follows:\n\n"
            }
            TaskType::Question => "You are tasked to answer a question:\n\n",
            TaskType::Blog => {
                "You are tasked to write a blog post. Instructions are as follows:\n\n"
            }
            TaskType::Others => "\n\n",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskType::Feature => write!(f, "Feature"),
            TaskType::Fix => write!(f, "Fix"),
            TaskType::Refactor => write!(f, "Refactor"),
            TaskType::Question => write!(f, "Question"),
            TaskType::Blog => write!(f, "Blog"),
            TaskType::Others => write!(f, "Others"),
        }
    }
}

impl FromStr for TaskType {
    type Err = std::convert::Infallible;

    /// Total over all inputs: unknown labels fall back to `Feature`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Fix" => TaskType::Fix,
            "Refactor" => TaskType::Refactor,
            "Question" => TaskType::Question,
            "Blog" => TaskType::Blog,
            "Others" => TaskType::Others,
            _ => TaskType::Feature,
        })
    }
}
