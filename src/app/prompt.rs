//! Prompt assembly.
//!
//! [`assemble_prompt`] concatenates the current instructions with every
//! attached file into the final text block the user pastes into an AI chat
//! tool. The function is pure and total: any combination of empty
//! instructions and empty file list still yields a well-formed prompt.

/// One attached file: display name plus full text content.
///
/// Names are taken verbatim from the filesystem and are not deduplicated;
/// two attachments may share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub content: String,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Fixed directives appended after the instructions, telling the downstream
/// assistant how to shape its output.
const OUTPUT_FORMAT_DIRECTIVES: &str = "\
Instructions for the output format:
- Output code without descriptions, unless it is important.
- Minimize prose, comments and empty lines.
- Only show the relevant code that needs to be modified. Use comments to represent the parts that are not modified.
- Make it easy to copy and paste.
- Consider other possibilities to achieve the result, do not be limited by the prompt.
";

/// Build the full prompt from the instructions and the ordered attachments.
///
/// Layout, in order: the instructions and a blank line, the output-format
/// directive block and a blank line, a `Code Context:` header, then one
/// `File: {name}` line plus a fenced block per attachment. File content is
/// embedded verbatim; a file that itself contains a triple-backtick fence
/// will break the fencing when rendered downstream.
pub fn assemble_prompt(instructions: &str, files: &[AttachedFile]) -> String {
    let mut prompt = String::new();

    prompt.push_str(instructions);
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT_DIRECTIVES);
    prompt.push('\n');
    prompt.push_str("Code Context:\n");

    for file in files {
        prompt.push_str(&format!("File: {}\n", file.name));
        prompt.push_str(&format!("```\n{}\n```\n\n", file.content));
    }

    prompt
}
