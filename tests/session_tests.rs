#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use promptdash::app::prompt::AttachedFile;
    use promptdash::app::session::{SessionEvent, SessionState};
    use promptdash::app::task_type::TaskType;

    #[test]
    fn test_initial_state() {
        let session = SessionState::new();
        assert_eq!(session.task_type, None);
        assert_eq!(session.instructions, "");
        assert!(session.files.is_empty());
        assert!(!session.has_prompt());
    }

    #[test]
    fn test_select_task_type_seeds_instructions() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectTaskType(TaskType::Fix));

        assert_eq!(session.task_type, Some(TaskType::Fix));
        assert_eq!(
            session.instructions,
            "You are tasked to fix a bug. Instructions are as follows:\n\n"
        );
    }

    #[test]
    fn test_reselect_overwrites_edited_instructions() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectTaskType(TaskType::Fix));
        session.apply(SessionEvent::EditInstructions(
            "My own words entirely.".to_string(),
        ));
        session.apply(SessionEvent::SelectTaskType(TaskType::Blog));

        assert_eq!(
            session.instructions,
            "You are tasked to write a blog post. Instructions are as follows:\n\n"
        );
    }

    #[test]
    fn test_only_selection_reseeds_instructions() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectTaskType(TaskType::Question));
        session.apply(SessionEvent::EditInstructions("edited".to_string()));

        session.apply(SessionEvent::AttachBatch(vec![AttachedFile::new(
            "a", "1",
        )]));
        session.apply(SessionEvent::GeneratePrompt);
        session.apply(SessionEvent::RemoveFile("a".to_string()));

        assert_eq!(session.instructions, "edited");
    }

    #[test]
    fn test_batches_append_in_order() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::AttachBatch(vec![
            AttachedFile::new("a", "1"),
            AttachedFile::new("b", "2"),
        ]));
        session.apply(SessionEvent::AttachBatch(vec![AttachedFile::new(
            "c", "3",
        )]));

        let names: Vec<&str> = session.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_by_name_removes_all_matches() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::AttachBatch(vec![
            AttachedFile::new("dup.txt", "one"),
            AttachedFile::new("keep.txt", "two"),
            AttachedFile::new("dup.txt", "three"),
        ]));

        session.apply(SessionEvent::RemoveFile("dup.txt".to_string()));

        assert_eq!(session.files.len(), 1);
        assert_eq!(session.files[0].name, "keep.txt");
    }

    #[test]
    fn test_clear_attachments_empties_files_only() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectTaskType(TaskType::Refactor));
        session.apply(SessionEvent::EditInstructions("my notes".to_string()));
        session.apply(SessionEvent::AttachBatch(vec![
            AttachedFile::new("a.rs", "1"),
            AttachedFile::new("b.rs", "2"),
        ]));
        session.apply(SessionEvent::GeneratePrompt);
        let prompt = session.generated_prompt.clone();

        session.apply(SessionEvent::ClearAttachments);

        assert!(session.files.is_empty());
        assert_eq!(session.instructions, "my notes");
        assert_eq!(session.task_type, Some(TaskType::Refactor));
        // The stored prompt is untouched until the next generate action.
        assert_eq!(session.generated_prompt, prompt);
    }

    #[test]
    fn test_prompt_regenerated_only_on_request() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectTaskType(TaskType::Feature));
        session.apply(SessionEvent::GeneratePrompt);
        let first = session.generated_prompt.clone();

        // Mutating state does not touch the stored prompt.
        session.apply(SessionEvent::AttachBatch(vec![AttachedFile::new(
            "late.rs", "x",
        )]));
        assert_eq!(session.generated_prompt, first);

        session.apply(SessionEvent::GeneratePrompt);
        assert_ne!(session.generated_prompt, first);
        assert!(session.generated_prompt.contains("File: late.rs"));
    }

    #[test]
    fn test_fix_scenario() {
        // Select "Fix", attach one file, generate.
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectTaskType(TaskType::Fix));
        assert_eq!(
            session.instructions,
            "You are tasked to fix a bug. Instructions are as follows:\n\n"
        );

        session.apply(SessionEvent::AttachBatch(vec![AttachedFile::new(
            "a.txt", "hello",
        )]));
        session.apply(SessionEvent::GeneratePrompt);

        assert!(session
            .generated_prompt
            .contains("File: a.txt\n```\nhello\n```\n\n"));
    }

    #[test]
    fn test_others_scenario_with_zero_files() {
        let mut session = SessionState::new();
        session.apply(SessionEvent::SelectTaskType(TaskType::Others));
        assert_eq!(session.instructions, "\n\n");

        session.apply(SessionEvent::GeneratePrompt);

        assert!(session
            .generated_prompt
            .contains("Instructions for the output format:"));
        assert!(session.generated_prompt.ends_with("Code Context:\n"));
    }
}
