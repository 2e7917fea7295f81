#[cfg(test)]
mod tests {
    use promptdash::app::task_type::TaskType;
    use std::str::FromStr;

    #[test]
    fn test_default_instructions_per_category() {
        assert_eq!(
            TaskType::Feature.default_instructions(),
            "You are tasked to implement a feature. Instructions are as follows:\n\n"
        );
        assert_eq!(
            TaskType::Fix.default_instructions(),
            "You are tasked to fix a bug. Instructions are as follows:\n\n"
        );
        assert_eq!(
            TaskType::Refactor.default_instructions(),
            "You are tasked to do a code refactoring. Instructions are as follows:\n\n"
        );
        assert_eq!(
            TaskType::Question.default_instructions(),
            "You are tasked to answer a question:\n\n"
        );
        assert_eq!(
            TaskType::Blog.default_instructions(),
            "You are tasked to write a blog post. Instructions are as follows:\n\n"
        );
        assert_eq!(TaskType::Others.default_instructions(), "\n\n");
    }

    #[test]
    fn test_menu_order() {
        let labels: Vec<String> = TaskType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Feature", "Fix", "Refactor", "Question", "Blog", "Others"]
        );
    }

    #[test]
    fn test_parse_known_labels() {
        for task_type in TaskType::ALL {
            let parsed = TaskType::from_str(&task_type.to_string()).unwrap();
            assert_eq!(parsed, task_type);
        }
    }

    #[test]
    fn test_parse_unknown_label_falls_back_to_feature() {
        for label in ["", "feature", "FIX", "Deploy", "something else"] {
            let parsed = TaskType::from_str(label).unwrap();
            assert_eq!(parsed, TaskType::Feature);
            assert_eq!(
                parsed.default_instructions(),
                "You are tasked to implement a feature. Instructions are as follows:\n\n"
            );
        }
    }
}
