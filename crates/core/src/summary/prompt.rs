//! Prompt construction

use crate::task::Task;

const INSTRUCTION: &str = "Summarize these todos:";

/// Build the summarization prompt, one bullet per task in the given order.
pub fn build_prompt(tasks: &[Task]) -> String {
    let mut prompt = String::from(INSTRUCTION);
    for task in tasks {
        prompt.push_str("\n- ");
        prompt.push_str(&task.text);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    #[test]
    fn test_prompt_lists_tasks_in_order() {
        let tasks = vec![
            Task::new(TaskId::Int(1), "Buy milk"),
            Task::new(TaskId::Int(2), "Call Bob"),
        ];
        assert_eq!(
            build_prompt(&tasks),
            "Summarize these todos:\n- Buy milk\n- Call Bob"
        );
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let tasks = vec![Task::new(TaskId::Int(3), "Water plants")];
        assert_eq!(build_prompt(&tasks), build_prompt(&tasks));
    }
}
