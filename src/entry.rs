/// One time entry's worth of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskEntry {
    pub(crate) project: String,
    pub(crate) id: String,
    pub(crate) message: String,
}

impl TaskEntry {
    /// Composite task label, e.g. "ENG-123". Doubles as the external
    /// reference id, so resubmissions of the same task stay correlatable
    /// on the Harvest side.
    pub(crate) fn label(&self) -> String {
        format!("{}-{}", self.project, self.id)
    }

    /// Notes field sent with the entry: "[ENG-123] Fixed bug".
    pub(crate) fn notes(&self) -> String {
        format!("[{}] {}", self.label(), self.message)
    }

    /// Issue-tracker permalink for the external reference.
    pub(crate) fn permalink(&self, prefix: &str) -> String {
        format!("{}/{}", prefix, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(project: &str, id: &str, message: &str) -> TaskEntry {
        TaskEntry {
            project: project.to_string(),
            id: id.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn label_joins_with_single_hyphen() {
        assert_eq!(entry("ENG", "123", "Fixed bug").label(), "ENG-123");
    }

    #[test]
    fn label_keeps_punctuation_intact() {
        assert_eq!(entry("OPS.2", "4_5", "x").label(), "OPS.2-4_5");
    }

    #[test]
    fn notes_wrap_label_in_brackets() {
        assert_eq!(entry("ENG", "123", "Fixed bug").notes(), "[ENG-123] Fixed bug");
    }

    #[test]
    fn notes_keep_empty_message() {
        assert_eq!(entry("GEN", "42", "").notes(), "[GEN-42] ");
    }

    #[test]
    fn permalink_joins_with_single_slash() {
        assert_eq!(
            entry("ENG", "123", "x").permalink("https://jira.example.com/browse"),
            "https://jira.example.com/browse/ENG-123"
        );
    }
}
