/// In-memory state for one session: the last inputs that passed validation
/// and the questions currently on display.
///
/// Owned by the top-level driver and passed by `&mut` to each operation, so
/// the form path and the regenerate path are its only writers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub questions: Vec<String>,
    pub job_description: String,
    pub resume_text: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both inputs are present, so regeneration can run.
    pub fn has_inputs(&self) -> bool {
        !self.job_description.is_empty() && !self.resume_text.is_empty()
    }

    pub(crate) fn set_inputs(&mut self, job_description: &str, resume_text: &str) {
        self.job_description = job_description.to_string();
        self.resume_text = resume_text.to_string();
    }
}
