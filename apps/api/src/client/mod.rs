//! Request client: validates the two inputs, calls the interviewer API, and
//! keeps the session's question list current.
//!
//! Every outcome produces exactly one notification. Nothing is retried.

pub mod api;
pub mod error;
pub mod notify;
pub mod questions;
pub mod session;

use tracing::debug;

use crate::models::interview::GenerationRequest;
use api::InterviewerApi;
use error::ClientError;
use notify::{Notification, Notifier};
use questions::{parse_questions, INITIAL_QUESTION_LIMIT};
use session::SessionState;

const REGENERATE_FAILURE_MESSAGE: &str = "Failed to generate new questions";

/// Result of a successful regenerate call.
#[derive(Debug, Clone, PartialEq)]
pub struct Regeneration {
    pub temperature: f64,
    pub questions: Vec<String>,
}

pub struct Interviewer<A, N> {
    api: A,
    notifier: N,
}

impl<A: InterviewerApi, N: Notifier> Interviewer<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Initial generation. Blank inputs are rejected before any request is
    /// made; on success at most five questions replace the session's list.
    ///
    /// The returned error's `Display` is the inline message for the form.
    pub async fn submit(
        &self,
        session: &mut SessionState,
        job_description: &str,
        resume_text: &str,
    ) -> Result<Vec<String>, ClientError> {
        match self.try_submit(session, job_description, resume_text).await {
            Ok(questions) => {
                self.notifier.notify(Notification::success(
                    "Questions Generated",
                    "Interview questions have been generated successfully.",
                ));
                Ok(questions)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    async fn try_submit(
        &self,
        session: &mut SessionState,
        job_description: &str,
        resume_text: &str,
    ) -> Result<Vec<String>, ClientError> {
        if job_description.trim().is_empty() || resume_text.trim().is_empty() {
            return Err(ClientError::Validation);
        }

        session.set_inputs(job_description, resume_text);

        let request = GenerationRequest::new(job_description, resume_text);
        let text = self.api.generate(&request).await?;

        let questions = parse_questions(&text, Some(INITIAL_QUESTION_LIMIT));
        session.questions = questions.clone();
        Ok(questions)
    }

    /// Re-runs generation for the session's stored inputs at a fresh
    /// temperature drawn from [0, 1). All returned lines are kept.
    /// On failure the session is left untouched.
    pub async fn regenerate(
        &self,
        session: &mut SessionState,
    ) -> Result<Regeneration, ClientError> {
        if !session.has_inputs() {
            let err = ClientError::MissingSession;
            self.notifier.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        let temperature: f64 = rand::random();
        debug!("Regenerating questions at temperature {temperature}");

        let request = GenerationRequest::new(&*session.job_description, &*session.resume_text)
            .with_temperature(temperature);

        match self.api.generate(&request).await {
            Ok(text) => {
                let questions = parse_questions(&text, None);
                session.questions = questions.clone();
                self.notifier.notify(Notification::success(
                    "Success",
                    format!("Generated new questions with temperature: {temperature:.2}"),
                ));
                Ok(Regeneration {
                    temperature,
                    questions,
                })
            }
            Err(e) => {
                self.notifier
                    .notify(Notification::error(REGENERATE_FAILURE_MESSAGE));
                Err(e)
            }
        }
    }
}
