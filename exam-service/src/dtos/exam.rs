use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct QuestionRequest {
    pub topic: String,
    #[validate(range(min = 1))]
    pub num_questions: u32,
    #[validate(range(min = 1))]
    pub marks: u32,
    /// Free-form difficulty label, e.g. "easy" or "hard".
    pub difficulty: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AnswerRequest {
    pub questions: Vec<String>,
    #[validate(range(min = 1))]
    pub marks: u32,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

/// Answers are index-aligned with the request's questions.
#[derive(Debug, Serialize)]
pub struct AnswersResponse {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
