pub mod exam;

pub use exam::{
    AnswerRequest, AnswersResponse, QuestionRequest, QuestionsResponse, SummaryResponse,
    UploadResponse,
};
