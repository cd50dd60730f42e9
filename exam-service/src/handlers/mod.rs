pub mod exam;
pub mod health;

pub use exam::{generate_answers, generate_questions, summarize, upload_document};
pub use health::health_check;
