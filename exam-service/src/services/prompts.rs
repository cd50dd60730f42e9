//! Prompt templates for the generation API.
//!
//! These are pure formatting functions; the full document text is embedded
//! verbatim in answer prompts with no truncation, so an over-long context
//! surfaces as a provider error on the call itself.

pub const QUESTION_SYSTEM_PROMPT: &str = "You are an exam question paper generator.";
pub const ANSWER_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Answer only from the given context.";
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub fn build_question_prompt(
    topic: &str,
    num_questions: u32,
    marks: u32,
    difficulty: &str,
) -> String {
    format!(
        "Generate {} {}-mark {} level questions on the topic: {}.\nNumber each question.",
        num_questions, marks, difficulty, topic
    )
}

/// `index` is the question's 1-based position in the request.
pub fn build_answer_prompt(context: &str, question: &str, marks: u32, index: usize) -> String {
    format!(
        "Context:\n{}\n\nAnswer this {}-mark question ({}): {}",
        context, marks, index, question
    )
}

pub fn build_summary_prompt(text: &str) -> String {
    format!("Summarize the following document:\n{}", text)
}
