pub mod extractor;
pub mod formatter;
pub mod prompts;
pub mod providers;
pub mod storage;
pub mod summarizer;

pub use extractor::{extract_text, extract_text_flat, ExtractionError};
pub use formatter::clean_questions;
pub use storage::{DocumentStore, LocalDocumentStore};
pub use summarizer::{summarize_document, SummarizeError};
