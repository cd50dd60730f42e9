use crate::dtos::{
    AnswerRequest, AnswersResponse, QuestionRequest, QuestionsResponse, SummaryResponse,
    UploadResponse,
};
use crate::services::summarizer::{self, SummarizeError};
use crate::services::{clean_questions, extractor, prompts};
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

/// Output cap for one question-generation call.
const QUESTION_MAX_TOKENS: u32 = 800;
/// Output cap per generated answer.
const ANSWER_MAX_TOKENS: u32 = 500;

/// Read the first multipart field's bytes.
async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
        })?
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No file uploaded")))?;

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?
        .to_vec();

    Ok(data)
}

pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let data = read_upload(&mut multipart).await?;

    tracing::info!(size = data.len(), "Storing uploaded document");

    state.store.put(data).await.map_err(|e| {
        tracing::error!("Failed to store uploaded document: {}", e);
        AppError::InternalError(anyhow::anyhow!("Failed to upload PDF: {}", e))
    })?;

    Ok(Json(UploadResponse {
        message: "PDF uploaded successfully".to_string(),
    }))
}

pub async fn generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let prompt = prompts::build_question_prompt(
        &request.topic,
        request.num_questions,
        request.marks,
        &request.difficulty,
    );

    let raw = state
        .provider
        .complete(
            prompts::QUESTION_SYSTEM_PROMPT,
            &prompt,
            Some(QUESTION_MAX_TOKENS),
        )
        .await
        .map_err(|e| {
            tracing::error!(topic = %request.topic, "Question generation failed: {}", e);
            AppError::BadGateway(format!("Failed to generate questions: {}", e))
        })?;

    let questions = clean_questions(&raw);

    tracing::info!(
        topic = %request.topic,
        count = questions.len(),
        "Generated questions"
    );

    Ok(Json(QuestionsResponse { questions }))
}

pub async fn generate_answers(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let bytes = state
        .store
        .get()
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to read stored PDF: {}", e)))?
        .ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("PDF not found. Please upload a PDF first."))
        })?;

    let context = extractor::extract_text(&bytes)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read PDF: {}", e)))?;

    let mut answers = Vec::with_capacity(request.questions.len());

    // One provider call per question, strictly in request order. This loop
    // is the fan-out point should bounded concurrency ever be wanted.
    for (idx, question) in request.questions.iter().enumerate() {
        let prompt = prompts::build_answer_prompt(&context, question, request.marks, idx + 1);

        let answer = match state
            .provider
            .complete(prompts::ANSWER_SYSTEM_PROMPT, &prompt, Some(ANSWER_MAX_TOKENS))
            .await
        {
            Ok(answer) => answer,
            // A failed question does not abort the batch; the error rides
            // along in its answer slot.
            Err(e) => {
                tracing::warn!(question_index = idx + 1, "Answer generation failed: {}", e);
                format!("Error generating answer: {}", e)
            }
        };

        answers.push(answer);
    }

    Ok(Json(AnswersResponse { answers }))
}

pub async fn summarize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let data = read_upload(&mut multipart).await?;

    let summary = summarizer::summarize_document(&data, state.provider.as_ref())
        .await
        .map_err(|e| match e {
            SummarizeError::Extraction(e) => {
                AppError::BadRequest(anyhow::anyhow!("Failed to read PDF: {}", e))
            }
            SummarizeError::Generation(e) => {
                tracing::error!("Summary generation failed: {}", e);
                AppError::BadGateway(format!("Failed to summarize document: {}", e))
            }
        })?;

    Ok(Json(SummaryResponse { summary }))
}
