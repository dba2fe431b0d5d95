//! Axum route handlers for the review and recommendation operations.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::advice::assembler::{recommendation_prompt, review_prompt};
use crate::advice::render::markdown_to_html;
use crate::errors::AppError;
use crate::extraction::fetcher::fetch_job_description;
use crate::models::document::DocumentKey;
use crate::routes::greeting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub url: Option<String>,
}

/// ANY /review
///
/// Rates the stored résumé and returns the model's feedback as plain text.
pub async fn handle_review(State(state): State<AppState>) -> Result<String, AppError> {
    let resume = state.store.get(DocumentKey::Resume).await?;
    if resume.is_none() {
        debug!("No resume stored; reviewing placeholder");
    }

    let prompt = review_prompt(resume.as_deref());
    let feedback = state.llm.complete(&prompt).await?;

    info!(chars = feedback.len(), "Resume review completed");
    Ok(feedback)
}

/// ANY /recommendations?url=<job posting>
///
/// Scrapes the posting, cross-references it with the résumé and reference
/// document, and returns the suggestions as HTML. Without `url`, greets.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Response, AppError> {
    let Some(raw_url) = query.url.filter(|u| !u.trim().is_empty()) else {
        return Ok(greeting().await.into_response());
    };

    let url = Url::parse(raw_url.trim())
        .map_err(|e| AppError::Validation(format!("url is not a valid absolute URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(format!(
            "url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    let job_description =
        fetch_job_description(state.pages.as_ref(), &state.extraction, &url).await?;
    debug!(
        host = url.host_str().unwrap_or_default(),
        chars = job_description.len(),
        "Extracted job description"
    );

    let resume = state.store.get(DocumentKey::Resume).await?;
    let reference = state.store.get(DocumentKey::Everything).await?;

    let prompt =
        recommendation_prompt(resume.as_deref(), &job_description, reference.as_deref());
    let markdown = state.llm.complete(&prompt).await?;
    let html = markdown_to_html(&markdown)?;

    info!(%url, "Recommendations generated");
    Ok(Html(html).into_response())
}
