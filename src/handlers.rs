use crate::errors::AppError;
use crate::models::AnalysisResult;
use crate::ui::{render_fragment, render_home, render_index};
use crate::wc::{word_count, word_count_empty};
use axum::{extract::Multipart, response::Html, Json};
use tracing::info;

pub const API_MODE: &str = "API";
pub const EMBEDDED_MODE: &str = "EMBEDDED";
// the legacy service labelled these 'API'; SSR names the page that rendered them
pub const SSR_MODE: &str = "SSR";

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn home_page() -> Html<String> {
    Html(render_home(None))
}

pub async fn home_upload(multipart: Multipart) -> Result<Html<String>, AppError> {
    let result = analyze_upload(multipart, SSR_MODE).await?;
    Ok(Html(render_home(Some(&result))))
}

pub async fn api(multipart: Multipart) -> Result<Json<AnalysisResult>, AppError> {
    let result = analyze_upload(multipart, API_MODE).await?;
    Ok(Json(result))
}

pub async fn embedded(multipart: Multipart) -> Result<Html<String>, AppError> {
    let result = analyze_upload(multipart, EMBEDDED_MODE).await?;
    Ok(Html(render_fragment(&result)))
}

/// Counts the `file` field; a missing field or an empty filename yields the empty result.
async fn analyze_upload(mut multipart: Multipart, mode: &str) -> Result<AnalysisResult, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_owned).unwrap_or_default();
        let contents = field.bytes().await?;
        if filename.is_empty() {
            break;
        }

        let result = word_count(&contents, &filename, mode);
        info!(
            mode,
            filename = %result.filename,
            lines = result.lines,
            words = result.words,
            bytes = result.bytes,
            "analyzed upload"
        );
        return Ok(result);
    }

    info!(mode, "no file in upload");
    Ok(word_count_empty(mode))
}
