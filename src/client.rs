//! Submission client: uploads one file to the analysis service and renders
//! whatever comes back into an injected display.

use crate::errors::SubmitError;
use crate::models::{AnalysisResult, Mode, SelectedFile, SubmissionOutcome, UploadRequest};
use crate::storage::ResultStore;
use reqwest::{
    header::{CACHE_CONTROL, PRAGMA},
    multipart::{Form, Part},
};
use std::time::Duration;
use tracing::{debug, info, warn};

pub trait FileSource {
    fn selected_file(&self) -> Option<SelectedFile>;
}

pub trait ModeSelector {
    fn mode(&self) -> Mode;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisplayField {
    /// Also serves as the status area for mode changes and errors.
    Mode,
    Filename,
    Lines,
    Words,
    Bytes,
    Chars,
}

impl DisplayField {
    pub fn label(self) -> &'static str {
        match self {
            DisplayField::Mode => "mode",
            DisplayField::Filename => "filename",
            DisplayField::Lines => "lines",
            DisplayField::Words => "words",
            DisplayField::Bytes => "bytes",
            DisplayField::Chars => "chars",
        }
    }
}

pub trait ResultDisplay {
    fn set_field(&mut self, field: DisplayField, text: &str);

    /// Replaces the markup container's content.
    fn set_markup(&mut self, markup: &str);
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }
}

pub struct SubmissionClient<F, M, D> {
    http: reqwest::Client,
    base_url: String,
    files: F,
    selector: M,
    display: D,
    store: Option<ResultStore>,
}

impl<F, M, D> SubmissionClient<F, M, D>
where
    F: FileSource,
    M: ModeSelector,
    D: ResultDisplay,
{
    pub fn new(config: ClientConfig, files: F, selector: M, display: D) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            files,
            selector,
            display,
            store: None,
        })
    }

    pub fn with_store(mut self, store: ResultStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn endpoint(&self, mode: Mode) -> String {
        format!("{}{}", self.base_url, mode.path())
    }

    /// Click handler: submits and reports any failure in the mode display.
    pub async fn on_submit(&mut self) -> Result<SubmissionOutcome, SubmitError> {
        let result = self.submit().await;
        if let Err(err) = &result {
            warn!(kind = err.kind(), "submission failed: {err}");
            self.display.set_field(DisplayField::Mode, &err.status_message());
        }
        result
    }

    pub fn on_mode_change(&mut self) {
        let mode = self.selector.mode();
        self.display
            .set_field(DisplayField::Mode, &mode.as_str().to_uppercase());
    }

    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SubmitError> {
        let mode = self.selector.mode();
        let file = self.files.selected_file().ok_or(SubmitError::NoFileSelected)?;

        let body = self.send(UploadRequest { file, mode }).await?;
        let outcome = decode_response(mode, &body)?;
        self.render(&outcome).await;
        Ok(outcome)
    }

    async fn send(&self, request: UploadRequest) -> Result<Vec<u8>, SubmitError> {
        let url = self.endpoint(request.mode);
        let UploadRequest { file, mode } = request;
        info!(%mode, filename = %file.filename, bytes = file.contents.len(), "uploading to {url}");

        let part = Part::bytes(file.contents).file_name(file.filename);
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .multipart(form)
            .send()
            .await
            .map_err(|err| SubmitError::RequestFailed {
                url: url.clone(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::RequestFailed {
                url,
                reason: status.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|err| SubmitError::RequestFailed {
            url: url.clone(),
            reason: err.to_string(),
        })?;
        debug!("received {} bytes from {url}", body.len());
        Ok(body.to_vec())
    }

    async fn render(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Structured(result) => {
                for (field, text) in display_values(result) {
                    self.display.set_field(field, &text);
                }
                if let Some(store) = &self.store {
                    if let Err(err) = store.save_result(result).await {
                        warn!(path = %store.path().display(), "failed to store result: {err}");
                    }
                }
            }
            SubmissionOutcome::Markup(markup) => self.display.set_markup(markup),
        }
    }
}

pub fn decode_response(mode: Mode, body: &[u8]) -> Result<SubmissionOutcome, SubmitError> {
    match mode {
        Mode::Api => serde_json::from_slice::<AnalysisResult>(body)
            .map(SubmissionOutcome::Structured)
            .map_err(|err| SubmitError::MalformedResponse {
                mode,
                reason: err.to_string(),
            }),
        Mode::Embedded => String::from_utf8(body.to_vec())
            .map(SubmissionOutcome::Markup)
            .map_err(|err| SubmitError::MalformedResponse {
                mode,
                reason: err.to_string(),
            }),
    }
}

fn display_values(result: &AnalysisResult) -> [(DisplayField, String); 6] {
    [
        (DisplayField::Mode, result.mode.clone()),
        (DisplayField::Filename, result.filename.clone()),
        (DisplayField::Lines, result.lines.to_string()),
        (DisplayField::Words, result.words.to_string()),
        (DisplayField::Bytes, result.bytes.to_string()),
        (DisplayField::Chars, result.chars.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_body_missing_keys_is_malformed() {
        let err = decode_response(Mode::Api, br#"{"mode":"api","filename":"a.txt"}"#).unwrap_err();
        assert_eq!(err.kind(), "MalformedResponse");
    }

    #[test]
    fn embedded_body_is_kept_verbatim() {
        let outcome = decode_response(Mode::Embedded, b"<p>42 lines</p>").unwrap();
        assert_eq!(outcome, SubmissionOutcome::Markup("<p>42 lines</p>".to_string()));
    }

    #[test]
    fn embedded_body_must_be_text() {
        let err = decode_response(Mode::Embedded, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse { mode: Mode::Embedded, .. }));
    }

    #[test]
    fn numbers_render_as_plain_decimals() {
        let values = display_values(&AnalysisResult {
            mode: "api".to_string(),
            filename: "report.txt".to_string(),
            lines: 10,
            words: 42,
            bytes: 512,
            chars: 480,
        });
        assert_eq!(values[2], (DisplayField::Lines, "10".to_string()));
        assert_eq!(values[5], (DisplayField::Chars, "480".to_string()));
    }
}
