//! HTTP client for the conversion server.

use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use super::error::{ApiError, ApiResult};
use crate::config::ServerSettings;
use crate::intake::CandidateFile;
use crate::models::{
    GenerateBody, GenerateResponse, GenerationOutcome, SamplingRate, UploadOutcome, UploadResponse,
};

/// Error text the server returns when a request arrives without a session.
pub const NO_SESSION: &str = "No session found";

/// Client bound to one server.
///
/// Cheap to clone; clones share the connection pool and the cookie jar that
/// carries the server's session cookie.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    /// Count of sessions opened. Held while the index page loads.
    sessions: Arc<Mutex<u64>>,
}

impl ApiClient {
    pub fn new(settings: &ServerSettings) -> ApiResult<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            sessions: Arc::new(Mutex::new(0)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Load the index page so the server assigns a session.
    ///
    /// The server keeps uploaded and converted files per session, so this
    /// must happen before the first upload.
    pub async fn open_session(&self) -> ApiResult<()> {
        let mut sessions = self.sessions.lock().await;
        self.load_index().await?;
        *sessions += 1;
        tracing::info!("Session opened with {}", self.base_url);
        Ok(())
    }

    /// Number of sessions opened so far. Pass it to `reopen_session` after
    /// a request is rejected for a missing session.
    pub async fn session_generation(&self) -> u64 {
        *self.sessions.lock().await
    }

    /// Replace the session seen as `generation`.
    ///
    /// Every index load gives the cookie a fresh session, so when several
    /// requests are rejected together only the first one reloads it. The
    /// others find the count moved on and reuse the new session.
    pub async fn reopen_session(&self, generation: u64) -> ApiResult<()> {
        let mut sessions = self.sessions.lock().await;
        if *sessions != generation {
            tracing::debug!("Session already reopened");
            return Ok(());
        }
        self.load_index().await?;
        *sessions += 1;
        tracing::info!("Session reopened with {}", self.base_url);
        Ok(())
    }

    async fn load_index(&self) -> ApiResult<()> {
        let response = self.http.get(self.endpoint("/")).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// `POST /upload` with one file.
    pub async fn post_upload(
        &self,
        file: &CandidateFile,
        output_prefix: &str,
        sampling_rate: SamplingRate,
    ) -> ApiResult<UploadOutcome> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| ApiError::ReadFile {
                path: file.path.clone(),
                source,
            })?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type())?;
        let form = Form::new()
            .part("file", part)
            .text("sampling_rate", sampling_rate.as_form_value())
            .text("output_prefix", output_prefix.to_string());

        tracing::debug!("Uploading {} ({} bytes)", file.name, file.size);
        let response = self
            .http
            .post(self.endpoint("/upload"))
            .multipart(form)
            .send()
            .await?;

        let (status, body) = read_json::<UploadResponse>(response).await?;
        body.into_outcome(&file.name).ok_or(ApiError::Unrecognised { status })
    }

    /// `POST /generate` for everything uploaded in this session.
    pub async fn post_generate(
        &self,
        output_prefix: &str,
        sampling_rate: SamplingRate,
    ) -> ApiResult<GenerationOutcome> {
        let body = GenerateBody {
            output_prefix: output_prefix.to_string(),
            sampling_rate,
        };

        let response = self
            .http
            .post(self.endpoint("/generate"))
            .json(&body)
            .send()
            .await?;

        let (status, body) = read_json::<GenerateResponse>(response).await?;
        body.into_outcome().ok_or(ApiError::Unrecognised { status })
    }
}

/// Decode a JSON body regardless of status; error responses carry JSON too.
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<(u16, T)> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    let body =
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { status, source })?;
    Ok((status, body))
}


#[cfg(test)]
mod tests {
    use super::test_server::{serve, Canned};
    use super::*;
    use crate::models::ErrorReport;
    use std::fs;
    use tempfile::tempdir;

    fn client_for(base_url: &str) -> ApiClient {
        ApiClient::new(&ServerSettings {
            base_url: format!("{base_url}/"),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = client_for("http://127.0.0.1:5000");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(client.endpoint("/upload"), "http://127.0.0.1:5000/upload");
    }

    #[tokio::test]
    async fn upload_sends_multipart_fields_and_session_cookie() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kick.wav");
        fs::write(&path, b"RIFFdata").unwrap();
        let file = CandidateFile::new("kick.wav", 8, &path);

        let (url, server) = serve(vec![
            Canned {
                status: "200 OK",
                headers: vec![("Set-Cookie", "session=abc123; Path=/")],
                body: "<html></html>",
            },
            Canned::json(
                "200 OK",
                r#"{"filepath":"uploads/abc/kick.wav","original_filename":"kick.wav"}"#,
            ),
        ])
        .await;
        let client = client_for(&url);

        client.open_session().await.unwrap();
        let outcome = client
            .post_upload(&file, "kick", SamplingRate::Hz16384)
            .await
            .unwrap();
        assert!(outcome.is_success());

        let requests = server.await.unwrap();
        let upload = &requests[1];
        assert!(upload.starts_with("POST /upload "));
        assert!(upload.to_ascii_lowercase().contains("cookie: session=abc123"));
        assert!(upload.contains("name=\"file\"; filename=\"kick.wav\""));
        assert!(upload.contains("RIFFdata"));
        assert!(upload.contains("name=\"sampling_rate\"\r\n\r\n16384"));
        assert!(upload.contains("name=\"output_prefix\"\r\n\r\nkick"));
    }

    #[tokio::test]
    async fn concurrent_reopens_load_the_index_once() {
        let (url, server) = serve(vec![Canned {
            status: "200 OK",
            headers: vec![("Set-Cookie", "session=fresh; Path=/")],
            body: "<html></html>",
        }])
        .await;
        let client = client_for(&url);

        let seen = client.session_generation().await;
        let (a, b) = tokio::join!(client.reopen_session(seen), client.reopen_session(seen));
        a.unwrap();
        b.unwrap();

        assert_eq!(client.session_generation().await, seen + 1);
        let requests = server.await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("GET / "));
    }

    #[tokio::test]
    async fn error_status_body_is_still_decoded() {
        let (url, _server) = serve(vec![Canned::json(
            "500 INTERNAL SERVER ERROR",
            r#"{"success":false,"error":"bad state","details":"trace"}"#,
        )])
        .await;

        let outcome = client_for(&url)
            .post_generate("kick", SamplingRate::Hz8192)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            GenerationOutcome::Failure(ErrorReport::new("bad state", Some("trace".into())))
        );
    }

    #[tokio::test]
    async fn generate_posts_json_body() {
        let (url, server) = serve(vec![Canned::json(
            "200 OK",
            r#"{"success":true,"results":[]}"#,
        )])
        .await;

        client_for(&url)
            .post_generate("snare", SamplingRate::Hz32768)
            .await
            .unwrap();

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("POST /generate "));
        assert!(requests[0].contains(r#"{"output_prefix":"snare","sampling_rate":"32768"}"#));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let (url, _server) = serve(vec![Canned {
            status: "413 REQUEST ENTITY TOO LARGE",
            headers: vec![("Content-Type", "text/html")],
            body: "<h1>Request Entity Too Large</h1>",
        }])
        .await;

        let err = client_for(&url)
            .post_generate("kick", SamplingRate::Hz16384)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { status: 413, .. }));
    }

    #[tokio::test]
    async fn missing_file_fails_before_connecting() {
        let client = client_for("http://127.0.0.1:9");
        let file = CandidateFile::new("gone.wav", 1, "/nonexistent/gone.wav");

        let err = client
            .post_upload(&file, "gone", SamplingRate::Hz16384)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ReadFile { .. }));
    }

    #[tokio::test]
    async fn unrecognised_json_keeps_status() {
        let (url, _server) = serve(vec![Canned::json("202 ACCEPTED", r#"{"queued":true}"#)]).await;

        let err = client_for(&url)
            .post_generate("kick", SamplingRate::Hz16384)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unrecognised { status: 202 }));
    }
}
