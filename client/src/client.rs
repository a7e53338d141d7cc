use crate::error::{ClientError, Result};
use crate::models::*;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Typed HTTP client for the RAG backend.
///
/// The backend owns all of the actual retrieval pipeline (embedding,
/// vector search, answer generation); this client only speaks its
/// JSON/multipart contract.
#[derive(Debug, Clone)]
pub struct RagClient {
    http: Client,
    base_url: String,
}

impl RagClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a text blob for ingestion. The backend embeds it and
    /// returns the stored point's identifier.
    pub async fn add_document(&self, text: &str) -> Result<AddDocumentResponse> {
        let request = AddDocumentRequest {
            text: text.to_string(),
            id: None,
        };

        let response = self
            .http
            .post(format!("{}/add_document", self.base_url))
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Submit a file (PDF/TXT/DOCX) as multipart form data under the
    /// `file` field.
    pub async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadDocumentResponse> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/upload_document", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Raw similarity search, without answer generation.
    pub async fn query(&self, text: &str, top_k: Option<usize>) -> Result<Vec<SearchResult>> {
        let request = QueryRequest {
            text: text.to_string(),
            top_k,
        };

        let response = self
            .http
            .post(format!("{}/query", self.base_url))
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Retrieve relevant documents and generate an answer from them.
    pub async fn generate_answer(&self, text: &str) -> Result<AnswerResponse> {
        let request = QueryRequest {
            text: text.to_string(),
            top_k: None,
        };

        let response = self
            .http
            .post(format!("{}/generate_answer", self.base_url))
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            // FastAPI-style errors carry a {"detail": ...} body; fall back
            // to the raw text when the body is something else.
            let detail = match serde_json::from_str::<ErrorDetail>(&body) {
                Ok(err) => err.detail,
                Err(_) if !body.is_empty() => body,
                Err(_) => status.to_string(),
            };
            log::warn!("backend error {}: {}", status, detail);
            return Err(ClientError::Api { status, detail });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn add_document_returns_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/add_document"))
            .and(body_json(serde_json::json!({"text": "hello world"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "id": "doc-123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri());
        let response = client.add_document("hello world").await.unwrap();

        assert_eq!(response.id, "doc-123");
        assert_eq!(response.status, "success");
    }

    #[tokio::test]
    async fn add_document_surfaces_error_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/add_document"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": "embedding failed"
            })))
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri());
        let err = client.add_document("hello").await.unwrap_err();

        match err {
            ClientError::Api { status, detail } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(detail, "embedding failed");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/add_document"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal server error"))
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri());
        let err = client.add_document("hello").await.unwrap_err();

        match err {
            ClientError::Api { detail, .. } => assert_eq!(detail, "internal server error"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Nothing listens on port 1.
        let client = RagClient::new("http://127.0.0.1:1");
        let err = client.add_document("hello").await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn upload_document_posts_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload_document"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "filename": "notes.txt",
                "id": "doc-456",
                "status": "success"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri());
        let response = client
            .upload_document("notes.txt", b"some notes".to_vec())
            .await
            .unwrap();

        assert_eq!(response.filename, "notes.txt");
        assert_eq!(response.id, "doc-456");
    }

    #[tokio::test]
    async fn query_parses_search_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .and(body_json(serde_json::json!({"text": "what is rag", "top_k": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "a", "text": "doc A text", "score": 0.91},
                {"id": "b", "text": "doc B text", "score": 0.72}
            ])))
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri());
        let results = client.query("what is rag", Some(3)).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].text, "doc A text");
        assert!(results[0].score > results[1].score);
    }

    #[tokio::test]
    async fn generate_answer_parses_answer_and_sources() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate_answer"))
            .and(body_json(serde_json::json!({"text": "What is RAG?"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "answer": "Retrieval-augmented generation...",
                "sources": ["doc A text", "doc B text"]
            })))
            .mount(&server)
            .await;

        let client = RagClient::new(server.uri());
        let response = client.generate_answer("What is RAG?").await.unwrap();

        assert_eq!(response.answer, "Retrieval-augmented generation...");
        assert_eq!(response.sources, vec!["doc A text", "doc B text"]);
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = RagClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
