use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Session;

/// Backend base URL used when `SIE_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Resolve the backend base URL. CSR WASM has no runtime environment, so
/// the override is baked in at compile time.
pub fn api_base() -> String {
    option_env!("SIE_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Login rejected, or no usable token came back.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Network failure or non-success status on any other call.
    #[error("Request failed: {0}")]
    Fetch(String),
}

// -- Records mirroring the backend schemas --

/// Token issued on successful login. Only `access_token` is used; the
/// backend always reports `token_type = "bearer"`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Student record. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_uid: String,
    pub name: String,
    pub age: u32,
    pub gpa: f64,
    pub skills: String,
    pub client_id: String,
}

/// Job posting. Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub id: i64,
    pub job_uid: String,
    pub role: String,
    pub company: String,
    pub required_skills: String,
    pub salary_min: f64,
    pub salary_max: f64,
    pub industry: String,
    pub work_type: String,
    pub client_id: String,
}

/// A job enriched with a relevance score for one student. Items arrive
/// already ranked by the backend and are rendered in the order received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationItem {
    pub job_uid: String,
    pub role: String,
    pub company: String,
    pub score: f64,
    pub required_skills: String,
    pub salary_min: f64,
    pub salary_max: f64,
}

// -- Request bodies --

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RecommendRequest<'a> {
    client_id: &'a str,
    student_uid: &'a str,
    top_k: u32,
}

#[derive(Serialize)]
struct FeedbackRequest<'a> {
    student_uid: &'a str,
    job_uid: &'a str,
    liked: bool,
    notes: &'a str,
}

/// FastAPI error bodies carry a `detail` string.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

async fn error_detail(resp: Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("HTTP {}", status),
    }
}

// -- Client --

/// Typed HTTP client for the Smart Internship Engine backend.
///
/// The session is an explicit dependency rather than process-wide default
/// headers: once a token is stored, every request built here carries
/// `Authorization: Bearer <token>` until the page is reloaded.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, session: Session) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::get(&format!("{}{}", self.base, path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::post(&format!("{}{}", self.base, path)))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(value) => req.header("Authorization", &value),
            None => req,
        }
    }

    /// Authenticate and store the issued token into the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let resp = self
            .post("/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Auth(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Auth(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Auth(error_detail(resp).await));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Auth(e.to_string()))?;
        if token.access_token.is_empty() {
            return Err(ApiError::Auth("backend returned an empty token".into()));
        }

        self.session.set_token(token.access_token.clone());
        Ok(token)
    }

    /// Fetch the full student listing. No pagination.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        fetch_json(self.get("/students/")).await
    }

    /// Fetch the full job listing. No pagination.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        fetch_json(self.get("/jobs/")).await
    }

    /// Request a ranked list of at most `top_k` jobs for one student.
    pub async fn recommend(
        &self,
        client_id: &str,
        student_uid: &str,
        top_k: u32,
    ) -> Result<Vec<RecommendationItem>, ApiError> {
        let req = self
            .post("/recs/recommend")
            .json(&RecommendRequest {
                client_id,
                student_uid,
                top_k,
            })
            .map_err(|e| ApiError::Fetch(e.to_string()))?;
        send_json(req).await
    }

    /// Submit like/skip feedback for one recommended job. The backend's
    /// acknowledgement body is not inspected.
    pub async fn send_feedback(
        &self,
        student_uid: &str,
        job_uid: &str,
        liked: bool,
        notes: &str,
    ) -> Result<(), ApiError> {
        let req = self
            .post("/feedback/submit")
            .json(&FeedbackRequest {
                student_uid,
                job_uid,
                liked,
                notes,
            })
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Fetch(error_detail(resp).await));
        }
        Ok(())
    }
}

async fn fetch_json<T: for<'de> Deserialize<'de>>(req: RequestBuilder) -> Result<T, ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Fetch(e.to_string()))?;
    decode_json(resp).await
}

async fn send_json<T: for<'de> Deserialize<'de>>(req: Request) -> Result<T, ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Fetch(e.to_string()))?;
    decode_json(resp).await
}

async fn decode_json<T: for<'de> Deserialize<'de>>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Fetch(error_detail(resp).await));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Fetch(e.to_string()))
}

// -- Request sequencing --

/// Monotonic request-identifier counter.
///
/// Overlapping "Recommend" clicks cannot cancel each other's fetches, so
/// each request takes an id at issue time and a response is applied only if
/// its id is still the newest one issued. Stale responses are dropped.
#[derive(Clone, Default)]
pub struct RequestSeq(Arc<AtomicU64>);

impl RequestSeq {
    /// Claim the next request id, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.0.load(Ordering::Relaxed) == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_body_matches_wire_format() {
        let body = LoginRequest {
            email: "student@thesis.local",
            password: "student123",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"email": "student@thesis.local", "password": "student123"})
        );
    }

    #[test]
    fn recommend_body_matches_wire_format() {
        let body = RecommendRequest {
            client_id: "client_U1",
            student_uid: "S1",
            top_k: 5,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"client_id": "client_U1", "student_uid": "S1", "top_k": 5})
        );
    }

    #[test]
    fn feedback_body_matches_wire_format() {
        let body = FeedbackRequest {
            student_uid: "S1",
            job_uid: "J7",
            liked: true,
            notes: "liked",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"student_uid": "S1", "job_uid": "J7", "liked": true, "notes": "liked"})
        );
    }

    #[test]
    fn token_response_tolerates_missing_token_type() {
        let token: TokenResponse = serde_json::from_value(json!({"access_token": "tok123"})).unwrap();
        assert_eq!(token.access_token, "tok123");
        assert_eq!(token.token_type, "");
    }

    #[test]
    fn recommendation_items_keep_server_order() {
        let items: Vec<RecommendationItem> = serde_json::from_value(json!([
            {
                "job_uid": "J2", "role": "Backend Intern", "company": "Acme",
                "score": 0.91, "required_skills": "python,sql",
                "salary_min": 1000.0, "salary_max": 1500.0
            },
            {
                "job_uid": "J7", "role": "Data Intern", "company": "Globex",
                "score": 0.83333, "required_skills": "pandas",
                "salary_min": 900.0, "salary_max": 1200.0
            }
        ]))
        .unwrap();

        let uids: Vec<&str> = items.iter().map(|it| it.job_uid.as_str()).collect();
        assert_eq!(uids, ["J2", "J7"]);
    }

    #[test]
    fn fastapi_error_body_exposes_detail() {
        let body: ErrorBody =
            serde_json::from_value(json!({"detail": "Invalid credentials"})).unwrap();
        assert_eq!(body.detail, "Invalid credentials");
        assert_eq!(
            ApiError::Auth(body.detail).to_string(),
            "Authentication failed: Invalid credentials"
        );
    }

    #[test]
    fn api_base_strips_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_base().starts_with("http"));
    }

    #[test]
    fn stale_request_ids_are_not_current() {
        let seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
