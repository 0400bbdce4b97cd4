use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    Activity, ActivityUpdate, ApiErrorBody, CreatedResponse, GenerationRequest, NewActivity,
    ProgressEntry, SpeechRequest, User,
};
use speechdown_core::ports::routes;
use speechdown_core::{
    schema_for, ActivityRepository, ClientConfig, ClientError, ClientResult, SpeechSynthesizer,
    UserDirectory,
};

/// HTTP client for the SpeechDown REST backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Send a request and turn any non-2xx answer into a `ClientError`
    async fn execute(request: Result<Request, gloo::net::Error>) -> ClientResult<Response> {
        let request = request.map_err(|e| ClientError::Network(format!("Failed to build request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &status_text, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

/// Map a failed response to an error, preferring the backend's `{"error": ...}` message
pub fn status_error(status: u16, status_text: &str, body: &str) -> ClientError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status_text.to_string(),
    };
    if status == 404 {
        ClientError::NotFound(message)
    } else {
        ClientError::Server { status, message }
    }
}

#[async_trait(?Send)]
impl ActivityRepository for ApiClient {
    async fn list_activities(&self) -> ClientResult<Vec<Activity>> {
        let response = Self::execute(Request::get(&self.url(routes::ACTIVITIES)).build()).await?;
        Self::decode(response).await
    }

    async fn get_activity(&self, id: &str) -> ClientResult<Activity> {
        let response = Self::execute(Request::get(&self.url(&routes::activity(id))).build()).await?;
        Self::decode(response).await
    }

    async fn create_activity(&self, activity: &NewActivity) -> ClientResult<String> {
        let response = Self::execute(Request::post(&self.url(routes::ACTIVITIES)).json(activity)).await?;
        let created: CreatedResponse = Self::decode(response).await?;
        Ok(created.id)
    }

    async fn update_activity(&self, id: &str, update: &ActivityUpdate) -> ClientResult<()> {
        Self::execute(Request::put(&self.url(&routes::activity(id))).json(update)).await?;
        Ok(())
    }

    async fn delete_activity(&self, id: &str) -> ClientResult<()> {
        Self::execute(Request::delete(&self.url(&routes::activity(id))).build()).await?;
        Ok(())
    }

    async fn generate_activity(&self, request: &GenerationRequest) -> ClientResult<Activity> {
        let endpoint = schema_for(request.category()).endpoint;
        let response = Self::execute(Request::post(&self.url(endpoint)).json(request)).await?;
        Self::decode(response).await
    }

    async fn record_progress(&self, activity_id: &str, entry: &ProgressEntry) -> ClientResult<()> {
        let url = self.url(&routes::activity_progress(activity_id));
        Self::execute(Request::post(&url).json(entry)).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserDirectory for ApiClient {
    async fn list_users(&self) -> ClientResult<Vec<User>> {
        let response = Self::execute(Request::get(&self.url(routes::USERS)).build()).await?;
        Self::decode(response).await
    }
}

#[async_trait(?Send)]
impl SpeechSynthesizer for ApiClient {
    async fn synthesize(&self, text: &str) -> ClientResult<Vec<u8>> {
        let body = SpeechRequest {
            text: text.to_string(),
        };
        let response = Self::execute(Request::post(&self.url(routes::SPEECH)).json(&body)).await?;
        response
            .binary()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
