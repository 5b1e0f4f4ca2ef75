use std::time::Duration;

use crate::CallError;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub purge_path: String,
    pub submit_path: String,
    pub connect_timeout: Duration,
    /// No overall deadline by default: the submission endpoint runs the whole
    /// dubbing job before answering and can legitimately take minutes.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            purge_path: "/purge_temp".to_string(),
            submit_path: "/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// POST the purge endpoint with an empty body and read the body as text.
    async fn purge(&self) -> Result<String, CallError>;

    /// POST the fields to the submission endpoint as multipart form data and
    /// read the body as text.
    async fn submit(&self, fields: &[(String, String)]) -> Result<String, CallError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    settings: ClientSettings,
}

impl ReqwestGateway {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, CallError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(deadline) = self.settings.request_timeout {
            builder = builder.timeout(deadline);
        }
        builder
            .build()
            .map_err(|err| CallError::Network(err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, CallError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| CallError::InvalidEndpoint(err.to_string()))?;
        base.join(path)
            .map_err(|err| CallError::InvalidEndpoint(err.to_string()))
    }

    async fn read_text(response: reqwest::Response) -> Result<String, CallError> {
        // The status is never inspected; the server embeds its errors in the
        // body it returns.
        response.text().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl Gateway for ReqwestGateway {
    async fn purge(&self) -> Result<String, CallError> {
        let url = self.endpoint(&self.settings.purge_path)?;
        let client = self.build_client()?;

        let response = client.post(url).send().await.map_err(map_reqwest_error)?;
        Self::read_text(response).await
    }

    async fn submit(&self, fields: &[(String, String)]) -> Result<String, CallError> {
        let url = self.endpoint(&self.settings.submit_path)?;
        let client = self.build_client()?;

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_text(response).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CallError {
    if err.is_timeout() {
        return CallError::Timeout;
    }
    if err.is_connect() {
        return CallError::Connect(err.to_string());
    }
    CallError::Network(err.to_string())
}
