use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{
    start_body, ActionResponse, Category, DataEnvelope, EmotionRequest, Mood, MonitorType,
    StatusResponse, StudentsResponse,
};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn student_data(
        &self,
        student: &str,
        category: Category,
    ) -> Result<DataEnvelope, ClientError> {
        debug!(%student, %category, "fetching student monitoring data");
        let envelope = self
            .http
            .get(self.url("/api/student_monitoring_data"))
            .query(&[("student", student), ("type", category.as_str())])
            .send()
            .await?
            .json()
            .await?;
        Ok(envelope)
    }

    pub async fn own_data(&self, category: Category) -> Result<DataEnvelope, ClientError> {
        debug!(%category, "fetching monitoring data");
        let envelope = self
            .http
            .get(self.url("/api/monitoring_data"))
            .query(&[("type", category.as_str())])
            .send()
            .await?
            .json()
            .await?;
        Ok(envelope)
    }

    pub async fn start_monitoring(
        &self,
        monitor_type: MonitorType,
        extra: &Map<String, Value>,
    ) -> Result<ActionResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/start_monitoring"))
            .json(&start_body(monitor_type, extra))
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }

    pub async fn stop_monitoring(&self) -> Result<ActionResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/stop_monitoring"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }

    pub async fn save_emotion(&self, mood: Mood) -> Result<ActionResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/save_emotion_selected"))
            .json(&EmotionRequest { mood_type: mood })
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }

    pub async fn students(&self) -> Result<StudentsResponse, ClientError> {
        let response = self
            .http
            .get(self.url("/api/students"))
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }

    pub async fn status(&self) -> Result<StatusResponse, ClientError> {
        let response = self
            .http
            .get(self.url("/api/status"))
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }
}
