//! Client side of the HTTP API used by the panels

use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ai::{ChatMessage, Syllabus, TutorAnswer};
use crate::api::public::ErrorResponse;
use crate::api::public::syllabus::SyllabusRequest;
use crate::api::public::transcript::TranscriptRequest;
use crate::api::public::tutor::TutorRequest;
use crate::youtube::Transcript;

#[async_trait]
pub trait LearningApi {
    async fn generate_syllabus(&self, topic: &str) -> Result<Syllabus>;
    async fn get_transcript(&self, video_url: &str) -> Result<Transcript>;
    async fn ask_tutor(
        &self,
        question: &str,
        transcript: &str,
        chat_history: &[ChatMessage],
    ) -> Result<TutorAnswer>;
}

/// Talks to a running `learnpath serve` instance
#[derive(Clone, Debug)]
pub struct HttpLearningApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLearningApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = format!("{}/api/{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(120))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the server's message over the bare status
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("Request to {} failed with status {}", path, status),
            };
            return Err(anyhow!(message));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LearningApi for HttpLearningApi {
    async fn generate_syllabus(&self, topic: &str) -> Result<Syllabus> {
        let body = SyllabusRequest {
            topic: Some(topic.to_string()),
        };
        self.post("generate-syllabus", &body).await
    }

    async fn get_transcript(&self, video_url: &str) -> Result<Transcript> {
        let body = TranscriptRequest {
            video_url: Some(video_url.to_string()),
        };
        self.post("get-transcript", &body).await
    }

    async fn ask_tutor(
        &self,
        question: &str,
        transcript: &str,
        chat_history: &[ChatMessage],
    ) -> Result<TutorAnswer> {
        let body = TutorRequest {
            question: Some(question.to_string()),
            transcript: Some(transcript.to_string()),
            chat_history: Some(chat_history.to_vec()),
        };
        self.post("tutor", &body).await
    }
}
