use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::models::{GameType, RawMcqQuestion, RawOpenQuestion, RawQuestions};
use crate::names;

#[derive(Serialize)]
struct QuestionsRequest<'a> {
    amount: i64,
    topic: &'a str,
    #[serde(rename = "type")]
    game_type: GameType,
}

#[derive(Deserialize)]
struct McqBatch {
    questions: Vec<RawMcqQuestion>,
}

#[derive(Deserialize)]
struct OpenEndedBatch {
    questions: Vec<RawOpenQuestion>,
}

/// Client for the external question generation service. One call per game
/// creation; a failed call fails the whole request, no retries.
#[derive(Clone)]
pub struct QuestionProvider {
    client: reqwest::Client,
    base_url: String,
}

impl QuestionProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn fetch(
        &self,
        topic: &str,
        game_type: GameType,
        amount: i64,
    ) -> Result<RawQuestions> {
        let resp = self
            .client
            .post(format!(
                "{}{}",
                self.base_url,
                names::PROVIDER_QUESTIONS_PATH
            ))
            .json(&QuestionsRequest {
                amount,
                topic,
                game_type,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("question provider error: {status} - {text}");
            color_eyre::eyre::bail!("question provider returned {status}");
        }

        // The response shape depends on the requested variant, so decode
        // into the matching branch of the sum type.
        let questions = match game_type {
            GameType::Mcq => RawQuestions::Mcq(resp.json::<McqBatch>().await?.questions),
            GameType::OpenEnded => {
                RawQuestions::OpenEnded(resp.json::<OpenEndedBatch>().await?.questions)
            }
        };

        tracing::info!(
            "fetched {} {} questions for topic '{topic}'",
            questions.len(),
            game_type.as_str()
        );
        Ok(questions)
    }
}
