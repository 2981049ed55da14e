//! Play-side session driver for a created game.
//!
//! An explicit state machine rather than callback-driven UI state: the
//! host renders from [`PlayState`], feeds answers through
//! [`PlaySession::advance`], and drives the clock with
//! [`PlaySession::tick`].

use chrono::{DateTime, Utc};
use color_eyre::Result;

use crate::models::{AnswerCheck, CheckAnswerBody, GameType, GameView};
use crate::names;

/// One question as the player sees it. `options` is present for multiple
/// choice and absent for open ended.
#[derive(Debug, Clone)]
pub struct PlayQuestion {
    pub id: String,
    pub question: String,
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayState {
    Active {
        question_index: usize,
        elapsed_seconds: i64,
    },
    Ended {
        average_score: f64,
    },
}

/// The player's input for one advance step.
#[derive(Debug, Clone)]
pub enum PlayAnswer {
    /// Index of the chosen option (multiple choice).
    Choice(usize),
    /// Free-text answer (open ended).
    Text(String),
}

/// Scores a free-text answer against a question's stored answer,
/// returning a 0-100 percentage.
pub trait ScoreAnswers {
    fn score(
        &self,
        question_id: &str,
        user_input: &str,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;
}

pub struct PlaySession {
    game_type: GameType,
    time_started: DateTime<Utc>,
    questions: Vec<PlayQuestion>,
    selections: Vec<usize>,
    average_score: f64,
    state: PlayState,
}

impl PlaySession {
    pub fn new(
        game_type: GameType,
        time_started: DateTime<Utc>,
        questions: Vec<PlayQuestion>,
    ) -> Result<Self> {
        if questions.is_empty() {
            color_eyre::eyre::bail!("cannot play a game without questions");
        }

        Ok(Self {
            game_type,
            time_started,
            questions,
            selections: Vec::new(),
            average_score: 0.0,
            state: PlayState::Active {
                question_index: 0,
                elapsed_seconds: 0,
            },
        })
    }

    pub fn from_view(view: GameView) -> Result<Self> {
        let questions = view
            .questions
            .into_iter()
            .map(|q| PlayQuestion {
                id: q.question_id,
                question: q.question,
                options: q.options,
            })
            .collect();
        Self::new(view.game_type, view.time_started, questions)
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    pub fn current_question(&self) -> Option<&PlayQuestion> {
        match self.state {
            PlayState::Active { question_index, .. } => self.questions.get(question_index),
            PlayState::Ended { .. } => None,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Option indexes picked so far, one per answered multiple-choice
    /// question.
    pub fn selections(&self) -> &[usize] {
        &self.selections
    }

    /// Recompute the elapsed clock. Presentational only; the host calls
    /// this once per second and stops once the state is `Ended`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let PlayState::Active {
            elapsed_seconds, ..
        } = &mut self.state
        {
            *elapsed_seconds = (now - self.time_started).num_seconds();
        }
    }

    /// Submit the answer for the current question and move on, ending the
    /// session after the last question.
    ///
    /// Open-ended answers go through `scorer`; the running figure is then
    /// recomputed as `(previous_average + score) / (question_index + 1)`,
    /// a two-term average at every step. Multiple-choice answers are only
    /// recorded; no scoring call is made for them.
    ///
    /// A scoring failure leaves the state untouched so the step can be
    /// retried. `&mut self` keeps at most one scoring call in flight.
    pub async fn advance<S: ScoreAnswers>(
        &mut self,
        scorer: &S,
        answer: PlayAnswer,
    ) -> Result<&PlayState> {
        let PlayState::Active {
            question_index,
            elapsed_seconds,
        } = self.state
        else {
            return Ok(&self.state);
        };

        match (self.game_type, answer) {
            (GameType::OpenEnded, PlayAnswer::Text(input)) => {
                let question = &self.questions[question_index];
                let score = scorer.score(&question.id, &input).await?;
                self.average_score =
                    (self.average_score + score as f64) / (question_index as f64 + 1.0);
            }
            (GameType::Mcq, PlayAnswer::Choice(option_index)) => {
                self.selections.push(option_index);
            }
            (game_type, answer) => {
                color_eyre::eyre::bail!(
                    "answer {answer:?} does not fit a {} game",
                    game_type.as_str()
                );
            }
        }

        self.state = if question_index == self.questions.len() - 1 {
            PlayState::Ended {
                average_score: self.average_score,
            }
        } else {
            PlayState::Active {
                question_index: question_index + 1,
                elapsed_seconds,
            }
        };

        Ok(&self.state)
    }
}

/// Scorer backed by the service's answer-check endpoint, authenticated
/// with the caller's session cookie.
pub struct HttpScorer {
    client: reqwest::Client,
    base_url: String,
    session: String,
}

impl HttpScorer {
    pub fn new(base_url: String, session: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            session,
        }
    }
}

impl ScoreAnswers for HttpScorer {
    async fn score(&self, question_id: &str, user_input: &str) -> Result<i64> {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, names::CHECK_ANSWER_URL))
            .header(
                reqwest::header::COOKIE,
                format!("{}={}", names::USER_SESSION_COOKIE_NAME, self.session),
            )
            .json(&CheckAnswerBody {
                question_id: question_id.to_string(),
                user_input: user_input.to_string(),
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            color_eyre::eyre::bail!("answer check returned {}", resp.status());
        }

        let check: AnswerCheck = resp.json().await?;
        Ok(check.percentage_similar)
    }
}
