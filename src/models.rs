// Wire models shared by handlers, the provider client, and the play module.

use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

/// The two quiz variants. Stored as `mcq` / `open_ended` in the database and
/// used verbatim on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Mcq,
    OpenEnded,
}

impl GameType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::OpenEnded => "open_ended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mcq" => Some(Self::Mcq),
            "open_ended" => Some(Self::OpenEnded),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGameBody {
    #[garde(length(min = crate::names::MIN_TOPIC_LENGTH, max = crate::names::MAX_TOPIC_LENGTH))]
    pub topic: String,
    #[serde(rename = "type")]
    #[garde(skip)]
    pub game_type: GameType,
    #[garde(range(min = crate::names::MIN_AMOUNT, max = crate::names::MAX_AMOUNT))]
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGame {
    pub game_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerBody {
    pub question_id: String,
    pub user_input: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCheck {
    pub percentage_similar: i64,
}

/// A game in playable form: question texts plus, for multiple choice, the
/// shuffled options. Correct answers never leave the server here; scoring
/// goes through the answer-check endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub game_id: String,
    pub topic: String,
    pub game_type: GameType,
    pub time_started: DateTime<Utc>,
    pub questions: Vec<PlayQuestionView>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayQuestionView {
    pub question_id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: String,
    pub topic: String,
    pub game_type: GameType,
    pub time_started: DateTime<Utc>,
}

/// One raw multiple-choice item as returned by the question provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMcqQuestion {
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub answer: String,
}

/// One raw open-ended item as returned by the question provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOpenQuestion {
    pub question: String,
    pub answer: String,
}

/// Provider output, keyed by the quiz variant it was requested for. Keeping
/// the variant in the type means a question batch can never be attached to a
/// game of the other type.
#[derive(Debug, Clone)]
pub enum RawQuestions {
    Mcq(Vec<RawMcqQuestion>),
    OpenEnded(Vec<RawOpenQuestion>),
}

impl RawQuestions {
    pub fn game_type(&self) -> GameType {
        match self {
            Self::Mcq(_) => GameType::Mcq,
            Self::OpenEnded(_) => GameType::OpenEnded,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Mcq(items) => items.len(),
            Self::OpenEnded(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
