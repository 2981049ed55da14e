mod common;

use quizsmith::{
    AppState,
    models::{GameView, RawOpenQuestion, RawQuestions},
    names,
    play::{HttpScorer, PlayAnswer, PlaySession, PlayState},
    provider::QuestionProvider,
    router,
};

/// Full open-ended round trip: fetch the play view over HTTP, drive the
/// session state machine, and score answers through the live
/// answer-check endpoint.
#[tokio::test]
async fn open_ended_play_round_trip_through_the_api() {
    let db = common::create_test_db().await;
    let (user_id, session) = common::create_test_user(&db).await;

    let raw = RawQuestions::OpenEnded(vec![
        RawOpenQuestion {
            question: "Capital of Italy?".to_string(),
            answer: "Rome".to_string(),
        },
        RawOpenQuestion {
            question: "Capital of France?".to_string(),
            answer: "Paris".to_string(),
        },
    ]);
    let game_id = db
        .create_game_with_questions(user_id, "Capitals", &raw)
        .await
        .unwrap();

    let app = router(AppState {
        db,
        provider: QuestionProvider::new("http://127.0.0.1:9".to_string()),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let base_url = format!("http://{addr}");

    let client = reqwest::Client::new();
    let view: GameView = client
        .get(format!("{base_url}{}", names::game_url(&game_id)))
        .header(
            reqwest::header::COOKIE,
            common::session_cookie(&session),
        )
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view.questions.len(), 2);

    let mut play = PlaySession::from_view(view).unwrap();
    let scorer = HttpScorer::new(base_url, session);

    // Exact answer scores 100: (0 + 100) / 1.
    let state = play
        .advance(&scorer, PlayAnswer::Text("Rome".to_string()))
        .await
        .unwrap();
    assert_eq!(
        *state,
        PlayState::Active {
            question_index: 1,
            elapsed_seconds: 0
        }
    );

    // Empty input scores 0, so the final figure is (100 + 0) / 2.
    let state = play
        .advance(&scorer, PlayAnswer::Text(String::new()))
        .await
        .unwrap();
    assert_eq!(
        *state,
        PlayState::Ended {
            average_score: 50.0
        }
    );
}
