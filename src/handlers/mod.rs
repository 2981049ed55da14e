pub mod answer;
pub mod game;
