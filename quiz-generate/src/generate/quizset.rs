use chrono::{NaiveDateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use common_types::Quiz::QuizOptions;

use super::engine::{self, GenerateResult};
use super::question::QuestionType;

/// One session's worth of generated questions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QuizSet {
    session_id: uuid::Uuid,
    created_on: NaiveDateTime,
    options: QuizOptions,
    questions: Vec<QuestionType>,
}
impl QuizSet {
    pub fn new(options: QuizOptions) -> Self {
        Self {
            options,
            session_id: uuid::Uuid::new_v4(),
            created_on: Utc::now().naive_utc(),
            questions: Vec::new(),
        }
    }
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GenerateResult<()> {
        self.questions = engine::generate_questions(rng, &self.options)?;
        Ok(())
    }
    pub fn session_id(&self) -> uuid::Uuid {
        self.session_id
    }
    pub fn created_on(&self) -> NaiveDateTime {
        self.created_on
    }
    pub fn options(&self) -> &QuizOptions {
        &self.options
    }
    pub fn questions(&self) -> &[QuestionType] {
        &self.questions
    }
    /// Each correct answer scores one point.
    pub fn max_score(&self) -> usize {
        self.questions.len()
    }
    pub fn into_questions(self) -> Vec<QuestionType> {
        self.questions
    }
}
