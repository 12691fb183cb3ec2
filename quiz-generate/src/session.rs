use ::std::time::{Duration, Instant};
use chrono::Utc;
use thiserror::Error;
use common_types::Session::SessionSummary;

use crate::events::EventDispatcher;
use crate::generate::{question::QuestionType, QuizSet};

pub const EVENT_STARTED: &'static str = "started-quiz";
pub const EVENT_ALTERNATIVE_CHOSEN: &'static str = "alternative-chosen";
pub const EVENT_LAST_SLIDE: &'static str = "last-slide";
pub const EVENT_RETRY: &'static str = "retry";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Started { total_questions: usize },
    AlternativeChosen { question: usize, alternative: usize, correct: bool },
    Finished(SessionSummary),
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the quiz has not been started")]
    NotStarted,
    #[error("every question has already been answered")]
    AlreadyFinished,
    #[error("alternative {index} does not exist, there are {available}")]
    NoSuchAlternative { index: usize, available: usize },
}

/// Elapsed time that survives pauses.
#[derive(Debug, Default, Clone)]
pub struct Stopwatch {
    running_since: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }
    pub fn pause(&mut self) -> Duration {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
        self.accumulated
    }
    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + since.elapsed(),
            None => self.accumulated,
        }
    }
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }
    pub fn reset(&mut self) {
        self.running_since = None;
        self.accumulated = Duration::ZERO;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub alternatives: Vec<String>,
    pub correct_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_label: String,
    pub finished: bool,
}

/// Walks a player through a generated question list once, keeping score.
#[derive(Debug)]
pub struct GameSession {
    questions: Vec<QuestionType>,
    current: usize,
    score: u32,
    started: bool,
    timer: Stopwatch,
    events: EventDispatcher<SessionEvent>,
}

impl GameSession {
    pub fn new(questions: Vec<QuestionType>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            started: false,
            timer: Stopwatch::default(),
            events: EventDispatcher::new(),
        }
    }

    pub fn from_quizset(quizset: QuizSet) -> Self {
        Self::new(quizset.into_questions())
    }

    pub fn events_mut(&mut self) -> &mut EventDispatcher<SessionEvent> {
        &mut self.events
    }

    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.timer.start();
        self.events.publish(EVENT_STARTED, &SessionEvent::Started { total_questions: self.questions.len() });
        if self.is_finished() {
            self.finish();
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
    pub fn current_index(&self) -> usize {
        self.current
    }
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn current_question(&self) -> Option<&QuestionType> {
        self.questions.get(self.current)
    }

    /// The alternatives of the current question in display order. The order is
    /// fixed at generation time, so repeated calls agree.
    pub fn reveal(&self) -> Option<Reveal> {
        let question = self.current_question()?;
        Some(Reveal {
            alternatives: question.alternative_labels(),
            correct_index: question.correct_index(),
        })
    }

    pub fn answer(&mut self, alternative: usize) -> Result<AnswerOutcome, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::AlreadyFinished);
        };
        let available = question.alternative_count();
        if alternative >= available {
            return Err(SessionError::NoSuchAlternative { index: alternative, available });
        }

        let correct = question.is_correct(alternative);
        let correct_label = question.correct_label();
        if correct {
            self.score += 1;
        }
        self.events.publish(EVENT_ALTERNATIVE_CHOSEN, &SessionEvent::AlternativeChosen {
            question: self.current,
            alternative,
            correct,
        });

        self.current += 1;
        let finished = self.is_finished();
        if finished {
            self.finish();
        }
        Ok(AnswerOutcome { correct, correct_label, finished })
    }

    fn finish(&mut self) {
        self.timer.pause();
        let summary = self.summary();
        tracing::info!("Quiz finished with {} / {}", summary.score, summary.total_questions);
        self.events.publish(EVENT_LAST_SLIDE, &SessionEvent::Finished(summary));
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            total_questions: self.questions.len(),
            elapsed_seconds: self.timer.elapsed().as_secs(),
            finished_on: Utc::now().naive_utc(),
        }
    }

    /// Back to the first question with a zero score, same questions.
    pub fn reset(&mut self) {
        self.score = 0;
        self.current = 0;
        self.started = false;
        self.timer.reset();
        self.events.publish(EVENT_RETRY, &SessionEvent::Retry);
    }
}
