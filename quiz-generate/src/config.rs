use lazy_static::lazy_static;
use thiserror::Error;
use common_types::Quiz::{self, QuizOptions, QuizOptionsBuilder};

lazy_static!{
    static ref QUIZ_TYPE: Option<String> = dotenvy::var("QUIZ_TYPE").ok();
    static ref QUIZ_EQUATION_TYPE: Option<String> = dotenvy::var("QUIZ_EQUATION_TYPE").ok();
    static ref QUIZ_MAX_QUESTIONS: Option<String> = dotenvy::var("QUIZ_MAX_QUESTIONS").ok();
    static ref QUIZ_USE_FRACTIONS: Option<String> = dotenvy::var("QUIZ_USE_FRACTIONS").ok();
    pub static ref QUIZ_EXPORT_PATH: Option<String> = dotenvy::var("QUIZ_EXPORT_PATH").ok();
    pub static ref QUIZ_IMPORT_PATH: Option<String> = dotenvy::var("QUIZ_IMPORT_PATH").ok();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

fn invalid(name: &'static str) -> impl Fn(String) -> ConfigError {
    move |reason| ConfigError::InvalidValue { name, reason }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(format!("'{}' is not a valid flag", other)),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builds options from raw values; blank values count as unset.
pub fn options_from(
    kind: Option<&str>,
    equation_tier: Option<&str>,
    max_questions: Option<&str>,
    use_fractions: Option<&str>,
) -> Result<QuizOptions, ConfigError> {
    let mut builder = QuizOptionsBuilder::default();
    if let Some(kind) = present(kind) {
        builder.kind(Quiz::str_to_quiz_kind(kind).map_err(invalid("QUIZ_TYPE"))?);
    }
    if let Some(tier) = present(equation_tier) {
        builder.equation_tier(Quiz::str_to_equation_tier(tier).map_err(invalid("QUIZ_EQUATION_TYPE"))?);
    }
    if let Some(max) = present(max_questions) {
        builder.max_questions(Quiz::str_to_max_questions(max).map_err(invalid("QUIZ_MAX_QUESTIONS"))?);
    }
    if let Some(flag) = present(use_fractions) {
        builder.use_fractions(parse_bool(flag).map_err(invalid("QUIZ_USE_FRACTIONS"))?);
    }
    builder.build().map_err(|err| ConfigError::InvalidValue { name: "options", reason: err.to_string() })
}

pub fn options_from_env() -> Result<QuizOptions, ConfigError> {
    options_from(
        QUIZ_TYPE.as_deref(),
        QUIZ_EQUATION_TYPE.as_deref(),
        QUIZ_MAX_QUESTIONS.as_deref(),
        QUIZ_USE_FRACTIONS.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_types::Quiz::{EquationTier, QuizKind};

    #[test]
    fn defaults_when_unset() {
        let options = options_from(None, None, None, Some("")).unwrap();
        assert_eq!(options, QuizOptions::default());
        assert_eq!(options.kind, QuizKind::Addition);
        assert_eq!(options.max_questions, None);
    }

    #[test]
    fn parses_every_field() {
        let options = options_from(Some("division"), Some("advanced"), Some("12"), Some("true")).unwrap();
        assert_eq!(options.kind, QuizKind::Division);
        assert_eq!(options.equation_tier, Some(EquationTier::Advanced));
        assert_eq!(options.max_questions, Some(12));
        assert!(options.use_fractions);
    }

    #[test]
    fn rejects_bad_values() {
        let err = options_from(None, None, Some("-1"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "QUIZ_MAX_QUESTIONS", .. }));
        let err = options_from(Some("exponent"), None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "QUIZ_TYPE", .. }));
        assert!(options_from(None, None, None, Some("maybe")).is_err());
        assert_eq!(parse_bool(" NO "), Ok(false));
        assert!(parse_bool("").is_err());
    }
}
