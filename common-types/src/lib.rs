#[allow(non_snake_case)]
pub mod Quiz {
    use ::std::fmt;
    use ::std::str;
    use serde::{Deserialize, Serialize};
    use derive_builder::Builder;

    #[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum QuizKind {
        #[default]
        Addition,
        Subtraction,
        Multiplication,
        Division,
    }

    impl QuizKind {
        pub fn symbol(&self) -> &'static str {
            match self {
                QuizKind::Addition => "+",
                QuizKind::Subtraction => "−",
                QuizKind::Multiplication => "×",
                QuizKind::Division => "÷",
            }
        }
    }

    impl fmt::Display for QuizKind {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                QuizKind::Addition => write!(f, "addition"),
                QuizKind::Subtraction => write!(f, "subtraction"),
                QuizKind::Multiplication => write!(f, "multiplication"),
                QuizKind::Division => write!(f, "division"),
            }
        }
    }

    impl str::FromStr for QuizKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "addition" => Ok(QuizKind::Addition),
                "subtraction" => Ok(QuizKind::Subtraction),
                "multiplication" => Ok(QuizKind::Multiplication),
                "division" => Ok(QuizKind::Division),
                _ => Err(format!("'{}' is not a valid QuizKind", s)),
            }
        }
    }

    #[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum EquationTier {
        Basic,
        Intermediate,
        Advanced,
    }

    impl fmt::Display for EquationTier {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                EquationTier::Basic => write!(f, "basic"),
                EquationTier::Intermediate => write!(f, "intermediate"),
                EquationTier::Advanced => write!(f, "advanced"),
            }
        }
    }

    impl str::FromStr for EquationTier {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "basic" => Ok(EquationTier::Basic),
                "intermediate" => Ok(EquationTier::Intermediate),
                "advanced" => Ok(EquationTier::Advanced),
                _ => Err(format!("'{}' is not a valid EquationTier", s)),
            }
        }
    }

    /// Everything the generator needs to build one quiz session.
    ///
    /// `max_questions` of `None` keeps the whole candidate space.
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default, Builder)]
    pub struct QuizOptions {
        #[builder(default)]
        pub kind: QuizKind,
        #[builder(setter(into, strip_option), default)]
        pub equation_tier: Option<EquationTier>,
        #[builder(setter(into, strip_option), default)]
        pub max_questions: Option<usize>,
        #[builder(default)]
        pub use_fractions: bool,
    }

    impl QuizOptions {
        pub fn is_equation(&self) -> bool {
            self.equation_tier.is_some()
        }
    }

    pub fn str_to_quiz_kind<T: AsRef<str>>(kind: T) -> Result<QuizKind, String> {
        kind.as_ref().trim().to_lowercase().parse()
    }
    pub fn str_to_equation_tier<T: AsRef<str>>(tier: T) -> Result<EquationTier, String> {
        tier.as_ref().trim().to_lowercase().parse()
    }
    pub fn str_to_max_questions<T: AsRef<str>>(value: T) -> Result<usize, String> {
        let value = value.as_ref().trim();
        value.parse::<usize>()
            .map_err(|_| format!("'{}' is not a valid question count", value))
    }
}

#[allow(non_snake_case)]
pub mod Session {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Serialize};

    /// What the host gets told once the last question has been answered.
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct SessionSummary {
        pub score: u32,
        pub total_questions: usize,
        pub elapsed_seconds: u64,
        pub finished_on: NaiveDateTime,
    }

    impl SessionSummary {
        pub fn percent(&self) -> u32 {
            if self.total_questions == 0 {
                return 0;
            }
            ((self.score as f64 / self.total_questions as f64) * 100.0).round() as u32
        }
    }
}
