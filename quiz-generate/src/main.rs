// Entry point: generate a quiz from the environment, then export it or play it

use ::std::fs::File;
use ::std::io::{self, BufRead, BufWriter, Write};
use quiz_generate::{
    config,
    generate::{self, formatter},
    session::{GameSession, SessionEvent, EVENT_LAST_SLIDE},
    QuizSet,
};

type Error = Box<dyn ::std::error::Error + Send + Sync>;

const SCORE_TEXT: &'static str = "Score: @score / @maxScore @percent";
const PERCENT_TEXT: &'static str = "(@percent% correct)";
const ARITHMETIC_HEADING: &'static str = "Pick the result of each calculation.";
const EQUATION_HEADING: &'static str = "Pick the value of the unknown in each equation.";
const TIME_TEXT: &'static str = "Time: @time";

fn load_quizset() -> Result<QuizSet, Error> {
    if let Some(ref path) = *config::QUIZ_IMPORT_PATH {
        tracing::info!("Importing quiz set from {path}");
        let quizset = generate::import(io::BufReader::new(File::open(path)?))?;
        return Ok(quizset);
    }
    let options = config::options_from_env()?;
    Ok(generate::generate(options)?)
}

fn play(quizset: QuizSet) -> Result<(), Error> {
    let max_score = quizset.max_score();
    let heading = if quizset.options().is_equation() { EQUATION_HEADING } else { ARITHMETIC_HEADING };
    let mut session = GameSession::from_quizset(quizset);
    session.events_mut().subscribe(EVENT_LAST_SLIDE, |event: &SessionEvent| {
        if let SessionEvent::Finished(summary) = event {
            match serde_json::to_string(summary) {
                Ok(report) => println!("{report}"),
                Err(err) => tracing::error!("Failed to serialize summary: {err}"),
            }
        }
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    writeln!(stdout, "{heading}")?;
    session.start();
    while let Some(reveal) = session.reveal() {
        if let Some(question) = session.current_question() {
            writeln!(stdout, "\n{} = ?  ({})", question.textual(), formatter::format_readable_raw(question.textual()))?;
        }
        for (index, label) in reveal.alternatives.iter().enumerate() {
            writeln!(stdout, "  {}) {}", index + 1, label)?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            tracing::warn!("Input closed before the quiz finished");
            break;
        };
        let choice = match line?.trim().parse::<usize>() {
            Ok(choice) if choice >= 1 => choice - 1,
            _ => {
                writeln!(stdout, "Pick a number between 1 and {}", reveal.alternatives.len())?;
                continue;
            },
        };
        match session.answer(choice) {
            Ok(outcome) if outcome.correct => writeln!(stdout, "Correct!")?,
            Ok(outcome) => writeln!(stdout, "Wrong, the answer was {}", outcome.correct_label)?,
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }

    let summary = session.summary();
    let percent = formatter::replace_placeholders(PERCENT_TEXT, &[("percent", summary.percent().to_string())]);
    writeln!(stdout, "{}", formatter::replace_placeholders(SCORE_TEXT, &[
        ("score", summary.score.to_string()),
        ("maxScore", max_score.to_string()),
        ("percent", percent),
    ]))?;
    writeln!(stdout, "{}", formatter::replace_placeholders(TIME_TEXT, &[
        ("time", formatter::format_elapsed_raw(summary.elapsed_seconds)),
    ]))?;
    Ok(())
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let quizset = load_quizset().map_err(|err| {
        tracing::error!("Failed to prepare quiz: {err}");
        err
    })?;

    if let Some(ref path) = *config::QUIZ_EXPORT_PATH {
        let writer = BufWriter::new(File::create(path)?);
        generate::export(&quizset, writer)?;
        tracing::info!("Exported session {} to {path}", quizset.session_id());
        return Ok(());
    }

    play(quizset)
}
