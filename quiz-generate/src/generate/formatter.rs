use ::std::fmt::Write;
use common_types::Quiz::QuizKind;

pub const MINUS: &'static str = "−";

pub const UNKNOWNS: [&'static str; 5] = ["x", "y", "z", "a", "b"];

pub const READABLE_OPERATORS: [(&'static str, &'static str); 4] = [
    ("+", "plus"),
    ("−", "minus"),
    ("×", "times"),
    ("÷", "divided by"),
];

pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

pub fn format_arithmetic_raw(kind: QuizKind, x: i32, y: i32) -> String {
    format!("{x} {} {y}", kind.symbol())
}

/// `7 × 8` -> `7 times 8`, so screen readers do not swallow the operator.
pub fn format_readable_raw(textual: &str) -> String {
    let mut readable = textual.to_string();
    for (symbol, word) in READABLE_OPERATORS.iter() {
        readable = readable.replace(symbol, word);
    }
    readable
}

/// `mm:ss`, or `h:mm:ss` once an hour has passed.
pub fn format_elapsed_raw(seconds: u64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let minutes = minutes % 60;
    let seconds = seconds % 60;

    let mut result = String::new();
    if hours != 0 {
        write!(&mut result, "{hours}:").expect("format_elapsed_raw failed to write to string");
    }
    write!(&mut result, "{minutes:02}:{seconds:02}").expect("format_elapsed_raw failed to write to string");
    result
}

/// Replaces each `@name` with its value, first occurrence only.
pub fn replace_placeholders(text: &str, vars: &[(&str, String)]) -> String {
    let mut result = text.to_string();
    for (name, value) in vars.iter() {
        result = result.replacen(&format!("@{name}"), value, 1);
    }
    result
}
