pub fn is_i64_zero(v: i64) -> bool {
    v == 0
}

pub fn is_valid_frac_i64(_numerator: i64, denominator: i64) -> bool {
    !is_i64_zero(denominator)
}

/// Roots that make a trivial question.
pub fn is_degenerate_solution(solution: &str) -> bool {
    solution == "0" || solution == "1"
}
