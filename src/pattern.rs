use regex_automata::meta::{BuildError, Regex};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors produced while compiling a path glob or origin pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling pattern exceeded the configured budget ({elapsed:?} > {budget:?})")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

pub(crate) fn compile(pattern: &str) -> Result<Regex, PatternError> {
    compile_with_budget(pattern, PATTERN_COMPILE_BUDGET)
}

pub(crate) fn compile_ignore_case(pattern: &str) -> Result<Regex, PatternError> {
    compile_with_budget(&format!("(?i:{pattern})"), PATTERN_COMPILE_BUDGET)
}

pub(crate) fn compile_with_budget(
    pattern: &str,
    budget: Duration,
) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let started = Instant::now();
    let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout { elapsed, budget });
    }

    Ok(regex)
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
