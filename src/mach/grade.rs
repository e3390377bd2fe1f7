use super::{Canvas, Program, Runtime};
use crate::lang::ExitStatus;
use log::{debug, info};

/// One unit test: run on `input`, expect `exit_status` and, when
/// given, the final canvas `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: Canvas,
    pub output: Option<Canvas>,
    pub exit_status: ExitStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// A test running longer than this fails.
    pub max_instructions: u64,
    /// Budget per call to `Runtime::run`.
    pub frame: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_instructions: 10_000_000,
            frame: 100_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    ExitStatus {
        expected: ExitStatus,
        actual: ExitStatus,
    },
    Output,
    TimedOut,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Failure::ExitStatus { expected, actual } => {
                write!(f, "expected exit {}, got exit {}", expected, actual)
            }
            Failure::Output => write!(f, "canvas does not match"),
            Failure::TimedOut => write!(f, "did not exit"),
        }
    }
}

/// How a passing program compares with the known solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Longer,
    Shortest,
    /// Shorter than the known solution.
    Unknown,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Longer => Ok(()),
            Verdict::Shortest => write!(f, "You found the shortest solution!"),
            Verdict::Unknown => write!(f, "Congratulations, you found an unknown solution."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub stars: u8,
    pub verdict: Verdict,
}

impl Score {
    pub fn new(count: usize, target: usize) -> Score {
        let verdict = if count > target {
            Verdict::Longer
        } else if count == target {
            Verdict::Shortest
        } else {
            Verdict::Unknown
        };
        Score {
            stars: stars(count, target),
            verdict,
        }
    }
}

/// 3 stars at or under `target` instructions, none past twice that.
pub fn stars(count: usize, target: usize) -> u8 {
    let count = count as f64;
    let target = target as f64;
    if count > target * 2.0 {
        0
    } else if count > target * 1.5 {
        1
    } else if count > target {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// `test` is zero based.
    Failed { test: usize, failure: Failure },
    Passed {
        /// Percent of branches run over all tests.
        coverage: usize,
        instruction_count: usize,
        /// Present when a solution to compare with was given.
        score: Option<Score>,
    },
}

impl Report {
    pub fn is_passed(&self) -> bool {
        matches!(self, Report::Passed { .. })
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Report::Failed { test, .. } => write!(f, "Unit Test {} Failed!", test + 1),
            Report::Passed { coverage, .. } => write!(f, "{}% Coverage", coverage),
        }
    }
}

/// Run every test in order, stopping at the first failure. `target`
/// is the instruction count of the known solution.
pub fn grade(program: Program, tests: &[TestCase], target: Option<usize>, limits: &Limits) -> Report {
    let instruction_count = program.instruction_count();
    let mut runtime = match tests.first() {
        Some(test) => Runtime::new(program, test.input.clone()),
        None => {
            return Report::Passed {
                coverage: 0,
                instruction_count,
                score: target.map(|t| Score::new(instruction_count, t)),
            }
        }
    };
    for (index, test) in tests.iter().enumerate() {
        runtime.reset(test.input.clone());
        if let Err(failure) = run_test(&mut runtime, test, limits) {
            info!("unit test {} failed: {}", index + 1, failure);
            return Report::Failed {
                test: index,
                failure,
            };
        }
        debug!("unit test {} passed", index + 1);
    }
    let coverage = runtime
        .coverage()
        .percentage(runtime.program().instructions());
    Report::Passed {
        coverage,
        instruction_count,
        score: target.map(|t| Score::new(instruction_count, t)),
    }
}

fn run_test(runtime: &mut Runtime, test: &TestCase, limits: &Limits) -> Result<(), Failure> {
    let frame = limits.frame.max(1);
    let status = loop {
        if let Some(status) = runtime.exit_status() {
            break status;
        }
        if runtime.total_executed() >= limits.max_instructions {
            return Err(Failure::TimedOut);
        }
        let remaining = limits.max_instructions - runtime.total_executed();
        let budget = (frame as u64).min(remaining) as usize;
        runtime.run(budget);
    };
    if status != test.exit_status {
        return Err(Failure::ExitStatus {
            expected: test.exit_status,
            actual: status,
        });
    }
    match &test.output {
        Some(output) if output != runtime.canvas() => Err(Failure::Output),
        _ => Ok(()),
    }
}
