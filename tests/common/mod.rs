use tmlx::lang::{Dialect, ExitStatus};
use tmlx::mach::{Canvas, Options, Program, Runtime};

pub fn compile(source: &str) -> Program {
    compile_with(source, &Options::default())
}

pub fn compile_with(source: &str, options: &Options) -> Program {
    match Program::compile(source, options) {
        Ok(program) => program,
        Err(e) => panic!("{}", e),
    }
}

pub fn error(source: &str) -> String {
    error_with(source, &Options::default())
}

pub fn binary_error(source: &str) -> String {
    error_with(source, &Options::new(Dialect::Binary))
}

pub fn error_with(source: &str, options: &Options) -> String {
    match Program::compile(source, options) {
        Ok(_) => panic!("compiled without error: {:?}", source),
        Err(e) => e.to_string(),
    }
}

pub fn canvas(s: &str) -> Canvas {
    match s.parse() {
        Ok(canvas) => canvas,
        Err(e) => panic!("{}", e),
    }
}

pub struct Outcome {
    pub exit: Option<ExitStatus>,
    pub canvas: Canvas,
    pub executed: u64,
}

pub fn exec(program: Program, input: Canvas) -> Outcome {
    exec_n(program, input, 100_000)
}

/// Runs in slices of 1000 until exit or `cycles` instructions.
pub fn exec_n(program: Program, input: Canvas, cycles: u64) -> Outcome {
    let mut runtime = Runtime::new(program, input);
    while runtime.exit_status().is_none() && runtime.total_executed() < cycles {
        runtime.run(1000);
    }
    Outcome {
        exit: runtime.exit_status(),
        executed: runtime.total_executed(),
        canvas: runtime.into_canvas(),
    }
}
