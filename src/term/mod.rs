use ansi_term::Style;
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tmlx::lang::{Color, Dialect, Error, ExitStatus, Strictness};
use tmlx::mach::{
    grade, Canvas, Clock, Limits, Listing, Options, Program, Report, Runtime, TestCase, MAX_IPF,
    NORMAL_IPS, TURBO_MULTIPLIER,
};

mod debugger;
mod paint;

/// Exit code after Ctrl-C.
const INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(name = "tmlx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile, run and grade TMLX turtle machine programs.", long_about = None)]
#[command(after_help = "# Examples:\n\n\
    ## Paint a blank 16x16 canvas:\n\
    tmlx run paint.tmlx\n\n\
    ## Step through a program on a canvas from a file:\n\
    tmlx debug paint.tmlx --canvas start.txt -b 3\n\n\
    ## Grade against two unit tests:\n\
    tmlx check paint.tmlx --test in1.txt,out1.txt=0 --test in2.txt=1")]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a program and print what will run
    Compile {
        #[clap(flatten)]
        source: SourceArgs,
    },
    /// Run a program until it exits
    Run {
        #[clap(flatten)]
        source: SourceArgs,
        #[clap(flatten)]
        canvas: CanvasArgs,
        #[clap(flatten)]
        speed: SpeedArgs,
        /// Draw the canvas while running, paced by the instruction rate
        #[arg(short, long)]
        watch: bool,
    },
    /// Run a program under an interactive debugger
    Debug {
        #[clap(flatten)]
        source: SourceArgs,
        #[clap(flatten)]
        canvas: CanvasArgs,
        /// Stop on arriving at this line
        #[arg(short = 'b', long = "break", value_name = "LINE")]
        breakpoints: Vec<usize>,
    },
    /// Run a program against unit tests
    Check {
        #[clap(flatten)]
        source: SourceArgs,
        /// Input canvas file, optional expected output canvas file, expected exit status
        #[arg(long = "test", value_name = "INPUT[,OUTPUT]=STATUS", required = true)]
        tests: Vec<String>,
        /// Known solution to score against
        #[arg(long, value_name = "FILE")]
        solution: Option<PathBuf>,
        /// A test running longer than this fails
        #[arg(long, default_value_t = 10_000_000)]
        max_instructions: u64,
    },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum DialectArg {
    Binary,
    #[default]
    Palette,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Dialect {
        match arg {
            DialectArg::Binary => Dialect::Binary,
            DialectArg::Palette => Dialect::Palette,
        }
    }
}

#[derive(Clone, Debug, Args)]
struct SourceArgs {
    /// Program source file
    file: PathBuf,

    /// Language edition
    #[arg(long, value_enum, default_value_t)]
    dialect: DialectArg,

    /// Skip folding of non-moving chains
    #[arg(long)]
    no_optimize: bool,

    /// Reject chains that never move
    #[arg(long, conflicts_with = "permissive")]
    strict: bool,

    /// Allow chains that never move
    #[arg(long)]
    permissive: bool,
}

impl SourceArgs {
    fn dialect(&self) -> Dialect {
        self.dialect.into()
    }

    fn options(&self) -> Options {
        let strictness = if self.strict {
            Some(Strictness::Strict)
        } else if self.permissive {
            Some(Strictness::Permissive)
        } else {
            None
        };
        Options {
            dialect: self.dialect(),
            optimize: !self.no_optimize,
            strictness,
        }
    }

    fn compile(&self) -> Result<Program, TermError> {
        compile_file(&self.file, &self.options())
    }
}

#[derive(Clone, Debug, Args)]
struct CanvasArgs {
    /// Canvas file, one row of pixel letters per line, top row first
    #[arg(long, value_name = "FILE", conflicts_with_all = ["size", "seed"])]
    canvas: Option<PathBuf>,

    /// Size of a generated canvas [default: 16x16]
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    size: Option<(usize, usize)>,

    /// Fill the generated canvas with random pixels
    #[arg(long)]
    seed: Option<u64>,
}

impl CanvasArgs {
    fn canvas(&self, dialect: Dialect) -> Result<Canvas, TermError> {
        if let Some(path) = &self.canvas {
            return read_canvas(path);
        }
        let (width, height) = self.size.unwrap_or((16, 16));
        let canvas = match self.seed {
            Some(seed) => {
                let palette: &[Color] = match dialect {
                    Dialect::Binary => &[Color::White, Color::Black],
                    Dialect::Palette => &Color::ALL,
                };
                Canvas::random(width, height, &mut StdRng::seed_from_u64(seed), palette)?
            }
            None => Canvas::new(width, height)?,
        };
        Ok(canvas)
    }
}

#[derive(Clone, Debug, Args)]
struct SpeedArgs {
    /// Instructions per second with --watch
    #[arg(long, default_value_t = NORMAL_IPS)]
    ips: f64,

    /// Multiply the instruction rate
    #[arg(long)]
    turbo: bool,

    /// Rate multiplier for --turbo
    #[arg(long, default_value_t = TURBO_MULTIPLIER)]
    turbo_multiplier: f64,

    /// Most instructions run between two frames
    #[arg(long, default_value_t = MAX_IPF)]
    max_ipf: f64,
}

impl SpeedArgs {
    fn clock(&self) -> Clock {
        let mut clock = Clock::new(self.ips, self.turbo_multiplier, self.max_ipf);
        clock.set_turbo(self.turbo);
        clock
    }
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (width, height) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("'{}' is not WIDTHxHEIGHT", s))?;
    let width = width.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let height = height.trim().parse::<usize>().map_err(|e| e.to_string())?;
    if width == 0 || height == 0 {
        return Err("canvas is empty".to_string());
    }
    Ok((width, height))
}

#[derive(Debug)]
enum TermError {
    Io(PathBuf, std::io::Error),
    Tmlx(Option<PathBuf>, Error),
    Usage(String),
}

impl From<Error> for TermError {
    fn from(error: Error) -> TermError {
        TermError::Tmlx(None, error)
    }
}

impl std::fmt::Display for TermError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TermError::Io(path, error) => write!(f, "{}: {}", path.display(), error),
            TermError::Tmlx(Some(path), error) => write!(f, "{}: {}", path.display(), error),
            TermError::Tmlx(None, error) => write!(f, "{}", error),
            TermError::Usage(message) => write!(f, "{}", message),
        }
    }
}

fn read(path: &Path) -> Result<String, TermError> {
    std::fs::read_to_string(path).map_err(|e| TermError::Io(path.to_path_buf(), e))
}

fn read_canvas(path: &Path) -> Result<Canvas, TermError> {
    read(path)?
        .parse()
        .map_err(|e| TermError::Tmlx(Some(path.to_path_buf()), e))
}

fn compile_file(path: &Path, options: &Options) -> Result<Program, TermError> {
    Program::compile(&read(path)?, options).map_err(|e| TermError::Tmlx(Some(path.to_path_buf()), e))
}

fn exit_code(status: ExitStatus) -> i32 {
    i32::try_from(status).unwrap_or(i32::MAX)
}

pub fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("TMLX_LOG", "warn")).init();
    debug!("cli: {:?}", cli);

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("unable to set Ctrl-C handler: {}", error);
    }

    let code = match cli.command.execute(&interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    };
    std::process::exit(code);
}

impl Command {
    fn execute(&self, interrupted: &AtomicBool) -> Result<i32, TermError> {
        match self {
            Command::Compile { source } => {
                let program = source.compile()?;
                print!("{}", Listing::new(&program));
                println!("{} instructions", program.instruction_count());
                Ok(0)
            }
            Command::Run {
                source,
                canvas,
                speed,
                watch,
            } => {
                let program = source.compile()?;
                let runtime = Runtime::new(program, canvas.canvas(source.dialect())?);
                if *watch {
                    watch_run(runtime, speed.clock(), interrupted)
                } else {
                    run(runtime, speed.max_ipf, interrupted)
                }
            }
            Command::Debug {
                source,
                canvas,
                breakpoints,
            } => {
                let program = source.compile()?;
                let runtime = Runtime::new(program, canvas.canvas(source.dialect())?);
                let breakpoints: BTreeSet<_> = breakpoints
                    .iter()
                    .filter(|line| **line > 0)
                    .map(|line| line - 1)
                    .collect();
                debugger::debug(runtime, breakpoints, interrupted)
                    .map_err(|e| TermError::Io(source.file.clone(), e))
            }
            Command::Check {
                source,
                tests,
                solution,
                max_instructions,
            } => check(source, tests, solution.as_deref(), *max_instructions),
        }
    }
}

/// As fast as possible, checking for Ctrl-C between frames.
fn run(mut runtime: Runtime, max_ipf: f64, interrupted: &AtomicBool) -> Result<i32, TermError> {
    let frame = (max_ipf as usize).max(1);
    loop {
        if interrupted.load(Ordering::SeqCst) {
            eprintln!("interrupted at line {}", runtime.instruction_index() + 1);
            return Ok(INTERRUPTED);
        }
        if let Some(status) = runtime.run(frame).exit {
            print!("{}", runtime.canvas());
            println!("exit {}", status);
            return Ok(exit_code(status));
        }
    }
}

fn watch_run(mut runtime: Runtime, mut clock: Clock, interrupted: &AtomicBool) -> Result<i32, TermError> {
    let frame = std::time::Duration::from_millis(16);
    let mut last = Utc::now();
    paint::redraw(&runtime, clock.ips());
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return Ok(INTERRUPTED);
        }
        let now = Utc::now();
        let budget = clock.tick(now - last);
        last = now;
        let step = runtime.run(budget);
        clock.consume(step.executed);
        if step.executed > 0 {
            paint::redraw(&runtime, clock.ips());
        }
        if let Some(status) = step.exit {
            println!("exit {}", status);
            return Ok(exit_code(status));
        }
        std::thread::sleep(frame);
    }
}

/// `INPUT[,OUTPUT]=STATUS`
fn parse_test(arg: &str) -> Result<TestCase, TermError> {
    let (files, status) = arg
        .rsplit_once('=')
        .ok_or_else(|| TermError::Usage(format!("'{}' is missing '=STATUS'", arg)))?;
    let exit_status = status
        .trim()
        .parse::<ExitStatus>()
        .map_err(|_| TermError::Usage(format!("'{}' is not a valid exit status", status)))?;
    let (input, output) = match files.split_once(',') {
        Some((input, output)) => (input, Some(output)),
        None => (files, None),
    };
    Ok(TestCase {
        input: read_canvas(Path::new(input))?,
        output: output.map(|o| read_canvas(Path::new(o))).transpose()?,
        exit_status,
    })
}

fn check(
    source: &SourceArgs,
    tests: &[String],
    solution: Option<&Path>,
    max_instructions: u64,
) -> Result<i32, TermError> {
    let program = source.compile()?;
    let tests = tests
        .iter()
        .map(|t| parse_test(t))
        .collect::<Result<Vec<_>, _>>()?;
    let target = match solution {
        Some(path) => Some(compile_file(path, &source.options())?.instruction_count()),
        None => None,
    };
    let limits = Limits {
        max_instructions,
        ..Limits::default()
    };
    let report = grade(program, &tests, target, &limits);
    println!("{}", Style::new().bold().paint(report.to_string()));
    match report {
        Report::Failed { failure, .. } => {
            println!("{}", failure);
            Ok(1)
        }
        Report::Passed {
            instruction_count,
            score,
            ..
        } => {
            println!("{} instructions", instruction_count);
            if let Some(score) = score {
                let stars: String = (0..3)
                    .map(|i| if i < score.stars { '*' } else { '.' })
                    .collect();
                println!("{}", stars);
                let verdict = score.verdict.to_string();
                if !verdict.is_empty() {
                    println!("{}", verdict);
                }
            }
            Ok(0)
        }
    }
}
