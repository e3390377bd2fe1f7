use super::paint;
use linefeed::{Interface, ReadResult};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tmlx::lang::LineIndex;
use tmlx::mach::{Listing, Runtime, Step};

const HELP: &str = "\
step [n]     run n instructions, default 1
continue     run to the next breakpoint or exit
break <n>    stop on arriving at line n
delete <n>   remove the breakpoint on line n
list         show the program
where        show the current line and cursor
canvas       show the canvas
reset        start over on the original canvas
quit         leave the debugger";

/// Instructions run between checks for Ctrl-C.
const FRAME: usize = 100_000;

/// Interactive prompt over a runtime. Returns the program's exit
/// status, or 0 if it never exited.
pub fn debug(
    mut runtime: Runtime,
    mut breakpoints: BTreeSet<LineIndex>,
    interrupted: &AtomicBool,
) -> std::io::Result<i32> {
    let initial = runtime.canvas().clone();
    let interface = Interface::new("tmlx")?;
    interface.set_prompt("(tmlx) ")?;
    interface.write_fmt(format_args!("{}", paint::render(runtime.canvas(), Some(runtime.cursor()))))?;
    interface.write_fmt(format_args!("{}\n", current(&runtime)))?;

    loop {
        let input = match interface.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let mut words = input.split_whitespace();
        let command = match words.next() {
            Some(command) => command,
            None => continue,
        };
        let argument = words.next().map(|w| w.parse::<usize>());
        interface.add_history_unique(input.clone());
        match (command, argument) {
            ("s", n) | ("step", n) => {
                let n = match n {
                    None => 1,
                    Some(Ok(n)) => n,
                    Some(Err(e)) => {
                        interface.write_fmt(format_args!("{}\n", e))?;
                        continue;
                    }
                };
                let step = runtime.step(n, &breakpoints);
                report(&interface, &runtime, step)?;
            }
            ("c", _) | ("continue", _) => {
                interrupted.store(false, Ordering::SeqCst);
                let mut step;
                loop {
                    step = runtime.step(FRAME, &breakpoints);
                    if step.exit.is_some() || step.breakpoint || interrupted.load(Ordering::SeqCst) {
                        break;
                    }
                }
                report(&interface, &runtime, step)?;
            }
            ("b", Some(Ok(n))) | ("break", Some(Ok(n))) if n > 0 => {
                breakpoints.insert(n - 1);
            }
            ("d", Some(Ok(n))) | ("delete", Some(Ok(n))) if n > 0 => {
                breakpoints.remove(&(n - 1));
            }
            ("l", _) | ("list", _) => {
                let listing = Listing::new(runtime.program());
                for line in 0..runtime.program().len() {
                    let marker = if line == runtime.instruction_index() {
                        '>'
                    } else if breakpoints.contains(&line) {
                        '*'
                    } else {
                        ' '
                    };
                    if let Some(text) = listing.line(line) {
                        interface.write_fmt(format_args!("{}{}\n", marker, text))?;
                    }
                }
            }
            ("w", _) | ("where", _) => {
                interface.write_fmt(format_args!("{}\n", current(&runtime)))?;
            }
            ("canvas", _) => {
                interface.write_fmt(format_args!(
                    "{}",
                    paint::render(runtime.canvas(), Some(runtime.cursor()))
                ))?;
            }
            ("reset", _) => {
                runtime.reset(initial.clone());
                interface.write_fmt(format_args!("{}\n", current(&runtime)))?;
            }
            ("q", _) | ("quit", _) => break,
            _ => interface.write_fmt(format_args!("{}\n", HELP))?,
        }
    }
    Ok(runtime.exit_status().map_or(0, super::exit_code))
}

fn current(runtime: &Runtime) -> String {
    let (x, y) = runtime.cursor();
    match runtime.exit_status() {
        Some(status) => format!("exited with {}", status),
        None => {
            let line = runtime.instruction_index();
            let text = Listing::new(runtime.program())
                .line(line)
                .unwrap_or_default();
            format!("{}   cursor {},{}", text.trim_start(), x, y)
        }
    }
}

fn report<T: linefeed::Terminal>(
    interface: &Interface<T>,
    runtime: &Runtime,
    step: Step,
) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}",
        paint::render(runtime.canvas(), Some(runtime.cursor()))
    ))?;
    if step.breakpoint {
        interface.write_fmt(format_args!(
            "breakpoint, line {}\n",
            runtime.instruction_index() + 1
        ))?;
    }
    interface.write_fmt(format_args!(
        "{} instructions, {}\n",
        step.executed,
        current(runtime)
    ))
}
