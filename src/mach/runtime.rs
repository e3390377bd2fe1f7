use super::{Canvas, Coverage, Program};
use crate::lang::ast::{Direction, Slot, Target};
use crate::lang::{ExitStatus, LineIndex};
use log::info;
use std::collections::BTreeSet;

/// Status reported when a move would leave the canvas.
pub const EDGE_EXIT_STATUS: ExitStatus = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Reset and not yet stepped.
    Idle,
    Running,
    Exited(ExitStatus),
}

/// Result of one call to `Runtime::step`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Step {
    pub executed: usize,
    pub exit: Option<ExitStatus>,
    /// Stopped early on arriving at a breakpoint line.
    pub breakpoint: bool,
}

/// ## Interpreter
///
/// Owns a program and the canvas it draws on. Execution never fails;
/// it ends with an exit status or keeps going.
#[derive(Debug, Clone)]
pub struct Runtime {
    program: Program,
    canvas: Canvas,
    ip: LineIndex,
    x: usize,
    y: usize,
    state: State,
    total_executed: u64,
    coverage: Coverage,
}

impl Runtime {
    pub fn new(program: Program, canvas: Canvas) -> Runtime {
        let coverage = Coverage::new(program.len());
        let mut runtime = Runtime {
            program,
            canvas: canvas.clone(),
            ip: 0,
            x: 0,
            y: 0,
            state: State::Idle,
            total_executed: 0,
            coverage,
        };
        runtime.reset(canvas);
        runtime
    }

    /// Start over on `canvas` with the cursor bottom left. Coverage
    /// carries over; see `clear_coverage`.
    pub fn reset(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.x = 0;
        self.y = 0;
        self.total_executed = 0;
        match self.program.entry() {
            Target::Jump(line) => {
                self.ip = line;
                self.state = State::Idle;
            }
            Target::Exit(status) => {
                self.ip = 0;
                self.state = State::Exited(status);
            }
        }
    }

    pub fn clear_coverage(&mut self) {
        self.coverage.clear();
    }

    /// Run at most `budget` instructions without stopping at breakpoints.
    pub fn run(&mut self, budget: usize) -> Step {
        self.step(budget, &BTreeSet::new())
    }

    /// Run at most `budget` instructions. Stops after an exit, or after
    /// a jump onto a line in `breakpoints`.
    pub fn step(&mut self, budget: usize, breakpoints: &BTreeSet<LineIndex>) -> Step {
        if let State::Exited(status) = self.state {
            return Step {
                executed: 0,
                exit: Some(status),
                breakpoint: false,
            };
        }
        self.state = State::Running;
        let mut executed = 0;
        while executed < budget {
            let offset = self.offset();
            let slot = Slot::of(self.canvas.at(offset));
            self.coverage.cover(self.ip, slot);
            let action = *self.program.instructions()[self.ip].action(slot);
            executed += 1;
            if let Some(color) = action.write {
                self.canvas.put(offset, color);
            }
            if !self.advance(action.direction) {
                return self.exit(EDGE_EXIT_STATUS, executed);
            }
            match action.target {
                Target::Exit(status) => return self.exit(status, executed),
                Target::Jump(line) => {
                    self.ip = line;
                    if breakpoints.contains(&line) {
                        self.total_executed += executed as u64;
                        return Step {
                            executed,
                            exit: None,
                            breakpoint: true,
                        };
                    }
                }
            }
        }
        self.total_executed += executed as u64;
        Step {
            executed,
            exit: None,
            breakpoint: false,
        }
    }

    fn offset(&self) -> usize {
        self.y * self.canvas.width() + self.x
    }

    /// Move the cursor. False if that would leave the canvas, in which
    /// case the cursor stays put.
    fn advance(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Nowhere => true,
            Direction::Up if self.y + 1 < self.canvas.height() => {
                self.y += 1;
                true
            }
            Direction::Down if self.y > 0 => {
                self.y -= 1;
                true
            }
            Direction::Left if self.x > 0 => {
                self.x -= 1;
                true
            }
            Direction::Right if self.x + 1 < self.canvas.width() => {
                self.x += 1;
                true
            }
            _ => false,
        }
    }

    fn exit(&mut self, status: ExitStatus, executed: usize) -> Step {
        self.total_executed += executed as u64;
        self.state = State::Exited(status);
        info!("exit {} after {} instructions", status, self.total_executed);
        Step {
            executed,
            exit: Some(status),
            breakpoint: false,
        }
    }

    /// Line that runs next.
    pub fn instruction_index(&self) -> LineIndex {
        self.ip
    }

    /// Column and row, row 0 at the bottom.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn exit_status(&self) -> Option<ExitStatus> {
        match self.state {
            State::Exited(status) => Some(status),
            _ => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        self.exit_status().is_some()
    }

    /// Instructions run since the last reset.
    pub fn total_executed(&self) -> u64 {
        self.total_executed
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
}
