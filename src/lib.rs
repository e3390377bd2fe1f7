//! # TMLX
//!
//! A turtle machine language. Programs paint a canvas of colored pixels
//! one instruction at a time, like a Turing machine that can see color.
//!
//! Install with `cargo install tmlx-lang`, then run a program with
//! ```text
//! tmlx run program.tmlx --size 16x16
//! ```
//!
//! The library compiles source text to a [`mach::Program`] and runs it
//! with a [`mach::Runtime`].
//!
//! ```
//! use tmlx::mach::{Canvas, Options, Program, Runtime};
//!
//! let program = Program::compile("start: write black right goto start", &Options::default()).unwrap();
//! let mut runtime = Runtime::new(program, Canvas::new(4, 1).unwrap());
//! let step = runtime.run(100);
//! assert_eq!(step.exit, Some(2));
//! assert_eq!(runtime.canvas().to_string(), "####\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_b.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_B;

pub mod lang;
pub mod mach;
