/*!
## Rust Machine Module

This Rust module links, optimizes and runs TMLX programs.
Each compiler pass takes the instructions by value and returns new ones.

*/

mod branch;
mod canvas;
mod clock;
mod collapse;
mod coverage;
mod fold;
mod grade;
mod link;
mod listing;
mod program;
mod runtime;

pub use branch::Branch;
pub use canvas::Canvas;
pub use clock::{Clock, MAX_IPF, NORMAL_IPS, TURBO_MULTIPLIER};
pub use collapse::collapse;
pub use coverage::{Coverage, Mark};
pub use fold::fold;
pub use grade::{grade, stars, Failure, Limits, Report, Score, TestCase, Verdict};
pub use link::{link, Link};
pub use listing::Listing;
pub use program::{compile, Options, Program};
pub use runtime::{Runtime, State, Step, EDGE_EXIT_STATUS};

#[cfg(test)]
mod tests;
