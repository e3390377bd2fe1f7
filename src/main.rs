//! # TMLX
//!
//! Command line host for the TMLX turtle machine language.
//!

mod term;

fn main() {
    term::main()
}
