//! # RPN
//!
//! Reverse Polish Notation calculator for the terminal.
//!

mod term;

fn main() {
    term::main();
}
