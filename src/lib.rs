//! # RPN
//!
//! A Reverse Polish Notation calculator for the terminal.
//!
//! Install with `cargo install rpn-calc` then run `rpn`. The usage
//! summary is printed on startup, followed by the prompt.
//! ```text
//! RPN calculator (Reverse Polish Notation)
//! ...
//! rpn> █
//! ```
//!
//! Embedding the calculator only needs a [`mach::Runtime`]:
//! ```
//! use rpn::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("3 4 +");
//! match runtime.execute(5000) {
//!     Event::Print(s) => assert_eq!(s, "= 7\n"),
//!     _ => unreachable!(),
//! }
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
