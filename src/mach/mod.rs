/*!
## Rust Machine Module

This Rust module holds the calculator stack and evaluates words against it.

*/

pub const STACK_MAX: usize = 1024;
pub const DISPLAY_DEPTH: usize = 8;

mod function;
pub mod number;
mod operation;
mod runtime;
mod stack;

pub use function::Function;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;

#[cfg(test)]
mod tests;
