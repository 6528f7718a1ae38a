/*!
# Rust Language Module

This Rust module splits input lines into words and classifies each word
as a command, function, operator or number.

*/

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::parse_number;
pub use token::Token;
