use super::{number, Function, Operation, Stack, DISPLAY_DEPTH, STACK_MAX};
use crate::error;
use crate::lang::{
    lex,
    token::{Command, Unary},
    Error, Token,
};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

const HELP: &str = "\
RPN calculator (Reverse Polish Notation)
Usage: words separated by spaces. Example: 3 4 +
Operators: +  -  *  /
Functions: sqrt  sin  cos  tan  pow
  - sin/cos/tan use DEGREES
Commands:
  p  -> show top
  s  -> show stack
  c  -> clear stack
  q  -> quit
  h  -> help
";

/// ## Calculator runtime
///
/// Lines are queued with `enter` and evaluated one word at a time by
/// `execute`, which returns as soon as a word has something to report.

pub struct Runtime {
    stack: Stack<f64>,
    pending: VecDeque<String>,
}

#[derive(Debug)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Errors(Vec<Error>),
    Quit,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_capacity(STACK_MAX)
    }
}

impl Runtime {
    pub fn with_capacity(capacity: usize) -> Runtime {
        Runtime {
            stack: Stack::new(capacity),
            pending: VecDeque::default(),
        }
    }

    /// Queue the words of a line. Returns false for a blank line.
    pub fn enter(&mut self, line: &str) -> bool {
        let words = lex(line);
        if words.is_empty() {
            return false;
        }
        self.pending.extend(words);
        true
    }

    /// Drop whatever is left of the current input.
    pub fn interrupt(&mut self) {
        self.pending.clear();
    }

    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    pub fn help() -> &'static str {
        HELP
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            let word = match self.pending.pop_front() {
                Some(word) => word,
                None => return Event::Stopped,
            };
            match self.execute_word(&word) {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => return Event::Errors(vec![error.in_token(&word)]),
            }
        }
        if self.pending.is_empty() {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    fn execute_word(&mut self, word: &str) -> Result<Option<Event>> {
        match Token::classify(word) {
            Token::Command(command) => Ok(Some(self.command(command))),
            Token::Unary(func) => self.unary(func),
            Token::Power => self.power(),
            Token::Operator(op) => self.binary(op),
            Token::Number(num) => {
                self.stack.push(num)?;
                Ok(None)
            }
            Token::Unknown(_) => Err(error!(InvalidToken)),
        }
    }

    fn command(&mut self, command: Command) -> Event {
        match command {
            Command::Quit => {
                self.pending.clear();
                Event::Quit
            }
            Command::Help => Event::Print(HELP.to_string()),
            Command::Clear => {
                self.stack.clear();
                Event::Print("[stack cleared]\n".to_string())
            }
            Command::Peek => match self.stack.peek() {
                Ok(top) => Event::Print(format!("top: {}\n", number::format(*top))),
                Err(_) => Event::Print("[stack empty]\n".to_string()),
            },
            Command::Show => Event::Print(self.stack.render(DISPLAY_DEPTH)),
        }
    }

    fn binary(&mut self, op: char) -> Result<Option<Event>> {
        let (lhs, rhs) = self
            .stack
            .pop_2()
            .map_err(|_| error!(InsufficientOperands))?;
        match Operation::binary(op, lhs, rhs) {
            Ok(val) => self.push_result(val, |stack| stack.push_2(lhs, rhs)),
            Err(error) => {
                self.stack.push_2(lhs, rhs)?;
                Err(error)
            }
        }
    }

    fn unary(&mut self, func: Unary) -> Result<Option<Event>> {
        let val = self
            .stack
            .pop()
            .map_err(|_| error!(InsufficientOperands))?;
        match Function::unary(func, val) {
            Ok(res) => self.push_result(res, |stack| stack.push(val)),
            Err(error) => {
                self.stack.push(val)?;
                Err(error)
            }
        }
    }

    fn power(&mut self) -> Result<Option<Event>> {
        let (base, exponent) = self
            .stack
            .pop_2()
            .map_err(|_| error!(InsufficientOperands))?;
        let val = Operation::power(base, exponent);
        self.push_result(val, |stack| stack.push_2(base, exponent))
    }

    fn push_result<F>(&mut self, val: f64, restore: F) -> Result<Option<Event>>
    where
        F: FnOnce(&mut Stack<f64>) -> Result<()>,
    {
        match self.stack.push(val) {
            Ok(()) => Ok(Some(Event::Print(format!("= {}\n", number::format(val))))),
            Err(error) => {
                restore(&mut self.stack)?;
                Err(error.message("RESULT NOT STORED"))
            }
        }
    }
}
