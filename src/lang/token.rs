use super::lex::parse_number;

pub const OPERATORS: &str = "+-*/";

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Command(Command),
    Unary(Unary),
    Power,
    Operator(char),
    Number(f64),
    Unknown(String),
}

impl Token {
    /// Classify one whitespace-free word. The order of the checks
    /// decides how ambiguous words resolve, e.g. `-` is an operator
    /// but `-1` is a number.
    pub fn classify(s: &str) -> Token {
        if let Some(command) = Command::from_word(s) {
            return Token::Command(command);
        }
        if let Some(function) = Unary::from_word(s) {
            return Token::Unary(function);
        }
        if s == "pow" {
            return Token::Power;
        }
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if OPERATORS.contains(ch) {
                return Token::Operator(ch);
            }
        }
        match parse_number(s) {
            Some(num) => Token::Number(num),
            None => Token::Unknown(s.to_string()),
        }
    }

    /// Every keyword the dispatcher recognizes, for tab completion.
    pub fn words() -> Vec<&'static str> {
        Command::ALL
            .iter()
            .map(|c| c.as_str())
            .chain(Unary::ALL.iter().map(|f| f.as_str()))
            .chain(std::iter::once("pow"))
            .collect()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Command(s) => write!(f, "{}", s),
            Unary(s) => write!(f, "{}", s),
            Power => write!(f, "pow"),
            Operator(ch) => write!(f, "{}", ch),
            Number(n) => write!(f, "{}", n),
            Unknown(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Quit,
    Help,
    Clear,
    Peek,
    Show,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Quit,
        Command::Help,
        Command::Clear,
        Command::Peek,
        Command::Show,
    ];

    pub fn from_word(s: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        use Command::*;
        match self {
            Quit => "q",
            Help => "h",
            Clear => "c",
            Peek => "p",
            Show => "s",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Unary {
    Sqrt,
    Sin,
    Cos,
    Tan,
}

impl Unary {
    pub const ALL: [Unary; 4] = [Unary::Sqrt, Unary::Sin, Unary::Cos, Unary::Tan];

    pub fn from_word(s: &str) -> Option<Unary> {
        Unary::ALL.iter().copied().find(|f| f.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        use Unary::*;
        match self {
            Sqrt => "sqrt",
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
        }
    }
}

impl std::fmt::Display for Unary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
