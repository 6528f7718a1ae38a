pub struct Error {
    code: u16,
    token: String,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $token:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_token($token)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $token:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_token($token)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            token: String::new(),
            message: "",
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn in_token(self, token: &str) -> Error {
        debug_assert!(self.token.is_empty());
        Error {
            token: token.to_string(),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    StackEmpty = 1,
    StackFull = 2,
    InsufficientOperands = 3,
    DivisionByZero = 4,
    DomainError = 5,
    InvalidOperator = 6,
    InvalidToken = 7,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "STACK EMPTY",
            2 => "STACK FULL",
            3 => "INSUFFICIENT OPERANDS",
            4 => "DIVISION BY ZERO",
            5 => "DOMAIN ERROR",
            6 => "INVALID OPERATOR",
            7 => "INVALID TOKEN",
            _ => "",
        };
        let mut suffix = String::new();
        if !self.token.is_empty() {
            suffix.push_str(&format!(" '{}'", self.token));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "CALCULATOR ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if self.token.is_empty() {
            write!(f, "{}", suffix)
        } else {
            write!(f, " IN{}", suffix)
        }
    }
}

impl std::error::Error for Error {}
