use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new(super::STACK_MAX)
    }
}

impl<T> Stack<T> {
    pub fn new(capacity: usize) -> Stack<T> {
        Stack {
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    /// Bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn peek(&self) -> Result<&T> {
        self.vec.last().ok_or_else(|| error!(StackEmpty))
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackFull));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn push_2(&mut self, one: T, two: T) -> Result<()> {
        if self.vec.len() + 2 > self.capacity {
            return Err(error!(StackFull));
        }
        self.vec.push(one);
        self.vec.push(two);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        self.vec.pop().ok_or_else(|| error!(StackEmpty))
    }
    /// Pops the top two values as `(one, two)` where `two` was the top.
    /// Nothing is removed unless both are present.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(error!(StackEmpty));
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}

impl<T: std::fmt::Display + Default> Stack<T> {
    /// Numbered view of the top `depth` slots, `depth` first and 1 last.
    /// Slots past the end of the stack show as zero.
    pub fn render(&self, depth: usize) -> String {
        let zero = T::default();
        let mut s = String::from("Stack:\n");
        for pos in (1..=depth).rev() {
            let val = if pos <= self.vec.len() {
                &self.vec[self.vec.len() - pos]
            } else {
                &zero
            };
            s.push_str(&format!("{}. {:.6}\n", pos, val));
        }
        s
    }
}
