use crate::lang::ErrorCode;
use crate::mach::Stack;

#[test]
fn test_lifo_order() {
    let mut s: Stack<f64> = Stack::default();
    for n in 1..=5 {
        s.push(n as f64).unwrap();
    }
    for n in (1..=5).rev() {
        assert_eq!(s.pop().unwrap(), n as f64);
    }
    assert!(s.is_empty());
}

#[test]
fn test_push_when_full() {
    let mut s: Stack<f64> = Stack::new(3);
    s.push(1.0).unwrap();
    s.push(2.0).unwrap();
    s.push(3.0).unwrap();
    assert!(s.is_full());
    let err = s.push(4.0).unwrap_err();
    assert!(err.is(ErrorCode::StackFull));
    assert_eq!(s.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_default_capacity() {
    let mut s: Stack<f64> = Stack::default();
    assert_eq!(s.capacity(), 1024);
    for n in 0..1024 {
        s.push(n as f64).unwrap();
    }
    assert!(s.push(0.0).is_err());
    assert_eq!(s.len(), 1024);
    assert_eq!(*s.peek().unwrap(), 1023.0);
}

#[test]
fn test_pop_and_peek_empty() {
    let mut s: Stack<f64> = Stack::new(4);
    assert!(s.pop().unwrap_err().is(ErrorCode::StackEmpty));
    assert!(s.peek().unwrap_err().is(ErrorCode::StackEmpty));
    assert_eq!(s.len(), 0);
}

#[test]
fn test_peek_does_not_remove() {
    let mut s: Stack<f64> = Stack::new(4);
    s.push(42.0).unwrap();
    assert_eq!(*s.peek().unwrap(), 42.0);
    assert_eq!(s.len(), 1);
}

#[test]
fn test_pop_2_needs_two() {
    let mut s: Stack<f64> = Stack::new(4);
    s.push(9.0).unwrap();
    assert!(s.pop_2().is_err());
    assert_eq!(s.as_slice(), &[9.0]);
    s.push(3.0).unwrap();
    assert_eq!(s.pop_2().unwrap(), (9.0, 3.0));
    assert!(s.is_empty());
}

#[test]
fn test_clear() {
    let mut s: Stack<f64> = Stack::new(4);
    s.clear();
    assert_eq!(s.len(), 0);
    s.push(1.0).unwrap();
    s.push(2.0).unwrap();
    s.clear();
    assert_eq!(s.len(), 0);
    assert!(s.peek().is_err());
}

#[test]
fn test_render_empty() {
    let s: Stack<f64> = Stack::new(4);
    let view = s.render(8);
    let mut lines = view.lines();
    assert_eq!(lines.next(), Some("Stack:"));
    for pos in (1..=8).rev() {
        assert_eq!(lines.next(), Some(format!("{}. 0.000000", pos).as_str()));
    }
    assert_eq!(lines.next(), None);
}

#[test]
fn test_render_top_is_slot_one() {
    let mut s: Stack<f64> = Stack::new(16);
    s.push(1.5).unwrap();
    s.push(-2.0).unwrap();
    s.push(3.0).unwrap();
    assert_eq!(
        s.render(4),
        "Stack:\n4. 0.000000\n3. 1.500000\n2. -2.000000\n1. 3.000000\n"
    );
    assert_eq!(s.as_slice(), &[1.5, -2.0, 3.0]);
}

#[test]
fn test_render_deeper_than_view() {
    let mut s: Stack<f64> = Stack::new(16);
    for n in 1..=10 {
        s.push(n as f64).unwrap();
    }
    let view = s.render(8);
    assert_eq!(view.lines().count(), 9);
    assert!(view.starts_with("Stack:\n8. 3.000000\n"));
    assert!(view.ends_with("1. 10.000000\n"));
}
