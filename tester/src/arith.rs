use std::ops::{Add, Sub};

pub fn add<T>(a: T, b: T) -> T
    where T: Add<Output = T>
{
    a + b
}

pub fn minors<T>(a: T, b: T) -> T
    where T: Sub<Output = T>
{
    a - b
}

#[test]
fn test_add() {
    assert_eq!(add(1, 2), 3);
    assert_eq!(add(-4, 4), 0);
    assert_eq!(add(1.5, 2.25), 3.75);
}

#[test]
fn test_minors() {
    assert_eq!(minors(1, 2), -1);
    assert_eq!(minors(10, 4), 6);
    assert_eq!(minors(2.5, 1.25), 1.25);
}
