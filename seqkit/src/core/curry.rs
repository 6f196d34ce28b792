//! Partial application.
//!
//! Combinators in this crate take the subject (collection or value) first and
//! the operation last. These helpers fix leading arguments, never trailing
//! ones, so a fixed subject can be mapped over many operations and a fixed
//! function over many argument lists.

/// Fix the first argument of a binary function.
pub fn bind1<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |b| f(a.clone(), b)
}

/// Fix the first argument of a ternary function.
pub fn bind1_of3<A, B, C, R, F>(f: F, a: A) -> impl Fn(B, C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
{
    move |b, c| f(a.clone(), b, c)
}

/// Fix the first two arguments of a ternary function.
pub fn bind2_of3<A, B, C, R, F>(f: F, a: A, b: B) -> impl Fn(C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
    B: Clone,
{
    move |c| f(a.clone(), b.clone(), c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::apply::fnpow;
    use crate::core::sequence::foldl1;

    #[test]
    fn bind1_fixes_the_subject() {
        let fold_digits = bind1(foldl1::<Vec<u32>, fn(u32, u32) -> u32>, vec![1, 2, 3]);
        assert_eq!(fold_digits(|a, b| a * 10 + b), Ok(123));
        assert_eq!(fold_digits(|a, b| a + b), Ok(6));
    }

    #[test]
    fn bind1_of3_leaves_two_arguments_open() {
        let from_two = bind1_of3(fnpow::<u64, fn(u64) -> u64>, 2);
        assert_eq!(from_two(4, |x| x * x), 65_536);
        assert_eq!(from_two(3, |x| x + 1), 5);
    }

    #[test]
    fn bind2_of3_leaves_the_operation_open() {
        let thrice = bind2_of3(fnpow::<i32, fn(i32) -> i32>, 1, 3);
        assert_eq!(thrice(|x| x * 3), 27);
        assert_eq!(thrice(|x| x - 1), -2);
    }
}
