//! Sequence decomposition and folding.
//!
//! Every function here accepts anything `IntoIterator`. Only [`popr`] and the
//! lazy branch of [`coerce_list`] materialize their input; the rest pull
//! elements on demand.

use std::borrow::Cow;

use crate::error::{Result, SeqError};

/// An ordered source of values in one of the shapes a caller may hold.
///
/// Use the `From` impls for lists and [`Sequence::lazy`] for iterators.
pub enum Sequence<'a, T> {
    /// A caller-owned list, borrowed.
    Borrowed(&'a [T]),
    /// A list handed over by value.
    Owned(Vec<T>),
    /// A deferred source, pulled one element at a time.
    Lazy(Box<dyn Iterator<Item = T> + 'a>),
}

impl<'a, T> Sequence<'a, T> {
    /// Wrap an iterator without consuming it.
    pub fn lazy<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Sequence::Lazy(Box::new(iter.into_iter()))
    }
}

impl<T> From<Vec<T>> for Sequence<'_, T> {
    fn from(list: Vec<T>) -> Self {
        Sequence::Owned(list)
    }
}

impl<'a, T> From<&'a [T]> for Sequence<'a, T> {
    fn from(list: &'a [T]) -> Self {
        Sequence::Borrowed(list)
    }
}

impl<'a, T> From<&'a Vec<T>> for Sequence<'a, T> {
    fn from(list: &'a Vec<T>) -> Self {
        Sequence::Borrowed(list.as_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<'_, T> {
    fn from(list: [T; N]) -> Self {
        Sequence::Owned(Vec::from(list))
    }
}

impl<'a, T: Clone + 'a> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Sequence::Borrowed(list) => Box::new(list.iter().cloned()),
            Sequence::Owned(list) => Box::new(list.into_iter()),
            Sequence::Lazy(iter) => iter,
        }
    }
}

/// Return the sequence as a concrete list.
///
/// Lists pass through without a copy (borrowed stays borrowed); lazy
/// sequences are consumed in full. Never returns for infinite input.
pub fn coerce_list<'a, T: Clone + 'a>(seq: impl Into<Sequence<'a, T>>) -> Cow<'a, [T]> {
    match seq.into() {
        Sequence::Borrowed(list) => Cow::Borrowed(list),
        Sequence::Owned(list) => Cow::Owned(list),
        Sequence::Lazy(iter) => Cow::Owned(iter.collect()),
    }
}

/// Split off the first element, returning it with the unconsumed remainder.
pub fn popl<I: IntoIterator>(seq: I) -> Result<(I::Item, I::IntoIter)> {
    let mut iter = seq.into_iter();
    let first = iter.next().ok_or(SeqError::Exhausted)?;
    Ok((first, iter))
}

/// Split off the last element, returning it with the others in order.
///
/// Materializes the whole sequence.
pub fn popr<I: IntoIterator>(seq: I) -> Result<(I::Item, Vec<I::Item>)> {
    let mut list: Vec<I::Item> = seq.into_iter().collect();
    let last = list.pop().ok_or(SeqError::Exhausted)?;
    Ok((last, list))
}

/// Left fold seeded with the first element.
///
/// `f` is called as `f(accumulator, next)`.
pub fn foldl1<I, F>(seq: I, f: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let (first, rest) = popl(seq)?;
    Ok(rest.fold(first, f))
}

/// Run several [`foldl1`] reductions over one pass of `seq`.
///
/// Every accumulator starts from the first element. Results come back in the
/// order of `fns`; no reducers yields an empty list (the sequence must still
/// be non-empty).
pub fn parallel_foldl1<I, F, R>(seq: I, fns: R) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
    R: IntoIterator<Item = F>,
{
    let mut reducers: Vec<F> = fns.into_iter().collect();
    let (seed, rest) = popl(seq)?;
    let mut state = vec![seed; reducers.len()];
    for item in rest {
        state = state
            .into_iter()
            .zip(reducers.iter_mut())
            .map(|(acc, reducer)| reducer(acc, item.clone()))
            .collect();
    }
    Ok(state)
}

/// True if `seq` yields nothing. Pulls at most one element.
pub fn empty_seq<I: IntoIterator>(seq: I) -> bool {
    seq.into_iter().next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::ops::Add;

    #[test]
    fn popl_returns_first_and_remainder() {
        let (first, rest) = popl(vec![1, 2, 3]).expect("popl");
        assert_eq!(first, 1);
        assert_eq!(rest.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn popl_on_empty_is_exhausted() {
        let err = popl(Vec::<i32>::new()).unwrap_err();
        assert_eq!(err, SeqError::Exhausted);
    }

    #[test]
    fn popl_leaves_infinite_tail_lazy() {
        let (first, mut rest) = popl(1..).expect("popl");
        assert_eq!(first, 1);
        assert_eq!(rest.next(), Some(2));
    }

    #[test]
    fn popr_returns_last_and_prefix() {
        let (last, init) = popr("abc".chars()).expect("popr");
        assert_eq!(last, 'c');
        assert_eq!(init, vec!['a', 'b']);
    }

    #[test]
    fn popr_on_empty_is_exhausted() {
        assert_eq!(popr(std::iter::empty::<u8>()), Err(SeqError::Exhausted));
    }

    #[test]
    fn foldl1_seeds_with_first_element() {
        let joined = foldl1(["a", "b", "c"].map(String::from), |acc, s| acc + "-" + &s)
            .expect("fold");
        assert_eq!(joined, "a-b-c");
    }

    #[test]
    fn foldl1_single_element_returns_it() {
        assert_eq!(foldl1([7], |a, b| a * b), Ok(7));
    }

    #[test]
    fn foldl1_on_empty_is_exhausted() {
        assert_eq!(
            foldl1(Vec::<i32>::new(), |a, b| a + b),
            Err(SeqError::Exhausted)
        );
    }

    #[test]
    fn parallel_foldl1_runs_sum_and_max_in_one_pass() {
        let reducers = [i32::add as fn(i32, i32) -> i32, std::cmp::max];
        let result = parallel_foldl1(vec![1, 2, 3, 4], reducers).expect("fold");
        assert_eq!(result, vec![10, 4]);
    }

    #[test]
    fn parallel_foldl1_pulls_each_element_once() {
        let pulls = Cell::new(0);
        let source = [3, 1, 2].into_iter().inspect(|_| pulls.set(pulls.get() + 1));
        let reducers = [
            std::cmp::min as fn(i32, i32) -> i32,
            std::cmp::max,
            i32::add,
        ];
        let result = parallel_foldl1(source, reducers).expect("fold");
        assert_eq!(result, vec![1, 3, 6]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn parallel_foldl1_on_empty_is_exhausted() {
        let reducers = [i32::add as fn(i32, i32) -> i32];
        assert_eq!(
            parallel_foldl1(Vec::<i32>::new(), reducers),
            Err(SeqError::Exhausted)
        );
    }

    #[test]
    fn empty_seq_detects_empty_and_nonempty() {
        assert!(empty_seq(Vec::<i32>::new()));
        assert!(!empty_seq([1]));
    }

    #[test]
    fn empty_seq_pulls_one_element_from_infinite_source() {
        let pulls = Cell::new(0);
        let source = std::iter::repeat_with(|| {
            pulls.set(pulls.get() + 1);
            pulls.get()
        });
        assert!(!empty_seq(source));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn coerce_list_borrows_existing_lists() {
        let list = vec![1, 2, 3];
        let coerced = coerce_list(&list);
        assert!(matches!(coerced, Cow::Borrowed(_)));
        assert_eq!(coerced.as_ptr(), list.as_ptr());
    }

    #[test]
    fn coerce_list_materializes_lazy_sequences() {
        let coerced = coerce_list(Sequence::lazy((1..=3).map(|n| n * 10)));
        assert!(matches!(coerced, Cow::Owned(_)));
        assert_eq!(coerced.as_ref(), &[10, 20, 30]);
    }

    #[test]
    fn sequence_iterates_every_shape() {
        let list = vec![1, 2];
        let borrowed: Vec<i32> = Sequence::from(&list).into_iter().collect();
        let owned: Vec<i32> = Sequence::from([1, 2]).into_iter().collect();
        let lazy: Vec<i32> = Sequence::lazy(1..3).into_iter().collect();
        assert_eq!(borrowed, owned);
        assert_eq!(owned, lazy);
    }
}
