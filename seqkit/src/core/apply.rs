//! Application helpers: spreading arguments, probing for failure, and
//! repeated application.

use std::panic::{self, AssertUnwindSafe};

use tracing::trace;

/// Call `f` for its side effects on `obj`, discard its result, return `obj`.
pub fn mutating<T, R, F>(mut obj: T, f: F) -> T
where
    F: FnOnce(&mut T) -> R,
{
    let _ = f(&mut obj);
    obj
}

/// Functions that can be called with a tuple spread into positional arguments.
pub trait Spread<Args> {
    type Output;

    fn spread(self, args: Args) -> Self::Output;
}

macro_rules! impl_spread {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Spread<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn spread(self, ($($arg,)*): ($($arg,)*)) -> Out {
                self($($arg),*)
            }
        }
    };
}

impl_spread!();
impl_spread!(A);
impl_spread!(A, B);
impl_spread!(A, B, C);
impl_spread!(A, B, C, D);
impl_spread!(A, B, C, D, E);
impl_spread!(A, B, C, D, E, G);

/// Call `f` with the elements of `args` as positional arguments.
///
/// Fix `f` with [`crate::core::curry::bind1`] to map one function over many
/// argument tuples.
pub fn rapply<F, Args>(f: F, args: Args) -> F::Output
where
    F: Spread<Args>,
{
    f.spread(args)
}

/// Call `f(arg)`. Subject first, so the subject can be fixed by currying.
pub fn apply1<A, R, F>(arg: A, f: F) -> R
where
    F: FnOnce(A) -> R,
{
    f(arg)
}

/// Return values that may signal failure without panicking.
pub trait Outcome {
    fn is_failure(&self) -> bool;
}

impl Outcome for () {
    fn is_failure(&self) -> bool {
        false
    }
}

impl Outcome for bool {
    fn is_failure(&self) -> bool {
        false
    }
}

impl<T, E> Outcome for Result<T, E> {
    fn is_failure(&self) -> bool {
        self.is_err()
    }
}

/// True if `f` panics or returns an `Err`.
///
/// The failure itself is dropped. State `f` touched before unwinding is left as
/// the panic left it, so only probe closures whose side effects do not matter.
///
/// Unwinding is caught after the global panic hook runs, so a panicking probe
/// still prints the usual panic message to stderr. Callers that need silence
/// should swap the hook with [`std::panic::set_hook`] around the call.
pub fn throws<F, R>(f: F) -> bool
where
    F: FnOnce() -> R,
    R: Outcome,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome.is_failure(),
        Err(_) => {
            trace!("probed closure panicked");
            true
        }
    }
}

/// Accept anything, do nothing.
pub fn nop<T>(_: T) {}

/// Apply `f` to `initial` `count` times. `count == 0` returns `initial`.
pub fn fnpow<T, F>(initial: T, count: usize, mut f: F) -> T
where
    F: FnMut(T) -> T,
{
    (0..count).fold(initial, |value, _| f(value))
}
