//! Pure combinators over sequences, pairs, functions and type hierarchies.
//!
//! Core modules must be free of I/O side effects. Apart from the random source
//! handed to [`weighted::select_with_rng`], every output is determined by the
//! inputs. Arguments follow one convention throughout: the subject first, the
//! operation last.

pub mod apply;
pub mod curry;
pub mod hierarchy;
pub mod pairs;
pub mod props;
pub mod sequence;
pub mod weighted;

pub use apply::{Outcome, Spread, apply1, fnpow, mutating, nop, rapply, throws};
pub use curry::{bind1, bind1_of3, bind2_of3};
pub use hierarchy::{
    Tagged, TypeHandle, basetype, basetypes, has_base, is_a, is_any, oneof, oneof_with,
};
pub use pairs::{defaults, filter_key, filter_value, map_key, map_value};
pub use props::{Props, assign_props, create, create_from};
pub use sequence::{Sequence, coerce_list, empty_seq, foldl1, parallel_foldl1, popl, popr};
pub use weighted::{select_with_rng, try_select_with_weight};
