//! Type tags and single-inheritance hierarchies.
//!
//! A hierarchy is a closed set of handles, usually an enum, whose `parent`
//! relation is a static table. Walks stop at the first handle without a parent;
//! a cyclic table would make [`basetypes`] infinite.

/// A nominal type handle with at most one parent.
pub trait TypeHandle: Copy + PartialEq {
    fn parent(self) -> Option<Self>;
}

/// Values that report the handle of their own type.
pub trait Tagged {
    type Tag: PartialEq;

    fn type_tag(&self) -> Self::Tag;
}

/// True if `value`'s own tag is exactly `tag` (ancestors do not count).
pub fn is_a<V: Tagged + ?Sized>(value: &V, tag: V::Tag) -> bool {
    value.type_tag() == tag
}

/// True if `value` [`is_a`] any of `tags`. Stops at the first match.
pub fn is_any<V, I>(value: &V, tags: I) -> bool
where
    V: Tagged + ?Sized,
    I: IntoIterator<Item = V::Tag>,
{
    tags.into_iter().any(|tag| is_a(value, tag))
}

/// The immediate parent of `ty`, or `None` for a root.
pub fn basetype<T: TypeHandle>(ty: T) -> Option<T> {
    ty.parent()
}

/// `ty` followed by each of its ancestors, ending at the root.
pub fn basetypes<T: TypeHandle>(ty: T) -> impl Iterator<Item = T> {
    std::iter::successors(Some(ty), |current| basetype(*current))
}

/// True if `ty` is `base` or descends from it.
pub fn has_base<T: TypeHandle>(ty: T, base: T) -> bool {
    basetypes(ty).any(|ancestor| ancestor == base)
}

/// True if `value` equals one of `options`.
pub fn oneof<T, O, I>(value: &T, options: I) -> bool
where
    T: PartialEq<O> + ?Sized,
    I: IntoIterator<Item = O>,
{
    oneof_with(value, options, |value, option| value == option)
}

/// True if `cmp(value, option)` holds for one of `options`.
pub fn oneof_with<T, O, I, F>(value: &T, options: I, mut cmp: F) -> bool
where
    T: ?Sized,
    I: IntoIterator<Item = O>,
    F: FnMut(&T, &O) -> bool,
{
    options.into_iter().any(|option| cmp(value, &option))
}
