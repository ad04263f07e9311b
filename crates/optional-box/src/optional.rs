//! `OptionalBox<T>`: a value that is either present or absent, and the
//! combinators over it.

use crate::error::{OptionalError, Result};

/// A value that may or may not be there.
///
/// A box is `Present` or `Absent` for its whole lifetime. Nothing here takes
/// `&mut self`: combinators consume the box and return a new one, and a box
/// that needs no transformation is moved back out unchanged.
///
/// Nesting is allowed. [`OptionalBox::map`] never looks inside what its
/// mapper returns, so mapping to a box yields `OptionalBox<OptionalBox<U>>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum OptionalBox<T> {
    Present(T),
    Absent,
}

/// Report `err` for an operation on payload type `T` and hand it back.
#[inline]
fn fail<T>(op: &'static str, err: OptionalError) -> OptionalError {
    trace_failure!(op, T, err);
    err
}

impl<T> OptionalBox<T> {
    /// A present box. `T` has no "missing" state, so this cannot fail.
    #[inline]
    pub const fn of(value: T) -> Self { Self::Present(value) }

    /// `of` for callers still holding a nullable value.
    ///
    /// `None` is rejected with [`OptionalError::NullValue`]; use
    /// [`OptionalBox::of_nullable`] to get an absent box instead.
    pub fn try_of(value: Option<T>) -> Result<Self> {
        match value {
            Some(v) => Ok(Self::Present(v)),
            None => Err(fail::<T>("try_of", OptionalError::NullValue)),
        }
    }

    /// `Some(v)` becomes present, `None` becomes absent.
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }

    #[inline]
    pub const fn empty() -> Self { Self::Absent }

    #[inline]
    pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }

    #[inline]
    pub const fn is_absent(&self) -> bool { !self.is_present() }

    /// Borrow the payload, or fail with [`OptionalError::NoSuchElement`].
    pub fn get(&self) -> Result<&T> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Absent => Err(fail::<T>("get", OptionalError::NoSuchElement)),
        }
    }

    /// Owning counterpart of [`OptionalBox::get`].
    pub fn into_inner(self) -> Result<T> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Absent => Err(fail::<T>("into_inner", OptionalError::NoSuchElement)),
        }
    }

    /// Run `consumer` on the payload, if there is one. Whatever the
    /// consumer returns is dropped.
    #[inline]
    pub fn if_present<C, R>(&self, consumer: C)
    where
        C: FnOnce(&T) -> R,
    {
        if let Self::Present(v) = self {
            let _ = consumer(v);
        }
    }

    /// Borrowed view of this box.
    #[inline]
    pub const fn as_ref(&self) -> OptionalBox<&T> {
        match self {
            Self::Present(v) => OptionalBox::Present(v),
            Self::Absent => OptionalBox::Absent,
        }
    }

    /// Keep the box if `predicate` accepts the payload, otherwise go absent.
    /// The predicate is not called on an absent box.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(v) = &self {
            if !predicate(v) {
                return Self::Absent;
            }
        }
        self
    }

    /// Apply `mapper` to the payload. The result is stored as-is, so a
    /// mapper returning a box produces a nested box.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> OptionalBox<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(v) => OptionalBox::Present(mapper(v)),
            Self::Absent => OptionalBox::Absent,
        }
    }

    /// `map` for mappers that may produce nothing: `None` gives an absent box.
    #[inline]
    pub fn map_nullable<U, F>(self, mapper: F) -> OptionalBox<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(v) => OptionalBox::of_nullable(mapper(v)),
            Self::Absent => OptionalBox::Absent,
        }
    }

    /// `map` with a fallible mapper; the mapper's error is passed through.
    pub fn try_map<U, E, F>(self, mapper: F) -> Result<OptionalBox<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Present(v) => mapper(v).map(OptionalBox::Present),
            Self::Absent => Ok(OptionalBox::Absent),
        }
    }

    /// Apply a box-returning `mapper` and flatten one level.
    ///
    /// An absent input stays absent without calling the mapper. A present
    /// input can only produce a present output: if the mapper returns an
    /// absent box, this fails with [`OptionalError::NullValue`] rather than
    /// returning absent. See [`OptionalBox::and_then`] for the variant that
    /// propagates absence.
    pub fn flat_map<U, F>(self, mapper: F) -> Result<OptionalBox<U>>
    where
        F: FnOnce(T) -> OptionalBox<U>,
    {
        match self {
            Self::Present(v) => match mapper(v) {
                OptionalBox::Present(u) => Ok(OptionalBox::of(u)),
                OptionalBox::Absent => Err(fail::<U>("flat_map", OptionalError::NullValue)),
            },
            Self::Absent => Ok(OptionalBox::Absent),
        }
    }

    /// [`OptionalBox::flat_map`] for mappers returning a nullable plain value.
    /// `None` from the mapper fails with [`OptionalError::NullValue`].
    pub fn flat_map_nullable<U, F>(self, mapper: F) -> Result<OptionalBox<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(v) => match mapper(v) {
                Some(u) => Ok(OptionalBox::of(u)),
                None => Err(fail::<U>("flat_map_nullable", OptionalError::NullValue)),
            },
            Self::Absent => Ok(OptionalBox::Absent),
        }
    }

    /// Monadic bind: an absent result from `mapper` gives an absent box.
    #[inline]
    pub fn and_then<U, F>(self, mapper: F) -> OptionalBox<U>
    where
        F: FnOnce(T) -> OptionalBox<U>,
    {
        match self {
            Self::Present(v) => mapper(v),
            Self::Absent => OptionalBox::Absent,
        }
    }

    /// The payload, or `other` when absent.
    #[inline]
    pub fn or_else(self, other: T) -> T {
        match self {
            Self::Present(v) => v,
            Self::Absent => other,
        }
    }

    /// The payload, or whatever `supplier` computes. `supplier` only runs
    /// on the absent path.
    #[inline]
    pub fn or_else_get<S>(self, supplier: S) -> T
    where
        S: FnOnce() -> T,
    {
        match self {
            Self::Present(v) => v,
            Self::Absent => supplier(),
        }
    }

    /// `Ok(payload)`, or `Err(error)` with the caller's error untouched.
    #[inline]
    pub fn or_else_throw<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Absent => Err(error),
        }
    }
}

impl<T> OptionalBox<OptionalBox<T>> {
    /// Remove one level of nesting. Absent at either level gives absent.
    #[inline]
    pub fn flatten(self) -> OptionalBox<T> { self.and_then(|inner| inner) }
}
