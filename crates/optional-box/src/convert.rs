//! Conversions between `OptionalBox<T>` and `Option<T>`, plus serde support.

use crate::optional::OptionalBox;

impl<T> OptionalBox<T> {
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent => None,
        }
    }
}

impl<T> Default for OptionalBox<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> From<Option<T>> for OptionalBox<T> {
    fn from(value: Option<T>) -> Self { Self::of_nullable(value) }
}

impl<T> From<OptionalBox<T>> for Option<T> {
    fn from(value: OptionalBox<T>) -> Self { value.into_option() }
}

// Same wire shape as `Option<T>`: absent is `none`, present is the bare value.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OptionalBox<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(v) => serializer.serialize_some(v),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for OptionalBox<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::of_nullable)
    }
}
