use std::{fmt, marker::PhantomData, str::FromStr};

/// Serde visitor that deserializes a string through the type's [`FromStr`]
/// implementation.
pub struct FromStrVisitor<T>(PhantomData<T>);

impl<T> FromStrVisitor<T> {
    /// Creates a new visitor.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FromStrVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromStr> serde::de::Visitor<'_> for FromStrVisitor<T>
where
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string parseable as {}", std::any::type_name::<T>())
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        T::from_str(v).map_err(serde::de::Error::custom)
    }
}
