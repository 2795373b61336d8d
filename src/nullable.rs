//! The editor writes `null` for leaves it never filled in. Those decode to
//! the zero value, same as a missing field.

use serde::{Deserialize, Deserializer};

pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
