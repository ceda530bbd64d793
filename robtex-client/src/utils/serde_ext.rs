//! Serde helpers for loosely typed wire fields.

use serde::{Deserialize, Deserializer};

/// Decode an explicit JSON `null` as `T::default()`.
///
/// `#[serde(default)]` only covers missing keys; the service also sends `null`
/// for empty lists and unknown strings.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Boolean flag sent as an integer (`0`/`1`) or a JSON boolean.
///
/// Any non-zero integer decodes to `true`. Serializes back as `0`/`1`.
pub mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrBool {
            Bool(bool),
            I64(i64),
            U64(u64),
        }

        Ok(match Option::<IntOrBool>::deserialize(deserializer)? {
            None => false,
            Some(IntOrBool::Bool(b)) => b,
            Some(IntOrBool::I64(n)) => n != 0,
            Some(IntOrBool::U64(n)) => n != 0,
        })
    }
}
