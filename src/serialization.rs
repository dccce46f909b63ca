//! Byte encoding of encoder parameter structs.
//!
//! [`IntegerEncoderParams`](crate::preprocessing::IntegerEncoderParams) holds
//! the fitted column names and their sorted label lists;
//! [`OneHotEncoderParams`](crate::preprocessing::OneHotEncoderParams) holds
//! the resolved column list. Both go through bincode, and vocabularies'
//! lookup maps are rebuilt on load rather than stored.

use crate::preprocessing::error::Result;

/// Parameters that can be written to and read back from bytes.
///
/// Implemented for every serde type; decode failures surface as
/// [`PreprocessingError::Serialization`](crate::preprocessing::PreprocessingError::Serialization).
pub trait SerializableParams: Sized {
    fn to_bytes(&self) -> Result<Vec<u8>>;

    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
