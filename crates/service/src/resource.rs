//! What the generic CRUD layer needs to know about a record type.

use std::{fmt::{Debug, Display}, str::FromStr};

use serde::{de::DeserializeOwned, Serialize};

/// Key of a record.
///
/// Keys are either handed out by the store (`i64`) or supplied by the caller
/// when the record is created (`String`).
pub trait RecordKey: Clone + Ord + Debug + Display + FromStr + Send + Sync + 'static {
    /// Key for the `seq`-th inserted record, or `None` when keys come from the caller.
    fn generate(seq: i64) -> Option<Self>;
}

impl RecordKey for i64 {
    fn generate(seq: i64) -> Option<Self> {
        Some(seq)
    }
}

impl RecordKey for String {
    fn generate(_seq: i64) -> Option<Self> {
        None
    }
}

/// A record type exposed through the uniform CRUD surface.
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Key: RecordKey;
    /// Query parameters accepted on create.
    type Params: DeserializeOwned + Debug + Send + 'static;

    /// Entity name used in not-found and delete messages.
    const NAME: &'static str;
    /// Base path of the HTTP surface, e.g. `/api/articles`.
    const PATH: &'static str;
    /// Query parameter carrying the key on get-by-key. Update and delete always use `id`.
    const GET_PARAM: &'static str = "id";

    /// Build an unsaved record. Store-generated keys are left at their zero value.
    fn from_params(params: Self::Params) -> Self;
    fn key(&self) -> Self::Key;
    fn set_key(&mut self, key: Self::Key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_are_generated() {
        assert_eq!(i64::generate(3), Some(3));
    }

    #[test]
    fn string_keys_come_from_caller() {
        assert_eq!(String::generate(3), None);
    }
}
