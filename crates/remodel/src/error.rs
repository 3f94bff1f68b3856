use thiserror::Error as ThisError;

///
/// KeyError
///
/// Errors raised when normalizing a field value into a record identity.
/// The reducers themselves never surface this: a record whose key field
/// fails normalization is carried under the `Key::Unit` sentinel instead.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyError {
    #[error("identity must be an integer or string, got {kind}")]
    NotKeyable { kind: &'static str },

    #[error("integer identity {value} exceeds the supported range")]
    OutOfRange { value: u64 },
}
