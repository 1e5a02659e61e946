use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A candidate key is not exactly 12 decimal digits.
    #[error("invalid key {value:?}: expected exactly 12 decimal digits")]
    InvalidKey { value: String },

    /// A table size, round count or key count of zero.
    #[error("invalid configuration: {name} must be positive, got {value}")]
    Configuration { name: &'static str, value: usize },

    /// A digester name missing from the registry.
    #[error("unknown digest {name:?}, try --digest print")]
    UnknownDigester { name: String },
}

impl SimError {
    pub(crate) fn invalid_key(value: &str) -> Self {
        SimError::InvalidKey {
            value: value.to_owned(),
        }
    }

    /// Fails with [`SimError::Configuration`] unless `value` is positive.
    pub(crate) fn check_positive(name: &'static str, value: usize) -> Result<usize> {
        if value == 0 {
            Err(SimError::Configuration { name, value })
        } else {
            Ok(value)
        }
    }
}
