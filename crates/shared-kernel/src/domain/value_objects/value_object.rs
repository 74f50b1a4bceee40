// crates/shared-kernel/src/domain/value_objects/value_object.rs

use crate::errors::Result;

/// Tout value object se valide lui-même : `try_new` appelle `validate`,
/// `from_raw` (reconstruction depuis le store) ne le fait pas.
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;
}
