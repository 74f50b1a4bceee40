// crates/shared-kernel/src/clock/mod.rs

use chrono::{DateTime, Utc};

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

/// Source unique de "maintenant" pour la couche application.
/// Le domaine ne lit jamais l'horloge : l'instant lui est toujours passé en paramètre.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
