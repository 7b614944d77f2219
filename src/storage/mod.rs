//! The skills persistence capability and its two backends.

pub mod memory;
pub mod postgres;

pub use memory::MemorySkillsStorage;
pub use postgres::PostgresSkillsStorage;

use crate::domain::skill::Skill;
use async_trait::async_trait;

/// Persistence capability for skill records.
///
/// Both backends must be interchangeable behind this trait: identical return
/// semantics, including `Ok(false)` (not an error) when deleting an id that
/// does not exist. Validation of `name`/`rate` happens in the controllers,
/// before any of these calls; the storage is a dumb persistence layer.
#[async_trait]
pub trait SkillsStorage: Send + Sync + 'static {
    /// Returns every live record. Ordering is backend-defined but stable
    /// within a process lifetime for equal contents.
    async fn get_all(&self) -> anyhow::Result<Vec<Skill>>;

    /// Stores a new record with a freshly allocated unique `skill_id` and the
    /// current timestamp, and returns it. Ids are never reused after a
    /// delete for the lifetime of the storage instance.
    async fn insert(&self, name: &str, rate: i32) -> anyhow::Result<Skill>;

    /// Removes the record with the given id. Returns `true` if a record was
    /// removed, `false` if no record with that id existed.
    async fn delete(&self, skill_id: i64) -> anyhow::Result<bool>;

    /// Removes every record. Test-reset hook, exposed uniformly so callers
    /// never need to know which concrete backend they hold.
    async fn clear(&self) -> anyhow::Result<()>;
}
