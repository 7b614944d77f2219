pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::skill::Skill;
pub use storage::{MemorySkillsStorage, PostgresSkillsStorage, SkillsStorage};
