//! In-memory skills storage.
//!
//! Process-resident only: nothing survives a restart. Used by the test
//! suite and when `USE_DB_MOCK=true`.

use crate::domain::skill::Skill;
use crate::storage::SkillsStorage;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;

/// A process-memory-resident record list with an atomic id allocator.
///
/// The allocator is strictly increasing and scoped to this instance, so ids
/// stay unique for the instance's lifetime even after deletions, and two
/// concurrent inserts can never race into the same id.
pub struct MemorySkillsStorage {
    skills: Mutex<Vec<Skill>>,
    next_id: AtomicI64,
}

impl MemorySkillsStorage {
    pub fn new() -> Self {
        Self {
            skills: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemorySkillsStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SkillsStorage for MemorySkillsStorage {
    async fn get_all(&self) -> anyhow::Result<Vec<Skill>> {
        // Insertion order, which is stable for equal contents.
        Ok(self.skills.lock().await.clone())
    }

    async fn insert(&self, name: &str, rate: i32) -> anyhow::Result<Skill> {
        let skill = Skill {
            skill_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: name.to_string(),
            rate,
            updated_at: Utc::now(),
        };
        self.skills.lock().await.push(skill.clone());
        Ok(skill)
    }

    async fn delete(&self, skill_id: i64) -> anyhow::Result<bool> {
        let mut skills = self.skills.lock().await;
        let initial_len = skills.len();
        skills.retain(|skill| skill.skill_id != skill_id);
        Ok(skills.len() < initial_len)
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.skills.lock().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_distinct_positive_ids() -> anyhow::Result<()> {
        let storage = MemorySkillsStorage::new();
        let a = storage.insert("TypeScript", 8).await?;
        let b = storage.insert("NodeJS", 7).await?;

        assert!(a.skill_id > 0);
        assert!(b.skill_id > 0);
        assert_ne!(a.skill_id, b.skill_id);
        assert_eq!(a.name, "TypeScript");
        assert_eq!(a.rate, 8);
        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_presence() -> anyhow::Result<()> {
        let storage = MemorySkillsStorage::new();
        let skill = storage.insert("React", 9).await?;

        assert!(storage.delete(skill.skill_id).await?);
        // Second delete of the same id: absence, not an error.
        assert!(!storage.delete(skill.skill_id).await?);
        assert!(!storage.delete(99999).await?);
        Ok(())
    }

    #[tokio::test]
    async fn delete_leaves_other_records_untouched() -> anyhow::Result<()> {
        let storage = MemorySkillsStorage::new();
        let keep = storage.insert("TypeScript", 8).await?;
        let doomed = storage.insert("NodeJS", 7).await?;

        assert!(storage.delete(doomed.skill_id).await?);

        let remaining = storage.get_all().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].skill_id, keep.skill_id);
        assert_eq!(remaining[0].name, "TypeScript");
        assert_eq!(remaining[0].rate, 8);
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() -> anyhow::Result<()> {
        let storage = MemorySkillsStorage::new();
        let original = storage.insert("Angular", 6).await?;
        assert!(storage.delete(original.skill_id).await?);

        // Same name/rate again: a brand new identity.
        let recreated = storage.insert("Angular", 6).await?;
        assert_ne!(recreated.skill_id, original.skill_id);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() -> anyhow::Result<()> {
        let storage = std::sync::Arc::new(MemorySkillsStorage::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                storage.insert(&format!("skill-{}", i), 5).await
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            let skill = handle.await??;
            assert!(ids.insert(skill.skill_id), "duplicate id {}", skill.skill_id);
        }
        assert_eq!(ids.len(), 32);
        Ok(())
    }

    #[tokio::test]
    async fn clear_empties_the_store() -> anyhow::Result<()> {
        let storage = MemorySkillsStorage::new();
        storage.insert("Vue.js", 7).await?;
        storage.clear().await?;
        assert!(storage.get_all().await?.is_empty());
        Ok(())
    }
}
