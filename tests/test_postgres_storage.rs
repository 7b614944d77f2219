//! Conformance tests for the Postgres backend. They exercise the same
//! observable semantics the in-memory backend is tested for, and need a
//! reachable database, so they are ignored by default:
//!
//!   DATABASE_URL=postgres://... cargo test --test test_postgres_storage -- --ignored

use skills_api::{PostgresSkillsStorage, SkillsStorage};

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a running Postgres"]
async fn test_postgres_storage_conformance() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let storage = PostgresSkillsStorage::new().await?;
    storage.clear().await?;

    // Insert assigns fresh positive ids and echoes name/rate.
    let ts = storage.insert("TypeScript", 8).await?;
    let node = storage.insert("NodeJS", 7).await?;
    assert!(ts.skill_id > 0);
    assert_ne!(ts.skill_id, node.skill_id);
    assert_eq!(ts.name, "TypeScript");
    assert_eq!(ts.rate, 8);

    let all = storage.get_all().await?;
    assert_eq!(all.len(), 2);

    // Delete reports presence, absence is not an error.
    assert!(storage.delete(node.skill_id).await?);
    assert!(!storage.delete(node.skill_id).await?);

    let remaining = storage.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].skill_id, ts.skill_id);
    assert_eq!(remaining[0].rate, 8);

    // The sequence never hands out a deleted id again.
    let recreated = storage.insert("NodeJS", 7).await?;
    assert_ne!(recreated.skill_id, node.skill_id);

    storage.clear().await?;
    assert!(storage.get_all().await?.is_empty());
    Ok(())
}
