use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::models::*;
use crate::error::{AppError, AppResult};

// ============================================================================
// Team Member Repository
// ============================================================================

pub struct TeamMemberRepository;

impl TeamMemberRepository {
    pub async fn create(pool: &SqlitePool, create: CreateTeamMember) -> AppResult<TeamMember> {
        let id = create.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = Utc::now().naive_utc();

        sqlx::query_as::<_, TeamMember>(
            r#"
            INSERT INTO team_members (id, name, role, avatar_url, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, role, avatar_url, created_at
            "#,
        )
        .bind(id)
        .bind(create.name)
        .bind(create.role)
        .bind(create.avatar_url)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(AppError::Database)
    }

    pub async fn list(pool: &SqlitePool) -> AppResult<Vec<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT id, name, role, avatar_url, created_at FROM team_members ORDER BY rowid",
        )
        .fetch_all(pool)
        .await
        .map_err(AppError::Database)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> AppResult<Option<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT id, name, role, avatar_url, created_at FROM team_members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init::connect_in_memory;

    #[tokio::test]
    async fn members_keep_insertion_order() {
        let pool = connect_in_memory().await.unwrap();
        for (id, name) in [("b", "Blake"), ("a", "Avery")] {
            TeamMemberRepository::create(
                &pool,
                CreateTeamMember {
                    id: Some(id.to_string()),
                    name: name.to_string(),
                    role: "Coach".to_string(),
                    avatar_url: None,
                },
            )
            .await
            .unwrap();
        }

        let members = TeamMemberRepository::list(&pool).await.unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Blake", "Avery"]);

        let avery = TeamMemberRepository::find_by_id(&pool, "a").await.unwrap();
        assert_eq!(avery.map(|m| m.name), Some("Avery".to_string()));
        assert!(TeamMemberRepository::find_by_id(&pool, "zzz").await.unwrap().is_none());
    }
}
