use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Score;
use crate::services::submission::NormalizedScores;

const SCORE_COLUMNS: &str =
    "score_id, event_id, contestant_id, category_id, judge_id, score, created_at, updated_at";

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(&format!(
            "SELECT {SCORE_COLUMNS} FROM scores WHERE event_id = $1"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Everything one judge has submitted within an event
    pub async fn list_for_judge(&self, judge_id: Uuid, event_id: Uuid) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(&format!(
            "SELECT {SCORE_COLUMNS} FROM scores WHERE judge_id = $1 AND event_id = $2"
        ))
        .bind(judge_id)
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    pub async fn list_for_judge_and_contestant(
        &self,
        judge_id: Uuid,
        contestant_id: Uuid,
    ) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(&format!(
            "SELECT {SCORE_COLUMNS} FROM scores WHERE judge_id = $1 AND contestant_id = $2"
        ))
        .bind(judge_id)
        .bind(contestant_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Replace a judge's scores for a contestant with `submission` in a single
    /// transaction. Categories left out of the submission lose their score.
    pub async fn replace_for_judge_and_contestant(
        &self,
        submission: &NormalizedScores,
    ) -> Result<Vec<Score>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM scores WHERE judge_id = $1 AND contestant_id = $2")
            .bind(submission.judge_id)
            .bind(submission.contestant_id)
            .execute(&mut *tx)
            .await?;

        let mut stored = Vec::with_capacity(submission.entries.len());

        for entry in &submission.entries {
            let score = sqlx::query_as::<_, Score>(&format!(
                r#"
                INSERT INTO scores (event_id, contestant_id, category_id, judge_id, score)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (contestant_id, category_id, judge_id)
                DO UPDATE SET score = EXCLUDED.score, updated_at = CURRENT_TIMESTAMP
                RETURNING {SCORE_COLUMNS}
                "#
            ))
            .bind(submission.event_id)
            .bind(submission.contestant_id)
            .bind(entry.category_id)
            .bind(submission.judge_id)
            .bind(entry.score)
            .fetch_one(&mut *tx)
            .await?;

            stored.push(score);
        }

        tx.commit().await?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::category::CreateCategoryRequest;
    use crate::dto::contestant::CreateContestantRequest;
    use crate::dto::event::CreateEventRequest;
    use crate::dto::judge::CreateJudgeRequest;
    use crate::error::StorageError;
    use crate::repository::category::CategoryRepository;
    use crate::repository::contestant::ContestantRepository;
    use crate::repository::event::EventRepository;
    use crate::repository::judge::JudgeRepository;
    use crate::services::submission::NormalizedScore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    struct Seeded {
        event_id: Uuid,
        contestant_id: Uuid,
        judge_id: Uuid,
        beauty_id: Uuid,
        talent_id: Uuid,
    }

    async fn seed(pool: &PgPool) -> Seeded {
        let event = EventRepository::new(pool)
            .create(&CreateEventRequest {
                name: "Search for Ms. Psychology".to_string(),
                description: None,
                event_date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            })
            .await
            .unwrap();

        let contestant = ContestantRepository::new(pool)
            .create(
                event.event_id,
                &CreateContestantRequest {
                    name: "Maria Santos".to_string(),
                    age: 20,
                    course: "BS Computer Science".to_string(),
                    year_level: "3rd Year".to_string(),
                    photo_url: None,
                },
            )
            .await
            .unwrap();

        let categories = CategoryRepository::new(pool);
        let beauty = categories
            .create(
                event.event_id,
                &CreateCategoryRequest {
                    name: "Beauty & Poise".to_string(),
                    max_score: 25,
                    weight: Decimal::new(25, 2),
                },
            )
            .await
            .unwrap();
        let talent = categories
            .create(
                event.event_id,
                &CreateCategoryRequest {
                    name: "Talent".to_string(),
                    max_score: 20,
                    weight: Decimal::new(20, 2),
                },
            )
            .await
            .unwrap();

        let judge = JudgeRepository::new(pool)
            .create(
                event.event_id,
                &CreateJudgeRequest {
                    name: "Prof. Elena Cruz".to_string(),
                    role: "Head Judge".to_string(),
                    access_key: Some("elena-cruz-2024".to_string()),
                },
            )
            .await
            .unwrap();

        Seeded {
            event_id: event.event_id,
            contestant_id: contestant.contestant_id,
            judge_id: judge.judge_id,
            beauty_id: beauty.category_id,
            talent_id: talent.category_id,
        }
    }

    fn submission(seeded: &Seeded, entries: &[(Uuid, i64)]) -> NormalizedScores {
        NormalizedScores {
            event_id: seeded.event_id,
            judge_id: seeded.judge_id,
            contestant_id: seeded.contestant_id,
            entries: entries
                .iter()
                .map(|(category_id, score)| NormalizedScore {
                    category_id: *category_id,
                    score: Decimal::from(*score),
                })
                .collect(),
        }
    }

    async fn stored(repo: &ScoreRepository<'_>, seeded: &Seeded) -> Vec<(Uuid, Decimal)> {
        let mut rows: Vec<(Uuid, Decimal)> = repo
            .list_for_judge_and_contestant(seeded.judge_id, seeded.contestant_id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| (s.category_id, s.score))
            .collect();
        rows.sort();
        rows
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run with DATABASE_URL pointing at a Postgres server
    async fn test_resubmission_replaces_previous_score(pool: PgPool) {
        let seeded = seed(&pool).await;
        let repo = ScoreRepository::new(&pool);

        repo.replace_for_judge_and_contestant(&submission(&seeded, &[(seeded.beauty_id, 20)]))
            .await
            .unwrap();
        repo.replace_for_judge_and_contestant(&submission(&seeded, &[(seeded.beauty_id, 23)]))
            .await
            .unwrap();

        assert_eq!(stored(&repo, &seeded).await, vec![(seeded.beauty_id, Decimal::from(23))]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run with DATABASE_URL pointing at a Postgres server
    async fn test_resubmission_drops_categories_left_out(pool: PgPool) {
        let seeded = seed(&pool).await;
        let repo = ScoreRepository::new(&pool);

        repo.replace_for_judge_and_contestant(&submission(
            &seeded,
            &[(seeded.beauty_id, 20), (seeded.talent_id, 18)],
        ))
        .await
        .unwrap();
        repo.replace_for_judge_and_contestant(&submission(&seeded, &[(seeded.talent_id, 15)]))
            .await
            .unwrap();

        assert_eq!(stored(&repo, &seeded).await, vec![(seeded.talent_id, Decimal::from(15))]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run with DATABASE_URL pointing at a Postgres server
    async fn test_failed_replacement_keeps_previous_scores(pool: PgPool) {
        let seeded = seed(&pool).await;
        let repo = ScoreRepository::new(&pool);

        repo.replace_for_judge_and_contestant(&submission(
            &seeded,
            &[(seeded.beauty_id, 23), (seeded.talent_id, 18)],
        ))
        .await
        .unwrap();

        // Second insert references a category that does not exist
        let result = repo
            .replace_for_judge_and_contestant(&submission(
                &seeded,
                &[(seeded.beauty_id, 10), (Uuid::new_v4(), 5)],
            ))
            .await;
        assert!(matches!(result, Err(StorageError::Database(_))));

        let mut expected = vec![
            (seeded.beauty_id, Decimal::from(23)),
            (seeded.talent_id, Decimal::from(18)),
        ];
        expected.sort();
        assert_eq!(stored(&repo, &seeded).await, expected);
    }
}
