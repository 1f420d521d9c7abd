use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::Question;

/// Service for quiz question selection.
///
/// Selection draws from an owned, seedable RNG rather than a global one so
/// tests can fix the seed. The lock is held only for the draw itself.
pub struct QuizService {
    pool: PgPool,
    rng: Mutex<StdRng>,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_rng(pool, StdRng::from_entropy())
    }

    pub fn with_rng(pool: PgPool, rng: StdRng) -> Self {
        Self {
            pool,
            rng: Mutex::new(rng),
        }
    }

    /// Pick one question not in `previous`, uniformly at random, from the
    /// given category or from all questions when no category id is given.
    /// An unknown category id simply has no candidates; exhaustion yields
    /// None. Both are successes.
    pub async fn next_question(
        &self,
        category_id: Option<i32>,
        previous: &[i32],
    ) -> Result<Option<Question>> {
        let candidates = self.candidates(category_id).await?;

        let mut rng = self.rng.lock().await;
        Ok(pick_unseen(candidates, previous, &mut *rng))
    }

    async fn candidates(&self, category_id: Option<i32>) -> Result<Vec<Question>> {
        let candidates = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty, created_at
                    FROM questions
                    WHERE category = $1
                    ORDER BY id ASC
                    "#,
                )
                .bind(category_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty, created_at
                    FROM questions
                    ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to fetch quiz candidates: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(candidates)
    }
}

/// Drop every question whose id was already seen and choose one of the
/// remainder uniformly at random.
fn pick_unseen(questions: Vec<Question>, previous: &[i32], rng: &mut impl Rng) -> Option<Question> {
    let remaining: Vec<Question> = questions
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    remaining.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fake::{faker::lorem::en::Sentence, Fake};
    use std::collections::HashSet;

    fn question(id: i32, category: i32) -> Question {
        Question {
            id,
            question: Sentence(3..8).fake(),
            answer: Sentence(1..3).fake(),
            category,
            difficulty: 1,
            created_at: Utc::now(),
        }
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn never_picks_a_previously_seen_question() {
        let questions: Vec<Question> = (1..=6).map(|id| question(id, 1)).collect();
        let previous = vec![1, 2, 3];
        let mut rng = seeded();

        for _ in 0..100 {
            let picked = pick_unseen(questions.clone(), &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_candidates_yield_none() {
        let questions: Vec<Question> = (1..=4).map(|id| question(id, 1)).collect();
        let previous = vec![1, 2, 3, 4];
        let mut rng = seeded();

        assert!(pick_unseen(questions, &previous, &mut rng).is_none());
    }

    #[test]
    fn no_candidates_yield_none() {
        let mut rng = seeded();
        assert!(pick_unseen(Vec::new(), &[], &mut rng).is_none());
    }

    #[test]
    fn every_unseen_question_is_eventually_picked() {
        let questions: Vec<Question> = (1..=5).map(|id| question(id, 1)).collect();
        let mut rng = seeded();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let picked = pick_unseen(questions.clone(), &[], &mut rng).unwrap();
            seen.insert(picked.id);
        }

        assert_eq!(seen, (1..=5).collect::<HashSet<i32>>());
    }

    #[test]
    fn a_fixed_seed_makes_the_draw_sequence_reproducible() {
        let questions: Vec<Question> = (1..=10).map(|id| question(id, 1)).collect();

        let draw = |mut rng: StdRng| -> Vec<i32> {
            (0..20)
                .map(|_| pick_unseen(questions.clone(), &[], &mut rng).unwrap().id)
                .collect()
        };

        assert_eq!(draw(seeded()), draw(seeded()));
    }
}
