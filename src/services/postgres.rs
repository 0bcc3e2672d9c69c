use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use std::str::FromStr;
use std::time::Duration;

use crate::models::{CandidateFilters, FamilyPlans, MatchAck, MatchAction, Profile};
use crate::services::store::{MatchActionStore, ProfileStore, StoreError};

const PROFILE_COLUMNS: &str = "id, name, industry, stage, location, \"values\", interests, \
    entrepreneurial_goals, work_life_balance, communication_style, family_plans, birth_year, is_active";

/// PostgreSQL-backed profile and action store
///
/// Expects a `profiles` table whose tag columns are `TEXT[]`, enum columns
/// are `TEXT` holding the upper-case variant names and `family_plans` is
/// `JSONB`, plus a `match_actions` table keyed by UUID.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new store from a connection string
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to PostgreSQL (max: {} connections, min: {})",
            max_connections,
            min_connections
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Append the WHERE clause, ordering and limit for a candidate query
fn push_candidate_query(query: &mut QueryBuilder<'_, Postgres>, filters: &CandidateFilters, limit: usize) {
    query.push(" WHERE id <> ").push_bind(filters.exclude_id.clone());

    if filters.require_active {
        query.push(" AND is_active = TRUE");
    }

    if let Some((earliest, latest)) = filters.birth_year_range {
        query
            .push(" AND birth_year BETWEEN ")
            .push_bind(earliest)
            .push(" AND ")
            .push_bind(latest);
    }

    if !filters.locations.is_empty() {
        query.push(" AND location = ANY(").push_bind(filters.locations.clone()).push(")");
    }

    if !filters.industries.is_empty() {
        query.push(" AND industry = ANY(").push_bind(filters.industries.clone()).push(")");
    }

    if !filters.stages.is_empty() {
        let stages: Vec<String> = filters.stages.iter().map(|s| s.as_str().to_string()).collect();
        query.push(" AND stage = ANY(").push_bind(stages).push(")");
    }

    if filters.exclude_contacted {
        query
            .push(" AND NOT EXISTS (SELECT 1 FROM match_actions a WHERE a.from_id = ")
            .push_bind(filters.exclude_id.clone())
            .push(" AND a.to_id = profiles.id)");
    }

    query.push(" ORDER BY id LIMIT ").push_bind(limit as i64);
}

fn parse_column<T: FromStr<Err = String>>(value: Option<String>) -> Result<Option<T>, StoreError> {
    value
        .map(|v| v.parse::<T>())
        .transpose()
        .map_err(StoreError::Backend)
}

fn profile_from_row(row: &PgRow) -> Result<Profile, StoreError> {
    let tags = |column: &str| -> Result<Option<std::collections::BTreeSet<String>>, StoreError> {
        let values: Option<Vec<String>> = row.try_get(column)?;
        Ok(values.map(|v| v.into_iter().collect()))
    };
    let family_plans: Option<Json<FamilyPlans>> = row.try_get("family_plans")?;

    Ok(Profile {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        industry: row.try_get("industry")?,
        stage: parse_column(row.try_get("stage")?)?,
        location: row.try_get("location")?,
        values: tags("values")?,
        interests: tags("interests")?,
        entrepreneurial_goals: tags("entrepreneurial_goals")?,
        work_life_balance: parse_column(row.try_get("work_life_balance")?)?,
        communication_style: parse_column(row.try_get("communication_style")?)?,
        family_plans: family_plans.map(|Json(plans)| plans),
        birth_year: row.try_get("birth_year")?,
        is_active: row.try_get("is_active")?,
    })
}

#[async_trait]
impl ProfileStore for PostgresStore {
    async fn get(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        let query = format!("SELECT {} FROM profiles WHERE id = $1", PROFILE_COLUMNS);

        let row = sqlx::query(&query).bind(id).fetch_optional(&self.pool).await?;

        row.as_ref().map(profile_from_row).transpose()
    }

    async fn query(&self, filters: &CandidateFilters, limit: usize) -> Result<Vec<Profile>, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM profiles", PROFILE_COLUMNS));
        push_candidate_query(&mut query, filters, limit);

        let rows = query.build().fetch_all(&self.pool).await?;

        tracing::debug!("Candidate query for {} returned {} rows", filters.exclude_id, rows.len());

        rows.iter().map(profile_from_row).collect()
    }
}

#[async_trait]
impl MatchActionStore for PostgresStore {
    async fn record(
        &self,
        from_id: &str,
        to_id: &str,
        action: MatchAction,
        message: Option<&str>,
    ) -> Result<MatchAck, StoreError> {
        if from_id == to_id {
            return Err(StoreError::InvalidInput(format!(
                "profile {} cannot act on itself",
                from_id
            )));
        }

        let query = r#"
            INSERT INTO match_actions (id, from_id, to_id, action, message, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING created_at
        "#;

        let action_id = uuid::Uuid::new_v4();
        let row = sqlx::query(query)
            .bind(action_id)
            .bind(from_id)
            .bind(to_id)
            .bind(action.as_str())
            .bind(message)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Recorded action: {} -> {} ({})", from_id, to_id, action.as_str());

        Ok(MatchAck {
            action_id,
            recorded_at: row.try_get("created_at")?,
        })
    }
}
