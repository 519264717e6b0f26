//! Catalog Seeder
//!
//! Loads the tournament/player/match reference data from JSON files and
//! replaces the catalog tables with it. Usage:
//!
//! ```text
//! cargo run --bin seed [data-dir]    # default data-dir: database/seed
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TournamentSeed {
    name: String,
    slug: String,
    is_grand_slam: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerSeed {
    name: String,
    slug: String,
    country_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchSeed {
    tournament_slug: String,
    year: i32,
    round: String,
    is_final: bool,
    best_of: i16,
    category: String,
    player1_slug: String,
    player2_slug: String,
    score: String,
    title: String,
}

fn load<T: serde::de::DeserializeOwned>(dir: &Path, file: &str) -> anyhow::Result<T> {
    let path = dir.join(file);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("database/seed"));

    let tournaments: Vec<TournamentSeed> = load(&data_dir, "tournaments.json")?;
    let players: Vec<PlayerSeed> = load(&data_dir, "players.json")?;
    let matches: Vec<MatchSeed> = load(&data_dir, "matches.json")?;

    let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    // Replace everything in reverse dependency order
    tracing::info!("Clearing existing catalog data");
    sqlx::query("DELETE FROM matches").execute(&pool).await?;
    sqlx::query("DELETE FROM players").execute(&pool).await?;
    sqlx::query("DELETE FROM tournaments").execute(&pool).await?;

    tracing::info!(count = tournaments.len(), "Seeding tournaments");
    let mut tournament_ids = HashMap::new();
    for t in &tournaments {
        let id = insert_tournament(&pool, t).await?;
        tournament_ids.insert(t.slug.clone(), id);
    }

    tracing::info!(count = players.len(), "Seeding players");
    let mut player_ids = HashMap::new();
    for p in &players {
        let id = insert_player(&pool, p).await?;
        player_ids.insert(p.slug.clone(), id);
    }

    tracing::info!(count = matches.len(), "Seeding matches");
    let mut skipped = 0usize;
    for (index, m) in matches.iter().enumerate() {
        let refs = (
            tournament_ids.get(&m.tournament_slug),
            player_ids.get(&m.player1_slug),
            player_ids.get(&m.player2_slug),
        );
        let (Some(&tournament_id), Some(&player1_id), Some(&player2_id)) = refs else {
            tracing::warn!(
                index,
                tournament = %m.tournament_slug,
                player1 = %m.player1_slug,
                player2 = %m.player2_slug,
                "Skipping match with missing reference"
            );
            skipped += 1;
            continue;
        };

        insert_match(&pool, m, tournament_id, player1_id, player2_id).await?;
    }

    tracing::info!(
        created = matches.len() - skipped,
        skipped = skipped,
        "Seed completed"
    );

    Ok(())
}

async fn insert_tournament(pool: &PgPool, t: &TournamentSeed) -> anyhow::Result<Uuid> {
    let row = sqlx::query(
        r#"
        INSERT INTO tournaments (id, name, slug, is_grand_slam, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&t.name)
    .bind(&t.slug)
    .bind(t.is_grand_slam)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

async fn insert_player(pool: &PgPool, p: &PlayerSeed) -> anyhow::Result<Uuid> {
    let row = sqlx::query(
        r#"
        INSERT INTO players (id, name, slug, country_code, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&p.name)
    .bind(&p.slug)
    .bind(&p.country_code)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

async fn insert_match(
    pool: &PgPool,
    m: &MatchSeed,
    tournament_id: Uuid,
    player1_id: Uuid,
    player2_id: Uuid,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO matches (
            id, tournament_id, year, round, is_final, best_of, category,
            player1_id, player2_id, score, title, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW(), NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(tournament_id)
    .bind(m.year)
    .bind(&m.round)
    .bind(m.is_final)
    .bind(m.best_of)
    .bind(&m.category)
    .bind(player1_id)
    .bind(player2_id)
    .bind(&m.score)
    .bind(&m.title)
    .execute(pool)
    .await?;

    Ok(())
}
