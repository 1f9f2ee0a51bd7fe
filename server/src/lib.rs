//! In-memory hero web API, seeded with the tutorial roster.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// Id given to the first hero created in an empty store.
const FIRST_ID: u32 = 11;

const SEED: [(u32, &str); 9] = [
    (12, "Dr. Nice"),
    (13, "Bombasto"),
    (14, "Celeritas"),
    (15, "Magneta"),
    (16, "RubberMan"),
    (17, "Dynama"),
    (18, "Dr. IQ"),
    (19, "Magma"),
    (20, "Tornado"),
];

pub fn seed_heroes() -> Vec<Hero> {
    SEED.iter()
        .map(|&(id, name)| Hero {
            id,
            name: name.to_string(),
        })
        .collect()
}

/// Router over the seeded roster.
pub fn app() -> Router {
    router(seed_heroes())
}

/// Router over an empty store.
pub fn empty_app() -> Router {
    router(Vec::new())
}

fn router(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Hero API listening");
    }
    axum::serve(listener, app()).await
}

/// Lists every hero by id, or only those whose name contains `?name=`,
/// ignoring case.
async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let needle = params.name.map(|name| name.to_lowercase());
    let matches = heroes
        .values()
        .filter(|hero| match &needle {
            Some(needle) => hero.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    Json(matches)
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let id = heroes
        .keys()
        .next_back()
        .map_or(FIRST_ID, |max| max + 1);
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            hero.name = input.name;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
