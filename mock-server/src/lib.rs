use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const DELETE_CONFIRMATION: &str = "Movie Deleted Successfully";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, deserialize_with = "null_as_default")]
    pub movie_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
pub struct NameQuery {
    pub movie_name: String,
}

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// In-memory catalog. Ids are handed out sequentially starting at 1.
#[derive(Debug, Default)]
pub struct Catalog {
    last_id: u32,
    movies: BTreeMap<u32, Movie>,
}

impl Catalog {
    fn insert(&mut self, mut movie: Movie) -> Movie {
        self.last_id += 1;
        movie.movie_id = self.last_id;
        self.movies.insert(movie.movie_id, movie.clone());
        movie
    }
}

pub type Db = Arc<RwLock<Catalog>>;

type ApiError = (StatusCode, String);

fn not_found(message: String) -> ApiError {
    (StatusCode::NOT_FOUND, message)
}

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router preloaded with `movies`; their ids are reassigned in order.
pub fn app_with(movies: Vec<Movie>) -> Router {
    let mut catalog = Catalog::default();
    for movie in movies {
        catalog.insert(movie);
    }
    let db: Db = Arc::new(RwLock::new(catalog));
    Router::new()
        .route("/movieservice/v1/allMovies", get(list_movies))
        .route("/movieservice/v1/movie", post(add_movie))
        .route(
            "/movieservice/v1/movie/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/movieservice/v1/movieName", get(movies_by_name))
        .route("/movieservice/v1/movieYear", get(movies_by_year))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, movies: Vec<Movie>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(movies)).await
}

async fn list_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    let catalog = db.read().await;
    Json(catalog.movies.values().cloned().collect())
}

async fn get_movie(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Movie>, ApiError> {
    let catalog = db.read().await;
    catalog
        .movies
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("No Movie Available with the given Id - {id}")))
}

async fn movies_by_name(
    State(db): State<Db>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let catalog = db.read().await;
    let matches: Vec<Movie> = catalog
        .movies
        .values()
        .filter(|m| m.name.as_deref().is_some_and(|n| n.contains(&query.movie_name)))
        .cloned()
        .collect();
    if matches.is_empty() {
        return Err(not_found(format!(
            "No Movie Available with the given name - {}",
            query.movie_name
        )));
    }
    Ok(Json(matches))
}

async fn movies_by_year(
    State(db): State<Db>,
    Query(query): Query<YearQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let catalog = db.read().await;
    let matches: Vec<Movie> = catalog
        .movies
        .values()
        .filter(|m| m.year == query.year)
        .cloned()
        .collect();
    if matches.is_empty() {
        return Err(not_found(format!(
            "No Movie Available with the given year - {}",
            query.year
        )));
    }
    Ok(Json(matches))
}

async fn add_movie(State(db): State<Db>, Json(input): Json<Movie>) -> Result<Json<Movie>, ApiError> {
    if input.name.as_deref().is_none_or(str::is_empty) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please pass all the input fields : [name]".to_string(),
        ));
    }
    let movie = db.write().await.insert(input);
    info!(movie_id = movie.movie_id, "movie added");
    Ok(Json(movie))
}

/// Appends the incoming cast to the stored one; other supplied fields replace
/// the stored values.
async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(input): Json<Movie>,
) -> Result<Json<Movie>, ApiError> {
    let mut catalog = db.write().await;
    let movie = catalog
        .movies
        .get_mut(&id)
        .ok_or_else(|| not_found(format!("No Movie Available with the given Id - {id}")))?;
    if !input.cast.is_empty() {
        movie.cast = if movie.cast.is_empty() {
            input.cast
        } else {
            format!("{} {}", movie.cast, input.cast)
        };
    }
    if input.name.is_some() {
        movie.name = input.name;
    }
    if input.release_date.is_some() {
        movie.release_date = input.release_date;
    }
    if input.year != 0 {
        movie.year = input.year;
    }
    debug!(movie_id = id, "movie updated");
    Ok(Json(movie.clone()))
}

async fn delete_movie(State(db): State<Db>, Path(id): Path<u32>) -> Result<&'static str, ApiError> {
    let mut catalog = db.write().await;
    catalog
        .movies
        .remove(&id)
        .map(|_| DELETE_CONFIRMATION)
        .ok_or_else(|| not_found(format!("No Movie Available with the given Id - {id}")))
}
