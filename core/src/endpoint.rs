//! Maps logical catalog operations onto the service's URL scheme.

use url::form_urlencoded;

use crate::http::{HttpMethod, HttpRequest};

pub const ALL_MOVIES_PATH: &str = "/movieservice/v1/allMovies";
pub const MOVIE_PATH: &str = "/movieservice/v1/movie";
pub const MOVIE_BY_NAME_PATH: &str = "/movieservice/v1/movieName";
pub const MOVIE_BY_YEAR_PATH: &str = "/movieservice/v1/movieYear";

/// A catalog operation together with its path and query parameters.
///
/// Request bodies are not part of the descriptor; the client encodes them
/// separately so that resolution stays infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    List,
    GetById(u32),
    GetByName(&'a str),
    GetByYear(i32),
    Create,
    Update(u32),
    Delete(u32),
}

impl Operation<'_> {
    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::List
            | Operation::GetById(_)
            | Operation::GetByName(_)
            | Operation::GetByYear(_) => HttpMethod::Get,
            Operation::Create => HttpMethod::Post,
            Operation::Update(_) => HttpMethod::Put,
            Operation::Delete(_) => HttpMethod::Delete,
        }
    }

    /// Short name used in log records.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list_movies",
            Operation::GetById(_) => "get_movie",
            Operation::GetByName(_) => "movies_by_name",
            Operation::GetByYear(_) => "movies_by_year",
            Operation::Create => "add_movie",
            Operation::Update(_) => "update_movie",
            Operation::Delete(_) => "delete_movie",
        }
    }

    fn path_and_query(&self) -> String {
        match self {
            Operation::List => ALL_MOVIES_PATH.to_string(),
            Operation::Create => MOVIE_PATH.to_string(),
            Operation::GetById(id) | Operation::Update(id) | Operation::Delete(id) => {
                format!("{MOVIE_PATH}/{id}")
            }
            Operation::GetByName(name) => {
                format!("{MOVIE_BY_NAME_PATH}?{}", query("movie_name", name))
            }
            Operation::GetByYear(year) => {
                format!("{MOVIE_BY_YEAR_PATH}?{}", query("year", &year.to_string()))
            }
        }
    }
}

fn query(key: &str, value: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}

/// Builds request targets against a fixed base URL.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    base_url: String,
}

impl EndpointResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolve(&self, operation: &Operation<'_>) -> HttpRequest {
        HttpRequest::new(
            operation.method(),
            format!("{}{}", self.base_url, operation.path_and_query()),
        )
    }
}
