//! Domain DTOs for the movie catalog API.
//!
//! # Design
//! `MovieRecord` mirrors the remote service's JSON schema field for field,
//! but is defined independently from the mock-server crate. Integration tests
//! catch any schema drift between the two. Optional fields serialize as
//! `null` rather than being skipped, which is what the service expects for
//! partial updates.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog entry.
///
/// `movie_id` is assigned by the service; records built locally for a create
/// or update carry `0` until the service returns the stored copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub movie_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Encoded as `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MovieRecord {
    /// A complete record ready to be sent to `add_movie`.
    pub fn new(name: &str, cast: &str, release_date: NaiveDate, year: i32) -> Self {
        Self {
            movie_id: 0,
            cast: cast.to_string(),
            name: Some(name.to_string()),
            release_date: Some(release_date),
            year,
        }
    }

    /// A partial record for `update_movie` that only carries cast and year.
    pub fn cast_update(cast: &str, year: i32) -> Self {
        Self {
            cast: cast.to_string(),
            year,
            ..Self::default()
        }
    }
}
