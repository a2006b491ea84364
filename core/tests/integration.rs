//! End-to-end tests against the live mock catalog service.
//!
//! # Design
//! Starts the mock server on a random port in its own thread and runtime,
//! then drives the blocking `CatalogClient` over reqwest from the test
//! thread. Exercises every operation plus the error classifications that
//! depend on a real socket.

use std::net::SocketAddr;
use std::time::Duration;

use chrono::NaiveDate;
use mock_server::Movie;
use movie_core::{CatalogClient, ClientConfig, FaultKind, MovieRecord, ReqwestTransport};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn seed() -> Vec<Movie> {
    let movie = |name: &str, cast: &str, date: (i32, u32, u32)| Movie {
        movie_id: 0,
        cast: cast.to_string(),
        name: Some(name.to_string()),
        release_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        year: date.0,
    };
    vec![
        movie("Batman Begins", "Christian Bale, Katie Holmes", (2005, 6, 15)),
        movie("Dark Knight", "Christian Bale, Heath Ledger , Michael Caine", (2008, 7, 18)),
        movie("The Dark Knight Rises", "Christian Bale, Heath Ledger , Michael Caine", (2012, 7, 20)),
        movie("The Avengers", "Robert Downey Jr, Chris Evans", (2012, 5, 4)),
    ]
}

/// Start the mock server with `movies` and return its address.
fn start_server(movies: Vec<Movie>) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, movies).await
        })
        .unwrap();
    });

    addr
}

fn client(addr: SocketAddr) -> CatalogClient {
    init_tracing();
    let config = ClientConfig::new(&format!("http://{addr}")).with_timeout(Duration::from_secs(10));
    CatalogClient::from_config(&config).unwrap()
}

#[test]
fn read_operations() {
    let client = client(start_server(seed()));

    let all = client.list_movies().unwrap();
    assert_eq!(all.len(), 4);
    let ids: Vec<u32> = all.iter().map(|m| m.movie_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let dark_knight = client.get_movie(2).unwrap();
    assert_eq!(
        dark_knight,
        MovieRecord {
            movie_id: 2,
            cast: "Christian Bale, Heath Ledger , Michael Caine".to_string(),
            name: Some("Dark Knight".to_string()),
            release_date: NaiveDate::from_ymd_opt(2008, 7, 18),
            year: 2008,
        }
    );

    let by_name = client.movies_by_name("Dark").unwrap();
    assert_eq!(by_name.len(), 2);
    assert!(by_name
        .iter()
        .all(|m| m.name.as_deref().is_some_and(|n| n.contains("Dark"))));

    let by_name = client.movies_by_name("Dark Knight Rises").unwrap();
    assert_eq!(by_name.len(), 1);

    let by_year = client.movies_by_year(2012).unwrap();
    assert_eq!(by_year.len(), 2);
    assert!(by_year.iter().all(|m| m.year == 2012));
}

#[test]
fn not_found_cases_are_client_faults() {
    let client = client(start_server(seed()));

    let err = client.get_movie(5).unwrap_err();
    assert_eq!(err.kind(), FaultKind::Client);
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.detail(),
        Some("Not Found: No Movie Available with the given Id - 5")
    );

    assert_eq!(client.movies_by_name("White").unwrap_err().kind(), FaultKind::Client);
    assert_eq!(client.movies_by_year(2013).unwrap_err().kind(), FaultKind::Client);
    assert_eq!(
        client
            .update_movie(99, &MovieRecord::cast_update("Updated Cast", 2021))
            .unwrap_err()
            .kind(),
        FaultKind::Client
    );
    assert_eq!(client.delete_movie(99).unwrap_err().kind(), FaultKind::Client);
}

#[test]
fn crud_lifecycle() {
    let client = client(start_server(Vec::new()));

    // Step 1: list - should be empty.
    assert!(client.list_movies().unwrap().is_empty());

    // Step 2: create.
    let new_movie = MovieRecord::new(
        "New Movie 2024 3",
        "Christian Bale 1, Heath Ledger 2 , Michael Caine 3",
        NaiveDate::from_ymd_opt(2024, 6, 18).unwrap(),
        2024,
    );
    let added = client.add_movie(&new_movie).unwrap();
    assert_ne!(added.movie_id, 0);
    assert_eq!(
        MovieRecord {
            movie_id: 0,
            ..added.clone()
        },
        new_movie
    );
    let id = added.movie_id;

    // Step 3: get the created movie.
    assert_eq!(client.get_movie(id).unwrap(), added);

    // Step 4: update cast.
    let updated = client
        .update_movie(id, &MovieRecord::cast_update("Updated Cast", 2024))
        .unwrap();
    assert_eq!(updated.cast, format!("{} Updated Cast", new_movie.cast));
    assert_eq!(updated.name, new_movie.name);

    // Step 5: delete.
    assert_eq!(client.delete_movie(id).unwrap(), "Movie Deleted Successfully");

    // Step 6: get after delete - client fault.
    let err = client.get_movie(id).unwrap_err();
    assert_eq!(err.kind(), FaultKind::Client);

    // Step 7: list - empty again.
    assert!(client.list_movies().unwrap().is_empty());
}

#[test]
fn add_movie_without_name_is_rejected_by_service() {
    let client = client(start_server(Vec::new()));

    let movie = MovieRecord {
        name: None,
        ..MovieRecord::new(
            "ignored",
            "Christian Bale, Heath Ledger , Michael Caine",
            NaiveDate::from_ymd_opt(2024, 6, 18).unwrap(),
            2024,
        )
    };
    let err = client.add_movie(&movie).unwrap_err();
    assert_eq!(err.kind(), FaultKind::Client);
    assert_eq!(err.status(), Some(400));
    assert!(client.list_movies().unwrap().is_empty());
}

#[test]
fn unreachable_service_is_a_transport_fault() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(addr);
    let err = client.list_movies().unwrap_err();
    assert_eq!(err.kind(), FaultKind::Transport);
    assert_eq!(err.status(), None);
}

#[test]
fn injected_reqwest_client_is_used() {
    init_tracing();
    let addr = start_server(seed());
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();
    let client = CatalogClient::with_transport(
        &ClientConfig::new(&format!("http://{addr}")),
        ReqwestTransport::from_client(http),
    )
    .unwrap();

    let movies = client.movies_by_year(2005).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].name.as_deref(), Some("Batman Begins"));
}
