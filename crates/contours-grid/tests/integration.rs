//! Integration tests for contours-grid.
//!
//! These tests run the real HTTP client against a throwaway server on a
//! local port, so no network access is needed.

use approx::assert_relative_eq;
use contours_grid::{
    Coordinate, GridError, GridFetcher, GridSpec, OpenTopoData, OpenTopoDataConfig, ServiceError,
};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// How the fake service answers each request.
#[derive(Clone, Copy)]
enum Reply {
    /// 200 with `elevation = lat * 1000 + lon` for every point.
    Echo,
    /// Fixed status with an error body.
    Status(u16),
    /// 200 with a body that is not JSON.
    Garbage,
}

struct FakeService {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl FakeService {
    /// Serve `count` requests, then stop.
    fn start(count: usize, reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for stream in listener.incoming().take(count) {
                let mut stream = stream.expect("accept");
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                loop {
                    let mut header = String::new();
                    reader.read_line(&mut header).unwrap();
                    if header == "\r\n" || header.is_empty() {
                        break;
                    }
                }

                let target = request_line.split_whitespace().nth(1).unwrap_or("").to_string();
                let (status, body) = match reply {
                    Reply::Echo => (200, echo_body(&target)),
                    Reply::Status(code) => (code, r#"{"error":"server error","status":"SERVER_ERROR"}"#.to_string()),
                    Reply::Garbage => (200, "<html>maintenance</html>".to_string()),
                };
                seen.lock().unwrap().push(target);

                let response = format!(
                    "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });

        Self {
            base_url,
            requests,
            handle,
        }
    }

    fn client(&self) -> OpenTopoData {
        OpenTopoData::with_config(OpenTopoDataConfig {
            base_url: self.base_url.clone(),
            ..Default::default()
        })
        .unwrap()
    }

    fn finish(self) -> Vec<String> {
        self.handle.join().unwrap();
        Arc::try_unwrap(self.requests).unwrap().into_inner().unwrap()
    }
}

/// Decode the `locations` parameter of a request target into coordinates.
fn locations(target: &str) -> Vec<(f64, f64)> {
    let query = target.split_once('?').map(|(_, q)| q).unwrap_or("");
    let encoded = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("locations="))
        .unwrap_or("");
    let decoded = encoded.replace("%7C", "|").replace("%2C", ",");
    decoded
        .split('|')
        .map(|pair| {
            let (lat, lon) = pair.split_once(',').unwrap();
            (lat.parse().unwrap(), lon.parse().unwrap())
        })
        .collect()
}

fn echo_body(target: &str) -> String {
    let results: Vec<String> = locations(target)
        .iter()
        .map(|(lat, lon)| format!(r#"{{"elevation":{},"location":{{"lat":{},"lng":{}}}}}"#, lat * 1000.0 + lon, lat, lon))
        .collect();
    format!(r#"{{"results":[{}],"status":"OK"}}"#, results.join(","))
}

#[test]
fn test_belfast_grid_over_http() {
    let server = FakeService::start(1, Reply::Echo);
    let fetcher = GridFetcher::new(server.client());

    let spec = GridSpec::new(Coordinate::new(54.5973, -5.9301).unwrap(), 9, 3.0).unwrap();
    let grid = fetcher.fetch_grid(&spec).unwrap();

    assert_eq!(grid.dimension(), 9);
    assert_eq!(grid.cols().len(), 9);
    assert_relative_eq!(grid.rows()[0], 54.4888, epsilon = 5e-5);
    assert_relative_eq!(grid.rows()[8], 54.7058, epsilon = 5e-5);
    assert_relative_eq!(grid.rows()[4], 54.5973, epsilon = 1e-12);
    assert_relative_eq!(grid.cols()[0], -6.0386, epsilon = 5e-5);
    assert_relative_eq!(grid.cols()[8], -5.8216, epsilon = 5e-5);

    for (i, lat) in grid.rows().iter().enumerate() {
        for (j, lon) in grid.cols().iter().enumerate() {
            assert_relative_eq!(grid.get(i, j).unwrap(), lat * 1000.0 + lon, epsilon = 1e-6);
        }
    }

    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("/v1/srtm90m?"));
    assert!(requests[0].contains("interpolation=cubic"));
    assert_eq!(locations(&requests[0]).len(), 81);
}

#[test]
fn test_large_grid_issues_three_batches_in_order() {
    let server = FakeService::start(3, Reply::Echo);
    let fetcher = GridFetcher::new(server.client());

    let grid = fetcher
        .fetch(Coordinate::new(40.7128, -74.0060).unwrap(), 15, 5.0)
        .unwrap();
    assert_eq!(grid.dimension(), 15);

    let requests = server.finish();
    let sizes: Vec<usize> = requests.iter().map(|r| locations(r).len()).collect();
    assert_eq!(sizes, vec![100, 100, 25]);

    // Concatenated batches reproduce the row-major point order.
    let sent: Vec<(f64, f64)> = requests.iter().flat_map(|r| locations(r)).collect();
    for (index, (lat, lon)) in sent.iter().enumerate() {
        assert_relative_eq!(*lat, grid.rows()[index / 15], epsilon = 1e-9);
        assert_relative_eq!(*lon, grid.cols()[index % 15], epsilon = 1e-9);
    }
}

#[test]
fn test_server_error_is_data_fetch_error() {
    let server = FakeService::start(1, Reply::Status(500));
    let fetcher = GridFetcher::new(server.client());

    let err = fetcher
        .fetch(Coordinate::new(55.9533, -3.1883).unwrap(), 5, 2.0)
        .unwrap_err();
    assert!(matches!(
        err,
        GridError::DataFetchError {
            batch: 0,
            source: ServiceError::Status(500)
        }
    ));
    assert!(fetcher.cache().is_empty());
    server.finish();
}

#[test]
fn test_failure_reports_batch_index() {
    // Only the first batch gets an answer; the second connection is refused
    // once the server thread has exited.
    let server = FakeService::start(1, Reply::Echo);
    let fetcher = GridFetcher::with_batch_size(server.client(), 10);

    let err = fetcher
        .fetch(Coordinate::new(0.0, 0.0).unwrap(), 5, 1.0)
        .unwrap_err();
    match err {
        GridError::DataFetchError { batch, .. } => assert_eq!(batch, 1),
        other => panic!("unexpected error: {other}"),
    }
    server.finish();
}

#[test]
fn test_malformed_body() {
    let server = FakeService::start(1, Reply::Garbage);
    let fetcher = GridFetcher::new(server.client());

    let err = fetcher
        .fetch(Coordinate::new(0.0, 0.0).unwrap(), 1, 1.0)
        .unwrap_err();
    assert!(matches!(
        err,
        GridError::DataFetchError {
            source: ServiceError::MalformedBody(_),
            ..
        }
    ));
    server.finish();
}

#[test]
fn test_repeat_fetch_served_from_cache() {
    // The server answers exactly once; a second remote call would fail.
    let server = FakeService::start(1, Reply::Echo);
    let fetcher = GridFetcher::new(server.client());
    let spec = GridSpec::new(Coordinate::new(54.5973, -5.9301).unwrap(), 5, 2.0).unwrap();

    let first = fetcher.fetch_grid(&spec).unwrap();
    let second = fetcher.fetch_grid(&spec).unwrap();
    assert_eq!(first, second);
    assert_eq!(server.finish().len(), 1);
}
