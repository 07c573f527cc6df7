// Chargement HTTP contre un petit serveur local qui sert tests/fixtures

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use clubstats::api::{fetch_json, load_all, try_load_all, DataSource, LoadError};
use clubstats::models::ColorDocument;
use clubstats::pipeline::{run, LOAD_ERROR_MESSAGE};
use clubstats::surface::MemorySurface;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Démarre un serveur HTTP/1.1 minimal ; `missing` répond 404
async fn serve_fixtures(missing: Option<&'static str>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };

            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let request = String::from_utf8_lossy(&request);
                let path = request
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .trim_start_matches('/')
                    .to_string();

                let body = if Some(path.as_str()) == missing {
                    None
                } else {
                    tokio::fs::read(fixtures_dir().join(&path)).await.ok()
                };

                let response = match body {
                    Some(body) => {
                        let mut head = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                            body.len()
                        )
                        .into_bytes();
                        head.extend_from_slice(&body);
                        head
                    }
                    None => b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
                };

                let _ = stream.write_all(&response).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

fn http_source(addr: SocketAddr) -> DataSource {
    DataSource::http(&format!("http://{}/", addr), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetch_single_document_over_http() {
    let addr = serve_fixtures(None).await;
    let colors: ColorDocument = fetch_json(&http_source(addr), "colors.json").await.unwrap();

    assert_eq!(colors.primary.as_deref(), Some("#1a472a"));
}

#[tokio::test]
async fn all_documents_load_over_http() {
    let addr = serve_fixtures(None).await;
    let snapshot = try_load_all(&http_source(addr)).await.unwrap();

    assert_eq!(snapshot.games().statistics.total_games, 8.0);
    assert_eq!(snapshot.historical().data.len(), 3);
    assert_eq!(snapshot.colors().primary, "#1a472a");
}

#[tokio::test]
async fn one_missing_document_fails_the_whole_load() {
    let addr = serve_fixtures(Some("historical_players.json")).await;
    let source = http_source(addr);

    let err = try_load_all(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Status { .. }));
    assert_eq!(err.path(), "historical_players.json");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(err.to_string().contains("404"));

    assert!(load_all(&source).await.is_none());
}

#[tokio::test]
async fn failed_load_shows_only_the_error() {
    let addr = serve_fixtures(Some("games_stats.json")).await;
    let mut surface = MemorySurface::dashboard();

    let snapshot = run(&http_source(addr), &mut surface).await;

    assert!(snapshot.is_none());
    assert_eq!(surface.error(), Some(LOAD_ERROR_MESSAGE));
    assert_eq!(surface.written_text_count(), 0);
    assert_eq!(surface.mounted_charts().count(), 0);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Port libéré juste après le bind : rien n'écoute dessus
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let err = try_load_all(&http_source(addr)).await.unwrap_err();
    assert!(matches!(err, LoadError::Transport { .. }));
    assert!(err.status().is_none());
}
