use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_serve_healthz() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move { axum::serve(listener, base_routes()).await });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    let request = format!("GET /healthz HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    tokio::io::AsyncWriteExt::write_all(&mut stream, request.as_bytes()).await.unwrap();
    let mut response = String::new();
    tokio::io::AsyncReadExt::read_to_string(&mut stream, &mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
    server.abort();
}

#[test]
fn bundle_root_prefers_configured_site_root() {
    let config = ServerConfig { site_root: Some(PathBuf::from("/srv/formlab")), ..ServerConfig::default() };
    assert_eq!(bundle_root(&config, "target/site"), PathBuf::from("/srv/formlab"));
}

#[test]
fn bundle_root_falls_back_to_leptos_site_root() {
    assert_eq!(bundle_root(&ServerConfig::default(), "target/site"), PathBuf::from("target/site"));
}
