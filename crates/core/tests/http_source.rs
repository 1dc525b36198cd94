//! HttpCatalogSource against a throwaway local HTTP endpoint.

use storefront_core::catalog::{CatalogSource, HttpCatalogSource};
use storefront_core::state::{CatalogState, Storefront};
use storefront_core::CatalogFetchError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned response on a random port and return the URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/products?limit=100", addr)
}

fn source_for(url: &str) -> HttpCatalogSource {
    // Skip any proxy configured in the environment, the server is local
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpCatalogSource::with_client(client, url)
}

const CATALOG: &str = r#"{"products":[
    {"id":1,"title":"Apple","description":"Crisp","category":"fruit","price":10,"thumbnail":"https://img/1.png"},
    {"id":2,"title":"Banana","description":"Ripe","category":"fruit","price":5,"thumbnail":"https://img/2.png"}
],"total":2,"skip":0,"limit":100}"#;

#[tokio::test]
async fn test_fetch_success() {
    let url = serve_once("200 OK", CATALOG).await;
    let products = source_for(&url).fetch_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Apple");
    assert_eq!(products[1].price, 5.0);
}

#[tokio::test]
async fn test_fetch_error_status() {
    let url = serve_once("503 Service Unavailable", r#"{"message":"down"}"#).await;
    let err = source_for(&url).fetch_products().await.unwrap_err();

    assert_eq!(err, CatalogFetchError::Status { status: 503 });
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let url = serve_once("200 OK", r#"{"products":"soon"}"#).await;
    let err = source_for(&url).fetch_products().await.unwrap_err();

    assert!(matches!(err, CatalogFetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_fetch_unreachable() {
    // Bind then drop to get a port nobody is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}/products", addr);
    let err = source_for(&url).fetch_products().await.unwrap_err();

    assert!(matches!(err, CatalogFetchError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_session_load_over_http() {
    let url = serve_once("200 OK", CATALOG).await;
    let mut store = Storefront::default();
    store.load(&source_for(&url)).await;

    assert!(matches!(store.catalog(), CatalogState::Ready(p) if p.len() == 2));
    assert_eq!(store.categories(), &["fruit"]);

    store.add_to_cart(1);
    store.add_to_cart(1);
    assert_eq!(store.cart().total(), 20.0);
}
