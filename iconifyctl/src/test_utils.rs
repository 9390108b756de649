//! Test utilities for CLI testing
//!
//! Provides an in-process mock of the Iconify API.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::Json,
    routing::get,
    Router,
};
use iconify_core::api::{Author, CollectionInfo, CollectionsResponse, License, SearchResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Mock server state
#[derive(Debug, Clone)]
pub struct MockServerState {
    /// Collections served by `/collections`, in response order
    pub collections: Arc<CollectionsResponse>,
    /// Icon names per collection prefix
    pub icons: Arc<HashMap<String, Vec<String>>>,
    /// Path and query of every request received
    pub requests: Arc<Mutex<Vec<String>>>,
}

fn collection(name: &str, total: u32, spdx: Option<&str>) -> CollectionInfo {
    CollectionInfo {
        name: name.to_string(),
        total: Some(total),
        version: Some("1.0.0".to_string()),
        author: Author {
            name: format!("{} Authors", name),
            url: None,
        },
        license: License {
            title: spdx.unwrap_or("Custom").to_string(),
            spdx: spdx.map(str::to_string),
            url: None,
        },
        category: None,
        palette: Some(false),
    }
}

impl Default for MockServerState {
    fn default() -> Self {
        let mut collections = CollectionsResponse::new();
        collections.insert(
            "mdi".to_string(),
            collection("Material Design Icons", 7447, Some("Apache-2.0")),
        );
        collections.insert(
            "material-symbols".to_string(),
            collection("Material Symbols", 13000, Some("Apache-2.0")),
        );
        collections.insert("bi".to_string(), collection("Bootstrap Icons", 2050, Some("MIT")));

        let mut icons = HashMap::new();
        icons.insert(
            "mdi".to_string(),
            vec!["home", "home-outline", "arrow-left", "account"],
        );
        icons.insert("material-symbols".to_string(), vec!["home", "arrow-back"]);
        icons.insert("bi".to_string(), vec!["house", "arrow-left-short"]);
        let icons: HashMap<String, Vec<String>> = icons
            .into_iter()
            .map(|(prefix, names)| (prefix, names.into_iter().map(str::to_string).collect()))
            .collect();

        Self {
            collections: Arc::new(collections),
            icons: Arc::new(icons),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockServerState {
    fn record(&self, uri: &Uri) {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        self.requests.lock().unwrap().push(target);
    }
}

/// Mock server implementation
#[derive(Debug)]
pub struct MockServer {
    state: MockServerState,
    port: u16,
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self {
            state: MockServerState::default(),
            port: 0, // Will be assigned when server starts
        }
    }

    /// Start the mock server and return the address
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
        }

        Ok((self, server_url))
    }

    /// Get the server port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Requests received so far, as path and query
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Create the mock server router
    fn create_router(&self) -> Router {
        Router::new()
            .route("/collections", get(collections_handler))
            .route("/search", get(search_handler))
            .route("/:prefix/:file", get(icon_handler))
            .with_state(self.state.clone())
    }
}

// Handler functions

async fn collections_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Json<CollectionsResponse> {
    state.record(&uri);

    let response: CollectionsResponse = match params.get("prefixes") {
        Some(prefixes) => {
            let wanted: Vec<&str> = prefixes.split(',').collect();
            state
                .collections
                .iter()
                .filter(|(prefix, _)| wanted.contains(&prefix.as_str()))
                .map(|(prefix, info)| (prefix.clone(), info.clone()))
                .collect()
        }
        None => state.collections.as_ref().clone(),
    };

    Json(response)
}

async fn search_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SearchResult>, StatusCode> {
    state.record(&uri);

    let query = params.get("query").ok_or(StatusCode::BAD_REQUEST)?;
    let words: Vec<&str> = query.split_whitespace().collect();
    let prefixes: Option<Vec<&str>> = params.get("prefixes").map(|p| p.split(',').collect());
    let limit: u32 = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(64);
    let start: u32 = params
        .get("start")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let mut matches: Vec<String> = Vec::new();
    for prefix in state.collections.keys() {
        if let Some(ref wanted) = prefixes {
            if !wanted.contains(&prefix.as_str()) {
                continue;
            }
        }
        for name in state.icons.get(prefix).into_iter().flatten() {
            if words.iter().all(|w| name.contains(w)) {
                matches.push(format!("{}:{}", prefix, name));
            }
        }
    }

    let total = matches.len() as u32;
    let icons = matches
        .into_iter()
        .skip(start as usize)
        .take(limit as usize)
        .collect();

    Ok(Json(SearchResult {
        icons,
        total,
        limit,
        start,
    }))
}

async fn icon_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    Path((prefix, file)): Path<(String, String)>,
) -> Result<([(header::HeaderName, &'static str); 1], String), StatusCode> {
    state.record(&uri);

    let name = file.strip_suffix(".svg").ok_or(StatusCode::NOT_FOUND)?;
    let known = state
        .icons
        .get(&prefix)
        .map(|names| names.iter().any(|n| n == name))
        .unwrap_or(false);
    if !known {
        return Err(StatusCode::NOT_FOUND);
    }

    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" id="{}-{}"><path fill="currentColor" d="M10 20v-6h4v6h5v-8h3L12 3L2 12h3v8z"/></svg>"#,
        prefix, name
    );
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
