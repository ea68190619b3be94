//! Shared fixtures and mock adapters for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tales_service::contract::{ContactMessage, Tale, TaleQuery};
use tales_service::domain::filter::{apply_filters, distinct_nations};
use tales_service::domain::{BrowsePagers, Connectivity, ContactRelay, Service, TaleRepository};

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn tale(id: i64, title: &str, nation: &str) -> Tale {
    Tale {
        id,
        title: title.to_string(),
        text: format!("Once upon a time there was {title}.\n\nThe end."),
        nation: nation.to_string(),
        source: format!("Collected tales #{id}"),
    }
}

/// Fourteen tales over four nations, in id order
pub fn sample_tales() -> Vec<Tale> {
    vec![
        tale(1, "The Tortoise and the Birds", "Nigeria"),
        tale(2, "Anansi and the Pot of Wisdom", "Ghana"),
        tale(3, "The Hare and the Lion", "Ethiopia"),
        tale(4, "The Crane Wife", "Japan"),
        tale(5, "The Magic Paintbrush", "China"),
        tale(6, "The Fox and the Crab", "Japan"),
        tale(7, "Why the Sky Is Far Away", "Nigeria"),
        tale(8, "Anansi and Turtle", "Ghana"),
        tale(9, "The Tortoise and the Hare", "Greece"),
        tale(10, "The Lion's Share", "Greece"),
        tale(11, "Momotaro", "Japan"),
        tale(12, "The Cowherd and the Weaver Girl", "China"),
        tale(13, "The Hare's Revenge", "Ethiopia"),
        tale(14, "Urashima Taro", "Japan"),
    ]
}

pub fn contact(name: &str, email: &str, message: &str) -> ContactMessage {
    ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

pub mod mocks {
    use super::*;

    /// In-memory repository with the same filter semantics as the snapshot
    #[derive(Clone)]
    pub struct MockTaleRepo {
        tales: Arc<RwLock<Vec<Tale>>>,
        failing: Arc<RwLock<bool>>,
        queries: Arc<Mutex<Vec<TaleQuery>>>,
    }

    impl MockTaleRepo {
        pub fn new(tales: Vec<Tale>) -> Self {
            Self {
                tales: Arc::new(RwLock::new(tales)),
                failing: Arc::new(RwLock::new(false)),
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn set_failing(&self, failing: bool) {
            *self.failing.write() = failing;
        }

        /// Queries received so far
        pub fn queries(&self) -> Vec<TaleQuery> {
            self.queries.lock().clone()
        }

        fn check(&self) -> anyhow::Result<()> {
            if *self.failing.read() {
                anyhow::bail!("connection refused");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TaleRepository for MockTaleRepo {
        async fn find(&self, query: &TaleQuery) -> anyhow::Result<Vec<Tale>> {
            self.queries.lock().push(query.clone());
            self.check()?;
            Ok(apply_filters(self.tales.read().clone(), query))
        }

        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Tale>> {
            self.check()?;
            Ok(self.tales.read().iter().find(|t| t.id == id).cloned())
        }

        async fn list_nations(&self) -> anyhow::Result<Vec<String>> {
            self.check()?;
            Ok(distinct_nations(
                self.tales.read().iter().map(|t| t.nation.clone()),
            ))
        }
    }

    /// Relay that remembers what it was given
    #[derive(Clone, Default)]
    pub struct RecordingRelay {
        sent: Arc<Mutex<Vec<ContactMessage>>>,
        failing: bool,
    }

    impl RecordingRelay {
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn sent(&self) -> Vec<ContactMessage> {
            self.sent.lock().clone()
        }
    }

    #[async_trait]
    impl ContactRelay for RecordingRelay {
        async fn submit(&self, message: &ContactMessage) -> anyhow::Result<()> {
            self.sent.lock().push(message.clone());
            if self.failing {
                anyhow::bail!("relay returned 500");
            }
            Ok(())
        }
    }
}

/// Service over mock adapters, plus handles to inspect them
pub struct TestHarness {
    pub service: Arc<Service>,
    pub hosted: mocks::MockTaleRepo,
    pub snapshot: mocks::MockTaleRepo,
    pub relay: mocks::RecordingRelay,
    pub connectivity: Arc<Connectivity>,
}

impl TestHarness {
    /// Hosted table holds all sample tales, the snapshot its first six
    pub fn new() -> Self {
        let tales = sample_tales();
        let snapshot_tales = tales.iter().take(6).cloned().collect();
        Self::with_data(tales, snapshot_tales, mocks::RecordingRelay::default())
    }

    pub fn with_data(
        hosted: Vec<Tale>,
        snapshot: Vec<Tale>,
        relay: mocks::RecordingRelay,
    ) -> Self {
        let hosted = mocks::MockTaleRepo::new(hosted);
        let snapshot = mocks::MockTaleRepo::new(snapshot);
        let connectivity = Arc::new(Connectivity::new());
        let service = Arc::new(Service::new(
            Arc::new(hosted.clone()),
            Arc::new(snapshot.clone()),
            Arc::new(relay.clone()),
            connectivity.clone(),
            BrowsePagers::default(),
        ));
        Self {
            service,
            hosted,
            snapshot,
            relay,
            connectivity,
        }
    }

    pub fn go_offline(&self) {
        self.connectivity.pin(false);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive one request through a router
pub async fn send(
    app: axum::Router,
    request: axum::http::Request<axum::body::Body>,
) -> (axum::http::StatusCode, axum::http::HeaderMap, String) {
    use tower::ServiceExt;

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}
