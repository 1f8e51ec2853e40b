//! In-process stand-in for the remote task API.
//!
//! Serves the one route the application reads, `GET /api/data`, from an
//! in-memory list. `app_with` injects fixtures for tests; `broken_app`
//! answers the same route with a body that is not JSON, for exercising
//! the fetch failure path. There are no write routes — the application
//! never writes back.
//!
//! The `Task` schema is defined here independently of the core crate;
//! integration tests catch schema drift between the two.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// A task record as the remote service shapes it. The `email` field
/// carries the task's descriptive text; the name is the service's own.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub status: bool,
    pub email: String,
    pub edit: bool,
}

pub type Db = Arc<RwLock<Vec<Task>>>;

/// Router with the default seed data.
pub fn app() -> Router {
    app_with(seed_tasks())
}

/// Router serving the given records, in the given order.
pub fn app_with(tasks: Vec<Task>) -> Router {
    let db: Db = Arc::new(RwLock::new(tasks));
    Router::new().route("/api/data", get(list_tasks)).with_state(db)
}

/// Router whose `/api/data` answers 200 with a body that is not JSON.
pub fn broken_app() -> Router {
    Router::new().route("/api/data", get(|| async { "<html>not json</html>" }))
}

/// Serve `router` on `listener` until the connection closes.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

/// Serve the default seeded app.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.clone())
}

/// The records the standalone binary starts with.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            status: false,
            email: "Buy milk".to_string(),
            edit: false,
        },
        Task {
            id: "2".to_string(),
            status: true,
            email: "Call mom".to_string(),
            edit: false,
        },
        Task {
            id: "3".to_string(),
            status: false,
            email: "Water plants".to_string(),
            edit: false,
        },
    ]
}
