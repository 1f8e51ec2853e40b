//! Screen-side state machine for the one-shot task fetch.
//!
//! # Design
//! The home screen's ad-hoc loading flag + list pair is expressed as a
//! tagged union: `Idle | Loading | Loaded(list) | Failed`. Fetch failures
//! never propagate — they are recorded with `tracing::error!` and collapse
//! into `Failed`, which `tasks()` renders as an empty list. A caller that
//! wants to distinguish "no tasks" from "fetch failed" can match on
//! `state()`; the default view keeps the silent-degradation contract.
//!
//! There is no cancellation: `complete` applies its result whenever the
//! host delivers it, even if the screen that issued `start` is long gone.

use crate::client::TaskApiClient;
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Task;

/// Fetch lifecycle of the home screen's task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has been started.
    Idle,
    /// A request has been issued and its response is outstanding.
    Loading,
    /// The fetch resolved with a parsed list, in server order.
    Loaded(Vec<Task>),
    /// The fetch resolved with a transport, status, or parse failure.
    Failed,
}

/// Loader for the home screen: issues one fetch per activation and
/// exposes the resulting state to the presentation layer.
///
/// The host drives the I/O: call `start` to obtain the request, execute
/// it, then hand the result to `complete` (got a response) or `fail`
/// (transport never produced one).
#[derive(Debug)]
pub struct TaskListLoader {
    client: TaskApiClient,
    state: LoadState,
}

impl TaskListLoader {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TaskApiClient::new(base_url),
            state: LoadState::Idle,
        }
    }

    /// Begin a fetch: transitions to `Loading` and returns the request to
    /// execute. Re-invoking is harmless — a fresh request is produced and
    /// any previously loaded list is superseded.
    pub fn start(&mut self) -> HttpRequest {
        self.state = LoadState::Loading;
        self.client.build_fetch_tasks()
    }

    /// Resolve the fetch with the response the host obtained.
    ///
    /// A non-200 status or undecodable body is logged and degrades to
    /// `Failed`; nothing propagates to the caller.
    pub fn complete(&mut self, response: HttpResponse) {
        match self.client.parse_fetch_tasks(response) {
            Ok(tasks) => self.state = LoadState::Loaded(tasks),
            Err(error) => {
                tracing::error!(%error, "failed to fetch tasks");
                self.state = LoadState::Failed;
            }
        }
    }

    /// Resolve the fetch with a transport-level failure (the request never
    /// produced a response). Logged and degraded like any other failure.
    pub fn fail(&mut self, error: FetchError) {
        tracing::error!(%error, "failed to fetch tasks");
        self.state = LoadState::Failed;
    }

    /// The list the presentation layer renders: the loaded records in
    /// server order, or an empty slice in every other state.
    pub fn tasks(&self) -> &[Task] {
        match &self.state {
            LoadState::Loaded(tasks) => tasks,
            _ => &[],
        }
    }

    /// True only while a response is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }
}

impl Default for TaskListLoader {
    fn default() -> Self {
        Self {
            client: TaskApiClient::default(),
            state: LoadState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> TaskListLoader {
        TaskListLoader::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn new_loader_is_idle_with_no_tasks() {
        let loader = loader();
        assert_eq!(*loader.state(), LoadState::Idle);
        assert!(!loader.is_loading());
        assert!(loader.tasks().is_empty());
    }

    #[test]
    fn start_enters_loading_and_builds_fetch_request() {
        let mut loader = loader();
        let req = loader.start();
        assert!(loader.is_loading());
        assert!(loader.tasks().is_empty());
        assert_eq!(req.path, "http://localhost:3000/api/data");
    }

    #[test]
    fn complete_with_valid_list_loads_it_unchanged() {
        let mut loader = loader();
        loader.start();
        loader.complete(response(
            200,
            r#"[
                {"id":"1","status":false,"email":"Buy milk","edit":false},
                {"id":"2","status":true,"email":"Call mom","edit":false}
            ]"#,
        ));

        assert!(!loader.is_loading());
        let tasks = loader.tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].email, "Buy milk");
        assert!(!tasks[0].status);
        assert_eq!(tasks[1].email, "Call mom");
        assert!(tasks[1].status);
    }

    #[test]
    fn complete_with_empty_array_loads_empty_list() {
        let mut loader = loader();
        loader.start();
        loader.complete(response(200, "[]"));
        assert_eq!(*loader.state(), LoadState::Loaded(Vec::new()));
        assert!(loader.tasks().is_empty());
        assert!(!loader.is_loading());
    }

    #[test]
    fn complete_with_bad_json_degrades_to_failed() {
        let mut loader = loader();
        loader.start();
        loader.complete(response(200, "<html>oops</html>"));
        assert_eq!(*loader.state(), LoadState::Failed);
        assert!(loader.tasks().is_empty());
        assert!(!loader.is_loading());
    }

    #[test]
    fn complete_with_error_status_degrades_to_failed() {
        let mut loader = loader();
        loader.start();
        loader.complete(response(503, "service unavailable"));
        assert_eq!(*loader.state(), LoadState::Failed);
        assert!(loader.tasks().is_empty());
    }

    #[test]
    fn fail_degrades_to_failed() {
        let mut loader = loader();
        loader.start();
        loader.fail(FetchError::Transport("connection refused".to_string()));
        assert_eq!(*loader.state(), LoadState::Failed);
        assert!(loader.tasks().is_empty());
        assert!(!loader.is_loading());
    }

    #[test]
    fn restart_supersedes_previous_result() {
        let mut loader = loader();
        loader.start();
        loader.complete(response(
            200,
            r#"[{"id":"1","status":false,"email":"Old","edit":false}]"#,
        ));
        assert_eq!(loader.tasks().len(), 1);

        loader.start();
        assert!(loader.is_loading());
        assert!(loader.tasks().is_empty());

        loader.complete(response(
            200,
            r#"[{"id":"9","status":false,"email":"New","edit":false}]"#,
        ));
        assert_eq!(loader.tasks().len(), 1);
        assert_eq!(loader.tasks()[0].email, "New");
    }

    #[test]
    fn late_complete_still_applies() {
        // No cancellation guard exists: a result that arrives after the
        // host moved on is applied to state all the same.
        let mut loader = loader();
        loader.start();
        loader.fail(FetchError::Transport("timed out".to_string()));
        loader.complete(response(
            200,
            r#"[{"id":"1","status":false,"email":"Late","edit":false}]"#,
        ));
        assert_eq!(loader.tasks().len(), 1);
        assert_eq!(loader.tasks()[0].email, "Late");
    }
}
