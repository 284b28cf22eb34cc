use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;

use crate::config::{DataArgs, ServeArgs};
use crate::dataset::Dataset;
use crate::loader;
use crate::modal::Description;
use crate::viewer::{StudyViewer, ViewSnapshot};

pub struct AppState {
    viewer: Mutex<StudyViewer>,
}

#[derive(Deserialize)]
struct BranchClick {
    branch: String,
}

#[derive(Deserialize)]
struct TopicClick {
    topic: String,
}

#[derive(Deserialize)]
struct SubtopicClick {
    subtopic: String,
    description: Description,
    branch: String,
    #[serde(default)]
    topic: Option<String>,
}

impl AppState {
    pub fn new(viewer: StudyViewer) -> Arc<Self> {
        Arc::new(AppState {
            viewer: Mutex::new(viewer),
        })
    }

    /// Apply one user action and render the resulting frame.
    pub fn apply(&self, action: impl FnOnce(&mut StudyViewer)) -> ViewSnapshot {
        let mut viewer = self.viewer.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut viewer);
        viewer.snapshot()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.apply(|_| {})
    }

    pub fn install_dataset(&self, dataset: Dataset) {
        let mut viewer = self.viewer.lock().unwrap_or_else(PoisonError::into_inner);
        viewer.install_dataset(dataset);
    }
}

/// Hand a finished load to the state, unless the state is already gone.
///
/// Returns whether the dataset was installed.
pub fn apply_loaded(state: &Weak<AppState>, dataset: Dataset) -> bool {
    match state.upgrade() {
        Some(state) => {
            state.install_dataset(dataset);
            true
        }
        None => {
            log::debug!("viewer dropped before the dataset finished loading");
            false
        }
    }
}

/// Load the study sheet off the request path.
///
/// The task only holds a weak handle, so dropping the state mid-load turns
/// the completion into a no-op.
pub fn spawn_load(state: &Arc<AppState>, data: DataArgs) -> JoinHandle<bool> {
    let state = Arc::downgrade(state);
    tokio::spawn(async move {
        let loaded =
            tokio::task::spawn_blocking(move || loader::load_or_empty(&data.data, &data.sheet))
                .await;
        match loaded {
            Ok(dataset) => apply_loaded(&state, dataset),
            Err(e) => {
                log::error!("dataset load task failed: {}", e);
                false
            }
        }
    })
}

pub fn router(state: Arc<AppState>, assets: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/view", get(get_view))
        .route("/api/root", post(toggle_root))
        .route("/api/branch", post(select_branch))
        .route("/api/topic", post(select_topic))
        .route("/api/subtopic", post(select_subtopic))
        .route("/api/modal/previous", post(previous))
        .route("/api/modal/next", post(next))
        .route("/api/modal/close", post(close_modal))
        .nest_service("/static", ServeDir::new(assets.as_ref()))
        .with_state(state)
}

pub async fn run(config: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(StudyViewer::loading(&config.data.title));
    spawn_load(&state, config.data.clone());

    let app = router(state, &config.assets);

    let listener = TcpListener::bind(config.addr).await?;
    log::info!("Listening on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("./static/index.html"))
}

async fn get_view(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    Json(state.snapshot())
}

async fn toggle_root(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    Json(state.apply(StudyViewer::toggle_root))
}

async fn select_branch(
    State(state): State<Arc<AppState>>,
    Json(click): Json<BranchClick>,
) -> Json<ViewSnapshot> {
    Json(state.apply(|viewer| viewer.select_branch(&click.branch)))
}

async fn select_topic(
    State(state): State<Arc<AppState>>,
    Json(click): Json<TopicClick>,
) -> Json<ViewSnapshot> {
    Json(state.apply(|viewer| viewer.select_topic(&click.topic)))
}

async fn select_subtopic(
    State(state): State<Arc<AppState>>,
    Json(click): Json<SubtopicClick>,
) -> Json<ViewSnapshot> {
    Json(state.apply(|viewer| {
        viewer.select_subtopic(
            &click.subtopic,
            click.description,
            &click.branch,
            click.topic.as_deref(),
        )
    }))
}

async fn previous(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    Json(state.apply(StudyViewer::previous))
}

async fn next(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    Json(state.apply(StudyViewer::next))
}

async fn close_modal(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    Json(state.apply(StudyViewer::close_modal))
}
