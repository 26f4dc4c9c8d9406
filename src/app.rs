use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood/:mood", post(handlers::mood_form))
        .route("/api/mood", get(handlers::get_moods).post(handlers::record_mood))
        .route("/api/chat", get(handlers::get_chat).post(handlers::send_chat))
        .route("/api/chat/toggle", post(handlers::toggle_chat))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::current_user))
        .route("/api/resources", get(handlers::list_resources))
        .route("/api/resources/:id/open", post(handlers::open_resource))
        .with_state(state)
}
