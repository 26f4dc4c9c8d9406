use crate::auth::{AuthAction, validate_login, validate_signup};
use crate::chat::{Submission, classify, reply_delay};
use crate::errors::AppError;
use crate::models::{
    AuthResponse, ChatRequest, ChatResponse, LoginRequest, Mood, MoodRequest, MoodResponse,
    MoodSnapshot, Notice, ResourceQuery, SignupRequest, User,
};
use crate::resources::{self, FILTER_ALL, Resource};
use crate::state::AppState;
use crate::storage::persist_log;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let moods = state.moods.lock().await;
    Html(render_index(moods.summary().as_ref()))
}

pub async fn get_moods(State(state): State<AppState>) -> Json<MoodSnapshot> {
    let moods = state.moods.lock().await;
    Json(moods.snapshot())
}

pub async fn record_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<MoodResponse>, AppError> {
    let mood: Mood = payload.mood.parse()?;
    let snapshot = apply_mood(&state, mood).await?;
    Ok(Json(MoodResponse {
        snapshot,
        notice: Notice::success(format!("Mood logged: {}", mood.label())),
    }))
}

pub async fn mood_form(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> Result<Redirect, AppError> {
    let mood: Mood = mood.parse()?;
    apply_mood(&state, mood).await?;
    Ok(Redirect::to("/"))
}

async fn apply_mood(state: &AppState, mood: Mood) -> Result<MoodSnapshot, AppError> {
    let mut moods = state.moods.lock().await;
    moods.record(mood);
    persist_log(&state.config.data_path, &moods).await?;
    info!(%mood, entries = moods.len(), "mood recorded");
    Ok(moods.snapshot())
}

pub async fn get_chat(State(state): State<AppState>) -> Json<ChatResponse> {
    let chat = state.chat.lock().await;
    Json(chat.to_response())
}

pub async fn toggle_chat(State(state): State<AppState>) -> Json<ChatResponse> {
    let mut chat = state.chat.lock().await;
    let open = chat.toggle();
    debug!(open, "chat toggled");
    Json(chat.to_response())
}

pub async fn send_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let delay = {
        let mut chat = state.chat.lock().await;
        match chat.submit(&payload.message) {
            Submission::Accepted => {}
            Submission::Busy => {
                debug!("chat submission ignored, reply pending");
                return Err(AppError::conflict("A reply is already on its way"));
            }
            Submission::Empty => return Err(AppError::bad_request("message must not be empty")),
        }
        reply_delay(
            state.config.chat_delay_min,
            state.config.chat_delay_max,
            &mut rand::rng(),
        )
    };

    // the reply lands even if the client goes away mid-delay
    let chat = Arc::clone(&state.chat);
    let message = payload.message;
    let reply_task = tokio::spawn(async move {
        sleep(delay).await;
        let reply = classify(&message, &mut rand::rng());
        let mut chat = chat.lock().await;
        chat.complete(reply);
        debug!(delay_ms = delay.as_millis() as u64, "chat reply sent");
        chat.to_response()
    });

    let response = reply_task.await.map_err(AppError::internal)?;
    Ok(Json(response))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate_login(&payload)?;
    complete_auth(&state, &payload.email, AuthAction::Login).await
}

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate_signup(&payload)?;
    complete_auth(&state, &payload.email, AuthAction::Signup).await
}

async fn complete_auth(
    state: &AppState,
    email: &str,
    action: AuthAction,
) -> Result<Json<AuthResponse>, AppError> {
    sleep(state.config.auth_delay).await;
    let user = state.auth.lock().await.sign_in(email);
    info!(user = %user.name, ?action, "user signed in");
    Ok(Json(AuthResponse {
        user: Some(user),
        notice: Some(Notice::success(action.success_message())),
    }))
}

pub async fn logout(State(state): State<AppState>) -> Json<AuthResponse> {
    let previous = state.auth.lock().await.sign_out();
    if let Some(user) = previous {
        info!(user = %user.name, "user signed out");
    }
    Json(AuthResponse {
        user: None,
        notice: Some(Notice::success("Successfully logged out!")),
    })
}

pub async fn current_user(State(state): State<AppState>) -> Json<Option<User>> {
    let auth = state.auth.lock().await;
    Json(auth.current_user().cloned())
}

pub async fn list_resources(Query(query): Query<ResourceQuery>) -> Json<Vec<&'static Resource>> {
    let kind = query.kind.as_deref().unwrap_or(FILTER_ALL);
    Json(resources::filter(kind))
}

pub async fn open_resource(Path(id): Path<u32>) -> Result<Json<Notice>, AppError> {
    let resource = resources::find(id)
        .ok_or_else(|| AppError::not_found(format!("no resource with id {id}")))?;
    Ok(Json(Notice::success(format!("Opening resource: {}", resource.title))))
}
