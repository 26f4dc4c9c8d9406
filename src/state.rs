use crate::auth::AuthSession;
use crate::chat::ChatSession;
use crate::config::Config;
use crate::mood::MoodLog;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub moods: Arc<Mutex<MoodLog>>,
    pub chat: Arc<Mutex<ChatSession>>,
    pub auth: Arc<Mutex<AuthSession>>,
}

impl AppState {
    pub fn new(config: Config, moods: MoodLog) -> Self {
        Self {
            config: Arc::new(config),
            moods: Arc::new(Mutex::new(moods)),
            chat: Arc::new(Mutex::new(ChatSession::new())),
            auth: Arc::new(Mutex::new(AuthSession::default())),
        }
    }
}
