use crate::errors::AppError;
use crate::models::MoodEntry;
use crate::mood::MoodLog;
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

pub async fn load_log(path: &Path) -> MoodLog {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return MoodLog::default(),
        Err(err) => {
            error!("failed to read mood data file: {err}");
            return MoodLog::default();
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Array(items)) => MoodLog::from_entries(parse_entries(items)),
        Ok(Value::Null) => MoodLog::default(),
        Ok(other) => {
            warn!(found = json_kind(&other), "mood data is not an array, starting empty");
            MoodLog::default()
        }
        Err(err) => {
            warn!("failed to parse mood data file: {err}");
            MoodLog::default()
        }
    }
}

fn parse_entries(items: Vec<Value>) -> Vec<MoodEntry> {
    let total = items.len();
    let entries: Vec<MoodEntry> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if entries.len() < total {
        warn!(dropped = total - entries.len(), kept = entries.len(), "skipped malformed mood entries");
    }
    entries
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub async fn persist_log(path: &Path, log: &MoodLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(log.entries())?;
    fs::write(path, payload).await?;
    Ok(())
}
