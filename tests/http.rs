use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Entry {
    mood: String,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct Chart {
    labels: Vec<String>,
    scores: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct Summary {
    current_mood: String,
    average: String,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    entries: Vec<Entry>,
    chart: Chart,
    summary: Option<Summary>,
}

#[derive(Debug, Deserialize)]
struct Notice {
    message: String,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct Message {
    text: String,
    sender: String,
}

#[derive(Debug, Deserialize)]
struct Chat {
    messages: Vec<Message>,
    pending: bool,
}

#[derive(Debug, Deserialize)]
struct User {
    email: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Auth {
    user: Option<User>,
    notice: Option<Notice>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    id: u32,
    #[serde(rename = "type")]
    kind: String,
}

const CHAT_DELAY_MS: u64 = 400;

const ANXIETY_REPLIES: [&str; 3] = [
    "I understand anxiety can be overwhelming. Would you like to learn some coping techniques?",
    "It's common to feel anxious. Let's explore some calming exercises together.",
    "I'm here to help you manage your anxiety. Would you like to try a breathing exercise?",
];

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("mood_companion_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/mood")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(data_path: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_mood_companion"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("APP_AUTH_DELAY_MS", "10")
        .env("APP_CHAT_DELAY_MIN_MS", CHAT_DELAY_MS.to_string())
        .env("APP_CHAT_DELAY_MAX_MS", (CHAT_DELAY_MS + 1).to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server(&unique_data_path()).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_moods(client: &Client, base_url: &str) -> Snapshot {
    client
        .get(format!("{base_url}/api/mood"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_record_mood_updates_chart_and_summary() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for mood in ["great", "good", "great", "good", "great", "good", "great", "good", "great"] {
        let response = client
            .post(format!("{}/api/mood", server.base_url))
            .json(&serde_json::json!({ "mood": mood }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let snapshot = get_moods(&client, &server.base_url).await;
    assert_eq!(snapshot.entries.len(), 7);
    assert_eq!(snapshot.chart.labels.len(), 7);
    assert_eq!(snapshot.chart.scores, vec![5, 4, 5, 4, 5, 4, 5]);
    let summary = snapshot.summary.expect("summary");
    assert_eq!(summary.current_mood, "Great");
    // 33 / 7 is about 4.71
    assert_eq!(summary.average, "Very Good");
    assert!(snapshot.entries.iter().all(|entry| !entry.timestamp.is_empty()));
    assert_eq!(snapshot.entries.last().unwrap().mood, "great");
}

#[tokio::test]
async fn http_record_mood_returns_notice_and_rejects_unknown() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "down" }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["notice"]["message"], "Mood logged: Down");
    assert_eq!(body["notice"]["kind"], "success");

    let before = get_moods(&client, &server.base_url).await.entries.len();
    let response = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "ecstatic" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let notice: Notice = response.json().await.unwrap();
    assert_eq!(notice.kind, "error");
    assert_eq!(get_moods(&client, &server.base_url).await.entries.len(), before);
}

#[tokio::test]
async fn http_mood_log_survives_restart() {
    let data_path = unique_data_path();
    let client = Client::new();

    let recorded = {
        let server = spawn_server(&data_path).await;
        for mood in ["okay", "bad"] {
            let response = client
                .post(format!("{}/api/mood", server.base_url))
                .json(&serde_json::json!({ "mood": mood }))
                .send()
                .await
                .unwrap();
            assert!(response.status().is_success());
        }
        get_moods(&client, &server.base_url).await
    };

    let server = spawn_server(&data_path).await;
    let reloaded = get_moods(&client, &server.base_url).await;
    let _ = std::fs::remove_file(&data_path);

    let moods: Vec<&str> = reloaded.entries.iter().map(|entry| entry.mood.as_str()).collect();
    assert_eq!(moods, vec!["okay", "bad"]);
    let stamps = |snapshot: &Snapshot| -> Vec<String> {
        snapshot.entries.iter().map(|entry| entry.timestamp.clone()).collect()
    };
    assert_eq!(stamps(&reloaded), stamps(&recorded));
    assert_eq!(reloaded.summary.unwrap().average, "Down");
}

#[tokio::test]
async fn http_chat_replies_from_matching_category() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let chat: Chat = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&serde_json::json!({ "message": "I feel anxious today" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!chat.pending);
    let reply = chat.messages.last().unwrap();
    assert_eq!(reply.sender, "bot");
    assert!(ANXIETY_REPLIES.contains(&reply.text.as_str()));
    let echo = &chat.messages[chat.messages.len() - 2];
    assert_eq!(echo.sender, "user");
    assert_eq!(echo.text, "I feel anxious today");
}

#[tokio::test]
async fn http_chat_rejects_submission_while_reply_pending() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: Chat = client
        .get(format!("{}/api/chat", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let first = {
        let client = client.clone();
        let url = format!("{}/api/chat", server.base_url);
        tokio::spawn(async move {
            client
                .post(url)
                .json(&serde_json::json!({ "message": "xyzzy" }))
                .send()
                .await
                .unwrap()
        })
    };
    sleep(Duration::from_millis(CHAT_DELAY_MS / 4)).await;

    let second = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&serde_json::json!({ "message": "hello?" }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let first = first.await.unwrap();
    assert!(first.status().is_success());
    let after: Chat = first.json().await.unwrap();

    let user_echoes = |chat: &Chat| chat.messages.iter().filter(|m| m.sender == "user").count();
    assert_eq!(user_echoes(&after), user_echoes(&before) + 1);
    assert!(after.messages.iter().all(|m| m.text != "hello?"));
    assert_eq!(
        after.messages.last().unwrap().text,
        "I'm here to support you. Would you like to explore our resources or talk to a professional?"
    );
}

#[tokio::test]
async fn http_login_validates_then_signs_in() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "email": "sam@example.com", "password": "short" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let notice: Notice = response.json().await.unwrap();
    assert_eq!(notice.message, "Password must be at least 8 characters long");

    let auth: Auth = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "email": "sam@example.com", "password": "longenough" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let user = auth.user.expect("user");
    assert_eq!(user.name, "sam");
    assert_eq!(user.email, "sam@example.com");
    assert_eq!(auth.notice.unwrap().message, "Successfully logged in!");

    let me: Option<User> = client
        .get(format!("{}/api/auth/me", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me.map(|user| user.name).as_deref(), Some("sam"));

    let auth: Auth = client
        .post(format!("{}/api/auth/logout", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(auth.user.is_none());
    assert_eq!(auth.notice.unwrap().message, "Successfully logged out!");
}

#[tokio::test]
async fn http_signup_requires_matching_passwords() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/auth/signup", server.base_url))
        .json(&serde_json::json!({
            "name": "Robin",
            "email": "robin@example.org",
            "password": "password1",
            "confirm_password": "password2"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let notice: Notice = response.json().await.unwrap();
    assert_eq!(notice.message, "Passwords do not match");
}

#[tokio::test]
async fn http_resources_filter_by_type() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let all: Vec<Resource> = client
        .get(format!("{}/api/resources", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 4);

    let videos: Vec<Resource> = client
        .get(format!("{}/api/resources?type=videos", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, 2);
    assert_eq!(videos[0].kind, "videos");

    let missing = client
        .post(format!("{}/api/resources/99/open", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
