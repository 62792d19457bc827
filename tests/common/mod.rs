use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use feed_api_rust::store::MemoryStore;
use feed_api_rust::{app, AppState};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Must be set before the config singleton is first touched by a request
        std::env::set_var("JWT_SECRET", "integration-test-secret");
        std::env::set_var("SECURITY_BCRYPT_COST", "4");

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = std::net::TcpListener::bind(("127.0.0.1", port))
            .context("failed to bind test listener")?;
        listener.set_nonblocking(true)?;

        let state = AppState::new(Arc::new(MemoryStore::new()));
        let router = app(state);

        // Serve from a dedicated runtime thread so the server outlives the
        // per-test runtimes that #[tokio::test] creates and drops.
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("test runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("listener");
                axum::serve(listener, router).await.expect("server");
            });
        });

        Ok(Self { port, base_url })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to start test server"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

pub const TEST_PASSWORD: &str = "pass-12345";

/// Register an account and log in, returning its bearer token.
pub async fn register_and_login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    name: &str,
) -> Result<String> {
    let res = client
        .post(format!("{}/auth/register", base_url))
        .json(&json!({ "email": email, "password": TEST_PASSWORD, "name": name }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "registration failed: {}",
        res.status()
    );

    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

    let body = res.json::<Value>().await?;
    let token = body["data"]["token"]
        .as_str()
        .context("login response missing token")?;
    Ok(token.to_string())
}
