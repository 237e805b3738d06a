use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Simulated latency for read operations
    pub read_latency: Duration,
    /// Simulated latency for write operations
    pub write_latency: Duration,
    /// Load the demo testimonials at startup
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            read_latency: Duration::from_millis(env_ms("SHOWCASE_READ_LATENCY_MS", 100)),
            write_latency: Duration::from_millis(env_ms("SHOWCASE_WRITE_LATENCY_MS", 200)),
            seed_demo_data: env::var("SHOWCASE_SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

fn env_ms(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
