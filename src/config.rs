use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub seed_demo_data: bool,
    pub default_channel: String,
    pub lock_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Self {
            seed_demo_data,
            default_channel: env::var("DEFAULT_CHANNEL")
                .unwrap_or_else(|_| "general".to_string()),
            lock_ttl_secs: env::var("LOCK_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }

    pub fn lock_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.lock_ttl_secs)
    }
}
