use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub api_url: String,
    pub llm_host: String,
    pub llm_model: String,
    pub email_relay_url: String,
    pub admin_password: String,
    pub token_ttl_minutes: i64,
    // bcrypt work factor, lowered in tests
    pub password_cost: u32,
}

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

impl AppConfig {
    pub fn uses_default_admin_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("MUSEUM_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path.trim_end_matches('/'));
        let api_url = env::var("MUSEUM_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string());
        let llm_host = env::var("MUSEUM_LOCAL_LLM_HOST")
            .unwrap_or_else(|_| "http://localhost:11434".to_string());
        let llm_model =
            env::var("MUSEUM_LOCAL_LLM_MODEL").unwrap_or_else(|_| "llama3.2".to_string());
        let email_relay_url = env::var("MUSEUM_EMAIL_RELAY_URL")
            .unwrap_or_else(|_| "https://formsubmit.co".to_string());
        let admin_password = env::var("MUSEUM_ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
        let token_ttl_minutes = env::var("MUSEUM_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let password_cost = env::var("MUSEUM_PASSWORD_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self {
            storage_path,
            db_path,
            api_url,
            llm_host,
            llm_model,
            email_relay_url,
            admin_password,
            token_ttl_minutes,
            password_cost,
        }
    }
}
