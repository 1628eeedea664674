use anyhow::Result;

use super::config_model::DotEnvyConfig;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = super::config_model::Server {
        port: std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?,
    };

    let database = super::config_model::Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let auth_provider = super::config_model::AuthProvider {
        base_url: std::env::var("AUTH_PROVIDER_URL").expect("AUTH_PROVIDER_URL is invalid"),
        api_key: std::env::var("AUTH_PROVIDER_KEY").expect("AUTH_PROVIDER_KEY is invalid"),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        auth_provider,
    })
}
