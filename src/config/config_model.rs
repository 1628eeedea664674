#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub auth_provider: AuthProvider,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

/// External auth provider the user store is mirrored into. The key also
/// signs login tokens.
#[derive(Debug, Clone)]
pub struct AuthProvider {
    pub base_url: String,
    pub api_key: String,
}
