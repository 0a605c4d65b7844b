use anyhow::Context as _;

const DEFAULT_PORT: u16 = 3120;

/// Vault service configuration loaded from environment variables.
#[derive(Debug)]
pub struct VaultConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `VAULT_PORT`.
    pub vault_port: u16,
    /// Apply pending migrations before serving. Env var: `VAULT_AUTO_MIGRATE`.
    pub auto_migrate: bool,
}

impl VaultConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL must be set")?,
            vault_port: lookup("VAULT_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            auto_migrate: lookup("VAULT_AUTO_MIGRATE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}
