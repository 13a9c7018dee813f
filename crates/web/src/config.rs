use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};

/// Where the catalog lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Postgres,
    /// Seeded in-process store; contents are lost on restart.
    Memory,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!(
                "unknown CATALOG_BACKEND {other:?} (expected \"postgres\" or \"memory\")"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend: Backend,
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = match lookup("CATALOG_BACKEND") {
            Some(value) => value.parse()?,
            None => Backend::default(),
        };
        let database_url = lookup("DATABASE_URL");
        if backend == Backend::Postgres && database_url.is_none() {
            bail!("Cannot load DATABASE_URL env variable");
        }

        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            backend,
            database_url,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
