use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;
const DEFAULT_MAX_UPLOAD_SIZE: usize = 32 << 20;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub bcrypt_cost: u32,
    pub server_host: String,
    pub server_port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_size: usize,
}

impl Config {
    /// Reads `.env` (when present) and then the process environment.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; everything else falls
    /// back to a default when missing or unparsable.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            jwt_secret: env::var("JWT_SECRET")?,
            ..Self::defaults_from(|key| env::var(key).ok())
        })
    }

    fn defaults_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let jwt_expiration_secs = lookup("JWT_EXPIRATION")
            .and_then(|v| v.trim().trim_end_matches('h').parse::<u64>().ok())
            .and_then(|hours| hours.checked_mul(3600))
            .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS * 3600);

        Config {
            database_url: String::new(),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            jwt_secret: String::new(),
            jwt_expiration_secs,
            bcrypt_cost: lookup("BCRYPT_COST")
                .and_then(|v| v.parse().ok())
                .filter(|cost| (4..=31).contains(cost))
                .unwrap_or(bcrypt::DEFAULT_COST),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            max_upload_size: lookup("MAX_UPLOAD_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE),
        }
    }

    /// Config with every optional value at its default.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Config {
            database_url: database_url.into(),
            jwt_secret: jwt_secret.into(),
            ..Self::defaults_from(|_| None)
        }
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }
}
