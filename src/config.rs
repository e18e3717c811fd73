use std::env;

use crate::utils::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_HOST: &str = "cluster0.hlsud.mongodb.net";
const DEFAULT_DB_NAME: &str = "School";
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub secret_token: String,
    pub token_ttl: chrono::Duration,
}

impl Config {
    /// Reads the process environment (call `dotenv().ok()` first to pick up a
    /// `.env` file).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| AppError::Config(format!("PORT is not a valid port: {}", port)))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => atlas_uri()?,
        };
        let database_name = env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());

        let secret_token = env::var("SECRET_TOKEN")
            .map_err(|_| AppError::Config("SECRET_TOKEN must be set".into()))?;
        let token_ttl_secs = match env::var("TOKEN_TTL_SECS") {
            Ok(secs) => secs
                .parse()
                .map_err(|_| AppError::Config(format!("TOKEN_TTL_SECS is not a number: {}", secs)))?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            secret_token,
            token_ttl: chrono::Duration::seconds(token_ttl_secs),
        })
    }

    /// Database URI with the password masked, for logs.
    pub fn redacted_database_url(&self) -> String {
        redact_uri(&self.database_url)
    }
}

fn atlas_uri() -> Result<String, AppError> {
    let (Ok(user), Ok(pass)) = (env::var("DB_USER"), env::var("DB_PASS")) else {
        return Err(AppError::Config(
            "either DATABASE_URL or DB_USER and DB_PASS must be set".into(),
        ));
    };
    let host = env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string());

    Ok(format!(
        "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
        user, pass, host
    ))
}

fn redact_uri(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    let Some((credentials, host)) = rest.split_once('@') else {
        return uri.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{}://{}:****@{}", scheme, user, host),
        None => uri.to_string(),
    }
}
