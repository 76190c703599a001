#[macro_use]
extern crate tracing;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer};
use rand::Rng;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use finance_lib::auth::jwt::JWTAuth;
use finance_lib::config::Config;

const DB_POOL_SIZE: u32 = 5;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match get_config_file() {
        Ok(config_path) => Config::from_file(config_path)?,
        Err(e) => {
            warn!("{}, reading configuration from environment", e);
            Config::from_env()?
        }
    };

    let subscriber = registry::Registry::default()
        .with(config.level_filter()?)
        .with(tracing_subscriber::fmt::Layer::default());
    tracing::subscriber::set_global_default(subscriber)?;
    drop(tracing_guard);

    let (user_repo, transaction_repo) =
        finance_repo::sqlx_repo::create_repos(&config.database_url, DB_POOL_SIZE).await?;

    let secret = get_secret()?;
    let jwt_auth = JWTAuth::from_secret(secret);

    let signups_enabled = config.signups_enabled;
    if !signups_enabled {
        info!("Signups are disabled");
    }
    let allowed_origins = config.allowed_origins.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&allowed_origins))
            .wrap(finance_lib::tracing::create_middleware())
            .configure(finance_lib::app_config_func(
                jwt_auth.clone(),
                user_repo.clone(),
                transaction_repo.clone(),
                signups_enabled,
            ))
    });

    info!(address = %config.bind_address, "Starting server");
    server.bind(&config.bind_address)?.run().await?;

    Ok(())
}

/// Same-origin only unless origins are listed in the config.
fn build_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600)
}

fn get_config_file() -> Result<PathBuf, &'static str> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Ok(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    Err("Config file not found")
}

fn get_state_dir() -> PathBuf {
    if let Ok(state_env) = std::env::var("STATE_DIRECTORY") {
        return PathBuf::from(state_env);
    }

    PathBuf::from("data")
}

/// Reads the token signing secret from the state directory, generating and saving a new one on
/// first start.
fn get_secret() -> Result<Vec<u8>, Box<dyn Error>> {
    let state_dir = get_state_dir();
    let secret_file = state_dir.join("secret");
    if secret_file.exists() {
        return Ok(fs::read(secret_file)?);
    }

    info!(path = ?secret_file, "Generating new secret");
    let mut secret = [0u8; 128];
    rand::thread_rng().fill(&mut secret[..]);

    fs::create_dir_all(&state_dir)?;
    fs::write(&secret_file, secret)?;

    Ok(secret.to_vec())
}
