// context.rs

use std::env;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{load_config, GraphMailerConfiguration};
use crate::error::Result;
use crate::graph::credentials::Credentials;

pub const CONFIG_PATH_VAR: &str = "GRAPH_MAILER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/graph_mailer/graph_mailer.toml";

/// Everything a run needs, loaded once at start-up and never mutated.
#[derive(Clone, Debug)]
pub struct Context {
    pub config: GraphMailerConfiguration,
    pub credentials: Credentials,
}

impl Context {
    pub fn new(config: GraphMailerConfiguration, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
        }
    }
}

pub fn config_path() -> PathBuf {
    env::var(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn load_context() -> Result<Context> {
    // pick up a .env file if somebody left one for us
    if let Ok(path) = dotenv::dotenv() {
        debug!("Loaded environment from {path:?}");
    }
    // load the TOML configuration file
    let path = config_path();
    info!("Loading configuration from {path:?}");
    let config = load_config(&path)?;
    // identity secrets come from the environment, never from the file
    let credentials = Credentials::from_env();
    // return the application Context object to the caller
    Ok(Context::new(config, credentials))
}

//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
//---------------------------------------------------------------------------
