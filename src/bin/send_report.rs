// send_report.rs

//! send_report delivers a single report e-mail through Microsoft Graph
//! without a user at the keyboard. It authenticates as a registered
//! application (client-credentials grant), optionally attaches one file,
//! and submits the message via sendMail on behalf of the configured
//! sender mailbox.
//!
//! Configuration
//!
//! The application identity comes from the environment (or a .env file):
//! GRAPH_CLIENT_ID, GRAPH_CLIENT_SECRET, GRAPH_TENANT_ID. Everything else
//! comes from the TOML file named by GRAPH_MAILER_CONFIG; see
//! etc/graph_mailer.toml for a sample.
//!
//! Exit status is 0 when Graph accepts the message, 1 otherwise.
#![forbid(unsafe_code)]

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use graph_mailer::context::load_context;
use graph_mailer::error::GraphMailerError;
use graph_mailer::report::send_report;

const DEFAULT_LOG_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

#[tokio::main]
async fn main() {
    // set up logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    const VERSION: &str = env!("CARGO_PKG_VERSION");
    info!("Hello, send_report v{VERSION}!");

    // load the configuration and send the report
    let result = match load_context() {
        Ok(context) => send_report(&context).await,
        Err(e) => Err(e),
    };

    // log about the final result
    if let Err(e) = result {
        log_failure(&e);
        std::process::exit(e.exit_code());
    }
}

fn log_failure(e: &GraphMailerError) {
    let category = e.category();
    error!("{category}: {e}");
}
