//! Tenant bootstrap CLI.
//!
//! Runs the pre-bootstrap sequence against a deployment and prints the
//! resolved runtime configuration.
//!
//! ```text
//! tenant-bootstrap --root-url https://app.example.com/ \
//!     --current-url https://acme.app.example.com/ \
//!     --cookie Abp.TenantId=2 --auth-token <token>
//!
//! tenant-bootstrap --root-url https://app.example.com/ \
//!     --cookie-header 'Abp.TenantId=2; Abp.Localization.CultureName=tr'
//! ```

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use tenant_bootstrap::config::loader::load_config;
use tenant_bootstrap::environment::{CookieJar, CookiePair};
use tenant_bootstrap::observability::logging::init_logging;
use tenant_bootstrap::{BootstrapConfig, ClientEnvironment, PreBootstrap, ReqwestTransport};

#[derive(Parser)]
#[command(name = "tenant-bootstrap")]
#[command(about = "Resolve tenant URLs and user settings for a multi-tenant client", long_about = None)]
struct Cli {
    /// Root URL the static assets are served from.
    #[arg(short, long)]
    root_url: String,

    /// URL the client is running at; used to detect the tenant. Defaults to the root URL.
    #[arg(long)]
    current_url: Option<Url>,

    /// Bootstrap configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Client cookies as a `Cookie` header (`a=1; b=2`).
    #[arg(long, value_name = "HEADER")]
    cookie_header: Option<String>,

    /// Client cookie as NAME=VALUE. Repeatable; overrides --cookie-header.
    #[arg(long = "cookie", value_name = "NAME=VALUE")]
    cookies: Vec<CookiePair>,

    /// Bearer token; stored in the configured auth token cookie.
    #[arg(long)]
    auth_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BootstrapConfig::default(),
    };

    init_logging(&config.observability)?;
    tracing::info!("tenant-bootstrap v{} starting", env!("CARGO_PKG_VERSION"));

    let current_url = match cli.current_url {
        Some(url) => url,
        None => Url::parse(&cli.root_url)?,
    };

    let mut cookies = cli
        .cookie_header
        .as_deref()
        .map(CookieJar::parse)
        .unwrap_or_default();
    for pair in cli.cookies {
        cookies.set(pair.name, pair.value);
    }
    if let Some(token) = cli.auth_token {
        cookies.set(config.headers.auth_token_cookie.clone(), token);
    }

    let environment = ClientEnvironment::new(current_url).with_cookies(cookies);
    let transport = ReqwestTransport::new(&config.timeouts)?;
    let bootstrap = PreBootstrap::new(transport, environment, config);

    let output = bootstrap
        .run_then(&cli.root_url, |runtime| -> Result<String, serde_json::Error> {
            let mut output = serde_json::to_value(runtime.as_ref())?;
            output["now"] = runtime.dates.serialize(&runtime.dates.now()).into();
            serde_json::to_string_pretty(&output)
        })
        .await??;
    println!("{}", output);

    Ok(())
}
