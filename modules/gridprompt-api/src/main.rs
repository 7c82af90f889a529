use std::sync::Arc;

use ai_client::OpenAi;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridprompt_api::{build_router, AppState};
use gridprompt_common::Config;
use gridprompt_filters::{domains, FilterGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gridprompt=info".parse()?)
                .add_directive("api=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let mut agent = OpenAi::new(&config.openai_api_key, &config.model);
    if let Some(ref url) = config.openai_base_url {
        agent = agent.with_base_url(url);
    }

    let addr = config.bind_addr();
    let public_url = config
        .server_url
        .clone()
        .unwrap_or_else(|| format!("http://{addr}"));

    let state = Arc::new(AppState {
        config,
        generator: FilterGenerator::new(Arc::new(agent)),
    });
    let app = build_router(state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on {public_url}");
    for domain in domains::ALL {
        info!("  POST {}{}", public_url, domain.route);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
