use clk::commands::Cli;
use clk::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up CLICKUP_PK / CLICKUP_TEAM_ID from a .env file if present.
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu().await
}
