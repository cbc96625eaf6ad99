use anyhow::Context;
use plist::kernel::config::load_config;
use plist::kernel::domain::config::ApiConfig;
use plist_logger::Logger;
use plist_server::Server;

/// Overrides the config file location (`server.toml` in the working directory by default).
const CONFIG_PATH_VAR: &str = "PLIST_CONFIG";

#[plist_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ApiConfig = load_config(std::env::var_os(CONFIG_PATH_VAR))
        .context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
