mod config;
mod error;
mod logging;
mod package_manager;
mod tui;

use anyhow::Result;

fn main() -> Result<()> {
    let home = config::home_dir()?;

    // 加载配置（可选）
    let config = config::Config::load_or_default(&home)?;

    logging::init(config.paths(&home).root.join("pkt.log"));

    tui::run(&config, &home)?;

    Ok(())
}
