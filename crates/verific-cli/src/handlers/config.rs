use super::HandlerContext;
use crate::config::Config;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use std::path::Path;

pub fn show(ctx: &HandlerContext, config_path: &Path) -> Result<()> {
    let view_model =
        presenters::present_config(config_path.to_path_buf(), config_path.exists(), ctx.config.clone());
    ctx.render(view_model)
}

pub fn init(ctx: &HandlerContext, config_path: &Path, force: bool) -> Result<()> {
    let exists = config_path.exists();
    if exists && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    ctx.render(presenters::present_config_written(config_path.to_path_buf(), exists))
}
