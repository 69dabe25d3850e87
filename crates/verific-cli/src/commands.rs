use super::args::{Cli, Commands, ConfigCommand};
use super::config::{CONFIG_FILE, Config, resolve_workspace_path};
use super::handlers::{self, HandlerContext};
use super::logging;
use super::presentation::presenters;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = data_dir.join(CONFIG_FILE);

    let Some(command) = cli.command else {
        let ctx = HandlerContext::new(cli.format, Config::default());
        return ctx.render(presenters::present_guidance(
            config_path.clone(),
            config_path.exists(),
        ));
    };

    // `config init` must work even when the existing file is broken
    let config = match &command {
        Commands::Config {
            command: ConfigCommand::Init { .. },
        } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };
    let ctx = HandlerContext::new(cli.format, config);

    match command {
        Commands::Group {
            file,
            date_field,
            grouping,
        } => handlers::group::handle(&ctx, &file, date_field, &grouping),

        Commands::Schedule { file, grouping } => handlers::schedule::handle(&ctx, &file, &grouping),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, &config_path),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, &config_path, force),
        },
    }
}
