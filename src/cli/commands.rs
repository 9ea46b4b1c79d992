//! Command dispatch

use std::io;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::render::{metrics_lines, sequence_line, step_line, to_termtree};
use crate::application::{Frame, Visualizer};
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::Traversal;
use crate::infrastructure::di::{Input, ServiceContainer};

/// Run the parsed command line with real I/O.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let settings = apply_cli_overrides(settings, cli);
    if !settings.color {
        output::disable_colors();
    }
    run(cli, &ServiceContainer::new(settings))
}

/// Run against an already wired container.
pub fn run(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { input }) => _show(container, input),
        Some(Commands::Traverse { input, order }) => _traverse(container, input, (*order).into()),
        Some(Commands::Replay {
            input,
            order,
            all,
            interval_ms,
        }) => {
            let orders = if *all {
                Traversal::ALL.to_vec()
            } else {
                vec![(*order).into()]
            };
            let interval = interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| container.interval());
            _replay(container, input, &orders, interval)
        }
        Some(Commands::Config { command }) => _config(container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, try --help".to_string(),
        )),
    }
}

/// Command line flags beat every config layer.
pub fn apply_cli_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if cli.no_color {
        settings.color = false;
    }
    let input = match &cli.command {
        Some(Commands::Show { input })
        | Some(Commands::Traverse { input, .. })
        | Some(Commands::Replay { input, .. }) => input,
        _ => return settings,
    };
    if input.lenient {
        settings.lenient = true;
    }
    if let Some(nulls) = input.nulls {
        settings.null_policy = nulls.into();
    }
    settings
}

fn to_input(args: &InputArgs) -> Input<'_> {
    match (&args.file, args.values.as_deref()) {
        (Some(path), _) => Input::File(path),
        (None, Some("-")) | (None, None) => Input::Stdin,
        (None, Some(text)) => Input::Inline(text),
    }
}

fn load(container: &ServiceContainer, args: &InputArgs) -> CliResult<Visualizer> {
    Ok(container.load(&to_input(args))?)
}

fn print_frame(frame: &Frame<'_>, color: bool) {
    output::info(&to_termtree(frame.tree, frame.highlight, color));
}

#[instrument(skip(container))]
fn _show(container: &ServiceContainer, args: &InputArgs) -> CliResult<()> {
    let viz = load(container, args)?;
    let frame = viz.frame();
    print_frame(&frame, container.settings.color);
    output::header("Tree Properties");
    for line in metrics_lines(&frame) {
        output::detail(&line);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _traverse(container: &ServiceContainer, args: &InputArgs, order: Traversal) -> CliResult<()> {
    let mut viz = load(container, args)?;
    let sequence = viz.select(order)?.to_vec();
    let values = viz.tree().values_of(&sequence);
    output::action(order.name(), &values.iter().join(" "));
    Ok(())
}

#[instrument(skip(container))]
fn _replay(
    container: &ServiceContainer,
    args: &InputArgs,
    orders: &[Traversal],
    interval: Duration,
) -> CliResult<()> {
    let mut viz = load(container, args)?;
    let color = container.settings.color;
    for &order in orders {
        viz.select(order)?;
        output::header(order.name());
        viz.play(&*container.ticker, interval, |frame| {
            debug!("frame step {:?}", frame.step);
            output::info(&step_line(&frame));
            print_frame(&frame, color);
            output::detail(&sequence_line(&frame, color));
        });
    }
    Ok(())
}

fn _config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::error("no config directory on this platform"),
        },
    }
    Ok(())
}
