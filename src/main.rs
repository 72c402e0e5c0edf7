//! ZenLink Companion - Entry Point
//!
//! CLI front-end mapping subcommands onto sync-controller operations.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zenlink_companion::core::events::SyncUpdate;
use zenlink_companion::{
    menu, CameraSource, CommandRunner, Config, Orientation, SyncController, ZlRunner,
};

#[derive(Parser)]
#[command(name = "zenlink-companion", version, about = "Control the ZenLink streaming daemon")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Print the current daemon state
    Status {
        /// Emit the raw state as JSON instead of the rendered summary
        #[arg(long)]
        json: bool,
    },
    /// Poll the daemon and print state changes until interrupted
    Watch,
    /// Toggle the daemon on or off
    Toggle,
    /// Connect to a device address
    Connect { address: String },
    /// Select the camera source
    Camera { source: SourceArg },
    /// Set camera orientation (0|90|180|270|flip0|flip90|flip180|flip270)
    Orientation { token: String },
    /// Route the phone microphone to the desktop
    Mic { state: SwitchArg },
    /// Stream desktop audio to the phone
    DesktopAudio { state: SwitchArg },
    /// Manage the saved device list
    Devices {
        #[command(subcommand)]
        action: DeviceAction,
    },
    /// Set the default orientation for one camera lens
    DefaultOrientation { lens: LensArg, token: String },
    /// Show or change companion configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration and its file path
    Show,
    /// Set the zl-config program name or path
    SetProgram { program: String },
    /// Set the watch poll interval in milliseconds
    SetPollInterval { ms: u64 },
}

#[derive(Subcommand)]
enum DeviceAction {
    /// List saved devices, marking the connected one
    List,
    /// Add an address to the saved list
    Add { address: String },
    /// Remove an address from the saved list
    Remove { address: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Back,
    Front,
    None,
}

impl From<SourceArg> for CameraSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Back => CameraSource::Back,
            SourceArg::Front => CameraSource::Front,
            SourceArg::None => CameraSource::None,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SwitchArg {
    On,
    Off,
}

impl From<SwitchArg> for bool {
    fn from(arg: SwitchArg) -> Self {
        matches!(arg, SwitchArg::On)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LensArg {
    Front,
    Back,
}

fn parse_orientation(token: &str) -> Result<Orientation> {
    Orientation::parse_strict(token)
        .ok_or_else(|| anyhow::anyhow!("invalid orientation token: {token}"))
}

/// Print a human-readable summary derived from the menu view model.
fn print_summary(update: &SyncUpdate) {
    let view = menu::render(&update.state, &update.saved);

    let toggle = if view.toggle_checked { "on" } else { "off" };
    println!("ZenLink: {} ({})", toggle, view.subtitle);

    if view.advanced_visible {
        if view.orientation_visible {
            println!(
                "Camera: {} (orientation {})",
                update.state.camera.token(),
                update.state.orientation.token()
            );
        } else {
            println!("Camera: {}", update.state.camera.label());
        }
        println!("Phone mic: {}", switch(view.mic_on));
        println!("Desktop audio: {}", switch(view.desktop_audio_on));
    }

    println!("Saved phones:");
    for entry in &view.devices {
        let marker = if entry.selected { "*" } else { " " };
        println!("  {} {}", marker, entry.label);
    }
}

fn switch(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

/// Poll the daemon, printing a summary whenever the composed state changes.
async fn watch<R: CommandRunner>(
    controller: &SyncController<R>,
    poll_interval_ms: u64,
) -> Result<()> {
    info!("Watching daemon state (Ctrl-C to stop)");

    let mut interval = tokio::time::interval(Duration::from_millis(poll_interval_ms.max(100)));
    let mut last: Option<SyncUpdate> = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Stopped watching");
                return Ok(());
            }
            _ = interval.tick() => {
                let update = controller.refresh().await;
                if last.as_ref() != Some(&update) {
                    print_summary(&update);
                    println!();
                    last = Some(update);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let controller = SyncController::new(ZlRunner::new(config.backend.program.clone()));

    match cli.command {
        CliCommand::Status { json } => {
            let update = controller.refresh().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&update)?);
            } else {
                print_summary(&update);
            }
        }
        CliCommand::Watch => {
            watch(&controller, config.sync.poll_interval_ms).await?;
        }
        CliCommand::Toggle => {
            print_summary(&controller.toggle_daemon().await);
        }
        CliCommand::Connect { address } => {
            print_summary(&controller.connect(&address).await);
        }
        CliCommand::Camera { source } => {
            print_summary(&controller.set_camera(source.into()).await);
        }
        CliCommand::Orientation { token } => {
            let orientation = parse_orientation(&token)?;
            print_summary(&controller.set_orientation(orientation).await);
        }
        CliCommand::Mic { state } => {
            print_summary(&controller.set_mic(state.into()).await);
        }
        CliCommand::DesktopAudio { state } => {
            print_summary(&controller.set_desktop_audio(state.into()).await);
        }
        CliCommand::Devices { action } => match action {
            DeviceAction::List => {
                let update = controller.refresh().await;
                let view = menu::render(&update.state, &update.saved);
                for entry in &view.devices {
                    let marker = if entry.selected { "*" } else { " " };
                    println!("{} {}", marker, entry.label);
                }
            }
            DeviceAction::Add { address } => {
                print_summary(&controller.save_device(&address).await);
            }
            DeviceAction::Remove { address } => {
                print_summary(&controller.forget_device(&address).await);
            }
        },
        CliCommand::DefaultOrientation { lens, token } => {
            let orientation = parse_orientation(&token)?;
            let update = match lens {
                LensArg::Front => controller.set_default_front(orientation).await,
                LensArg::Back => controller.set_default_back(orientation).await,
            };
            print_summary(&update);
        }
        CliCommand::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", toml::to_string_pretty(&config)?);
                println!("# {}", Config::config_path()?.display());
            }
            ConfigAction::SetProgram { program } => {
                let mut config = config;
                config.backend.program = program;
                config.save()?;
                info!("Configuration saved");
            }
            ConfigAction::SetPollInterval { ms } => {
                let mut config = config;
                config.sync.poll_interval_ms = ms;
                config.save()?;
                info!("Configuration saved");
            }
        },
    }

    Ok(())
}
