//! `filedrop` command-line host.

mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filedrop_flow::{Capabilities, DownloadFlow, Platform, PlatformIdentity};
use filedrop_fs::LocalFilesystem;
use filedrop_notification::SystemNotifications;
use filedrop_opener::SystemOpener;
use filedrop_system::{FixedPlatform, HostPlatform};
use owo_colors::OwoColorize;

use crate::config::AppConfig;

const HEADING: &str = "Lorem Ipsum";

const PARAGRAPHS: [&str; 3] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Donec a diam lectus. Sed sit \
     amet ipsum mauris. Maecenas congue ligula ac quam viverra nec consectetur ante hendrerit. \
     Donec et mollis dolor. Praesent et diam eget libero egestas mattis sit amet vitae augue.",
    "Nam tincidunt congue enim, ut porta lorem lacinia consectetur. Donec ut libero sed arcu \
     vehicula ultricies a non tortor. Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
     Aenean ut gravida lorem. Ut turpis felis, pulvinar a semper sed, adipiscing id dolor.",
    "Pellentesque auctor nisi id magna consequat sagittis. Curabitur dapibus enim sit amet elit \
     pharetra tincidunt feugiat nisl imperdiet. Ut convallis libero in urna ultrices accumsan. \
     Donec sed odio eros.",
];

#[derive(Parser)]
#[command(name = "filedrop")]
#[command(about = "Save a sample file, notify, and open it on tap", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base directory to use instead of the platform folders
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Platform identifier to report instead of the host's (e.g. "ios")
    #[arg(long, global = true)]
    platform: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample file and schedule the notification
    Download,
    /// Open the sample file with the default viewer
    Open,
    /// Show the content, download once, and open the file when the notification is tapped
    Run {
        /// How long to wait for the notification to be tapped
        #[arg(long, default_value_t = 30)]
        wait_secs: u64,
    },
}

fn capabilities(cli: &Cli) -> Capabilities {
    let platform: Arc<dyn PlatformIdentity> = match &cli.platform {
        Some(id) => Arc::new(FixedPlatform(Platform::from_identifier(id))),
        None => Arc::new(HostPlatform),
    };
    let storage = cli
        .root
        .as_ref()
        .map_or_else(LocalFilesystem::new, |root| LocalFilesystem::rooted(root.clone()));

    Capabilities {
        notifications: Arc::new(SystemNotifications::new()),
        storage: Arc::new(storage),
        opener: Arc::new(SystemOpener::new()),
        platform,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let flow = DownloadFlow::new(capabilities(&cli), config.flow.clone());

    match cli.command {
        Commands::Download => download(&flow).await,
        Commands::Open => {
            let uri = flow.open_file().await?;
            println!("{} {uri}", "Opened".green().bold());
            Ok(())
        }
        Commands::Run { wait_secs } => {
            run(&flow, &config, Duration::from_secs(wait_secs)).await;
            Ok(())
        }
    }
}

async fn download(flow: &DownloadFlow) -> Result<()> {
    let saved = flow.download_file().await?;
    println!("{} {}", "Saved".green().bold(), saved.uri);

    // Keep the process alive until the notification has been posted.
    tokio::time::sleep(flow.config().delay() + Duration::from_millis(500)).await;
    Ok(())
}

async fn run(flow: &DownloadFlow, config: &AppConfig, wait: Duration) {
    println!("{}", config.app_name.bold());
    println!();
    println!("{}", HEADING.bold());
    for paragraph in PARAGRAPHS {
        println!();
        println!("{paragraph}");
    }
    println!();

    let view = flow.mount().await;

    println!("{}", "[ Download File ]".blue().bold());
    if let Some(saved) = flow.on_download_pressed().await {
        println!("{} {}", "Saved".green().bold(), saved.target.path);
        println!("Waiting up to {}s for the notification to be tapped...", wait.as_secs());
    }

    if tokio::time::timeout(wait, view.run()).await.is_err() {
        log::debug!("wait elapsed, tearing down");
    }
    view.unmount();
}
