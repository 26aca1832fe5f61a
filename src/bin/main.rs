use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "moodflix-server")]
#[command(about = "Mood-based movie recommendation server", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "moodflix-server.yaml")]
    config: String,

    /// Movie dataset (CSV), overrides the config file.
    #[arg(short, long)]
    dataset: Option<String>,

    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "moodflix_rs=debug,tower_http=debug"
    } else {
        "moodflix_rs=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = moodflix_rs::run(&args.config, args.dataset, args.debug).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
