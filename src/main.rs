//! OnBrand CLI binary entry point.

use clap::Parser;
use onbrand::cli::{handlers, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "onbrand=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match handlers::load_config(cli.config.as_deref()) {
        Ok(config) => match cli.command {
            Commands::Render(args) => handlers::handle_render(&config, &args.file, args.caption_limit),
            Commands::GenerateImage(args) => {
                handlers::handle_generate_image(&config, &args.prompt).await
            }
            Commands::Contracts => Ok(handlers::handle_contracts()),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
