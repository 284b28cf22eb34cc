use clap::Parser;
use study_tree::app;
use study_tree::config::ServeArgs;

#[derive(Parser)]
#[command(name = "study-tree")]
#[command(about = "Serve a study sheet as a collapsible tree in the browser")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    // Start the web application
    app::run(cli.serve).await
}
