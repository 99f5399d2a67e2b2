use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsfeed_cards=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match newsfeed_cards::run().await {
        Ok(markup) => print!("{markup}"),
        Err(error) => {
            tracing::error!(%error, "news pipeline could not start");
            std::process::exit(1);
        }
    }
}
