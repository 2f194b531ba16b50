use address_book::web::{self, AppState};
use address_book::{AddressBook, Config};
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    match run().await {
        Err(e) => {
            error!("Error: {:?}", e);
            std::process::exit(1);
        }
        _ => {}
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(ErrorLayer::default())
        .init();
}

async fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::from_env()?;
    let book = AddressBook::from_file(Some(config.book_path.as_path()))
        .wrap_err_with(|| format!("cannot load address book from [{}]", config.book_path.display()))?;
    info!("loaded [{}] addresses for [{}]", book.len(), book);

    let app = web::router(AppState::new(book, config.book_path.clone())).layer(TraceLayer::new_for_http());
    let listener = TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("cannot listen on [{}]", config.bind))?;
    info!("serving address book on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("address book server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("cannot listen for shutdown signal: {:?}", e);
    }
}
