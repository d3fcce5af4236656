#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = totem_forge::run().await {
        log::error!("{err}");
        std::process::exit(1);
    }
}
