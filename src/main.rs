use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = mandel_service::ServerArgs::parse();
    mandel_service::serve(args).await?;

    Ok(())
}
