use clap::Parser;
use resizer_api::setup;
use resizer_api::telemetry::init_telemetry;
use resizer_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation under many concurrent decode buffers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "resizer-api", about = "JPEG resize proxy")]
struct Args {
    /// Address to listen on (overrides LISTEN_ADDR)
    #[arg(long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(addr) = args.addr {
        config.listen_addr = addr;
    }

    init_telemetry(&config)?;

    let (_state, router) = setup::initialize_app(config.clone())?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
