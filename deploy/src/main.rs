use {
    clap::Parser,
    dotenvy::dotenv,
    std::path::PathBuf,
    swapper_bridger_deploy::{commands::Invocation, config::DeploymentConfig},
    tracing::info,
    tracing_subscriber::EnvFilter,
};

/// Placeholder for the contract id in printed commands.
const CONTRACT_ID: &str = "<CONTRACT_ID>";

#[derive(Parser)]
#[command(name = "deploy")]
#[command(about = "Deploys and initializes a SwapperBridger contract on a Stellar network")]
struct Args {
    /// The network name known to the `stellar` CLI (e.g., "testnet")
    #[arg(long)]
    network: String,

    /// Identity or secret key signing the transactions
    #[arg(long)]
    source: String,

    /// Path to the optimized contract wasm
    #[arg(
        long,
        default_value = "target/wasm32-unknown-unknown/release/swapper_bridger.wasm"
    )]
    wasm: PathBuf,

    /// Run the commands instead of printing them
    #[arg(long)]
    execute: bool,
}

fn main() -> anyhow::Result<()> {
    // Variables may come from the shell instead of a .env file
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = DeploymentConfig::from_env()?;
    info!(
        chain = %config.endpoint.chain_name,
        network = %args.network,
        fee_tier = config.endpoint.fee_tier,
        registry = config.endpoint.registry.is_some(),
        "Loaded deployment config"
    );

    let deploy = Invocation::deploy(&args.network, &args.source, &args.wasm);

    if !args.execute {
        println!("{deploy}");
        println!(
            "{}",
            Invocation::initialize(&args.network, &args.source, CONTRACT_ID, &config)?
        );
        return Ok(());
    }

    info!(wasm = %args.wasm.display(), "Deploying...");
    let contract_id = deploy.run()?;
    info!(%contract_id, "Contract deployed");

    Invocation::initialize(&args.network, &args.source, &contract_id, &config)?.run()?;
    info!(%contract_id, owner = %config.owner, "Contract initialized");

    println!("{contract_id}");

    Ok(())
}
