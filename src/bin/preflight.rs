use realtrust::infra::{config, logging};
use realtrust::storage::document::{DocumentStore, PostgresDocumentStore};
use realtrust::{BackendMode, Facade};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--seed]\n\
         \n\
         Reads env vars (all optional):\n\
           DATABASE_URL, PORT, STATIC_DIR, API_BASE_URL, LOCAL_STORE_PATH, SIMULATED_DELAY_MS\n\
         \n\
         --seed   write the default projects/clients into an empty local store\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let seed = args.iter().any(|a| a == "--seed");

    // Force-read config (nice error messages if malformed)
    let port = config::port()?;
    let delay = config::simulated_delay()?;

    println!("> Preflight:");
    println!("  backend mode       = {:?}", BackendMode::compiled());
    println!("  PORT               = {}", port);
    println!("  STATIC_DIR         = {}", config::static_dir().display());
    println!("  API_BASE_URL       = {}", config::api_base_url());
    println!("  LOCAL_STORE_PATH   = {}", config::local_store_path().display());
    println!("  SIMULATED_DELAY_MS = {}", delay.as_millis());

    match config::database_url() {
        Some(url) => {
            let store = PostgresDocumentStore::connect(&url).await?;
            store.ping().await?;
            println!("  DATABASE_URL       = reachable, `documents` table ready");
        }
        None => println!("  DATABASE_URL       = unset (server would use the in-memory store)"),
    }

    let facade = Facade::from_config()?;
    if seed {
        facade.init_mock_data().await;
    }
    let projects = facade.get_projects().await;
    let clients = facade.get_clients().await;
    println!(
        "  facade             = {} projects, {} clients visible",
        projects.len(),
        clients.len()
    );

    println!("> Preflight OK");
    Ok(())
}
