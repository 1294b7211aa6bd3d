#[tokio::main]
async fn main() {
    if let Err(e) = safe_history_analyser::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
