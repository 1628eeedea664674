use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(error) = collabmarket::run().await {
        error!("Server exited with error: {}", error);
        std::process::exit(1);
    }
}
