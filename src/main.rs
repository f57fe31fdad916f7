#[tokio::main]
async fn main() {
    // Bootstrap errors are already logged by the server; just exit non-zero.
    if user_server::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
