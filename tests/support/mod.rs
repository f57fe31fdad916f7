use tokio::net::TcpListener;

// Serve the real app on an ephemeral port inside the calling test's runtime.
// The socket is bound before this returns, so early requests just queue until accept.
pub async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        if let Err(e) = user_server::run(listener).await {
            panic!("test server stopped: {e}");
        }
    });

    format!("http://{addr}")
}
