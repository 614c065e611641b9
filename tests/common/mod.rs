//! Shared setup for the API integration tests.

use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Start a mock API server on its own multi-thread runtime.
///
/// The client under test is blocking and runs on the test thread, so the
/// async mock server gets a private runtime to live on. Destructure the
/// result as `let (rt, server) = ...` and keep both bound for the whole
/// test; that drop order shuts the server down before its runtime.
pub fn start_mock_server() -> (Runtime, MockServer) {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build test runtime");
    let server = rt.block_on(MockServer::start());
    (rt, server)
}
