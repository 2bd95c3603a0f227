use std::panic::{self, AssertUnwindSafe};

use httpmock::MockServer;

/// Start a fresh `httpmock::MockServer`, or `None` when the environment cannot bind a socket.
pub fn start_mock_server() -> Option<MockServer> {
    panic::catch_unwind(AssertUnwindSafe(MockServer::start)).ok()
}
