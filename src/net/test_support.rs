//! In-memory doubles for driving `AuthClient` in tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::auth_client::AuthClient;
use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::util::navigate::Navigator;
use crate::util::storage::MemoryStore;

/// Transport replaying queued results and recording every request sent.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, err: ApiError) {
        self.replies.borrow_mut().push_back(Err(err));
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

/// Navigator remembering redirect targets.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    targets: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn targets(&self) -> Vec<String> {
        self.targets.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, target: &str) {
        self.targets.borrow_mut().push(target.to_owned());
    }
}

pub type TestClient = AuthClient<ScriptedTransport, MemoryStore, RecordingNavigator>;

/// Client plus handles onto each of its doubles.
pub struct Harness {
    pub client: TestClient,
    pub transport: ScriptedTransport,
    pub local: MemoryStore,
    pub session: MemoryStore,
    pub navigator: RecordingNavigator,
}

pub fn harness() -> Harness {
    let transport = ScriptedTransport::default();
    let local = MemoryStore::new();
    let session = MemoryStore::new();
    let navigator = RecordingNavigator::default();
    let client = AuthClient::new(
        ClientConfig::with_base("http://api.test"),
        transport.clone(),
        local.clone(),
        session.clone(),
        navigator.clone(),
    );
    Harness {
        client,
        transport,
        local,
        session,
        navigator,
    }
}
