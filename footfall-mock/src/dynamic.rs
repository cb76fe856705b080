//! Scriptable mock connector driven from the outside by tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use footfall_core::connector::{FootfallConnector, ShopDirectoryProvider, VisitorDataProvider};
use footfall_core::{FootfallError, Shop, VisitorRequest, VisitorSeries};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(FootfallError),
    /// Hang indefinitely (simulate a stalled provider).
    Hang,
}

#[derive(Default)]
struct InternalState {
    visitor_rules: HashMap<VisitorRequest, MockBehavior<VisitorSeries>>,
    shops_rule: Option<MockBehavior<Vec<Shop>>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `visitor_data` calls for a specific request.
    pub async fn set_visitor_behavior(
        &self,
        req: VisitorRequest,
        behavior: MockBehavior<VisitorSeries>,
    ) {
        let mut guard = self.state.lock().await;
        guard.visitor_rules.insert(req, behavior);
    }

    /// Set the behavior for `shops` calls.
    pub async fn set_shops_behavior(&self, behavior: MockBehavior<Vec<Shop>>) {
        let mut guard = self.state.lock().await;
        guard.shops_rule = Some(behavior);
    }
}

/// Connector whose responses are scripted per request via
/// [`DynamicMockController`]. Unscripted requests return `NotFound`.
pub struct DynamicMock {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMock {
    /// Create a connector/controller pair. `name` distinguishes instances in
    /// priority configuration and error tags.
    #[must_use]
    pub fn new(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let mock = Arc::new(Self {
            name,
            state: state.clone(),
        });
        (mock, DynamicMockController { state })
    }
}

async fn run<T: Clone>(rule: Option<MockBehavior<T>>, not_found: String) -> Result<T, FootfallError> {
    match rule {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!("pending future never resolves")
        }
        None => Err(FootfallError::not_found(not_found)),
    }
}

#[async_trait]
impl VisitorDataProvider for DynamicMock {
    async fn visitor_data(&self, req: &VisitorRequest) -> Result<VisitorSeries, FootfallError> {
        let rule = {
            let guard = self.state.lock().await;
            guard.visitor_rules.get(req).cloned()
        };
        run(rule, format!("visitor data for {} on {}", req.shop, req.date)).await
    }
}

#[async_trait]
impl ShopDirectoryProvider for DynamicMock {
    async fn shops(&self) -> Result<Vec<Shop>, FootfallError> {
        let rule = {
            let guard = self.state.lock().await;
            guard.shops_rule.clone()
        };
        run(rule, "shop directory".to_string()).await
    }
}

impl FootfallConnector for DynamicMock {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_visitor_data_provider(&self) -> Option<&dyn VisitorDataProvider> {
        Some(self as &dyn VisitorDataProvider)
    }

    fn as_shop_directory_provider(&self) -> Option<&dyn ShopDirectoryProvider> {
        Some(self as &dyn ShopDirectoryProvider)
    }
}
