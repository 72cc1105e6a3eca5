//! Intent routing.
//!
//! ```text
//! handle(event) → dispatch → IntentDispatcher → IntentHandler (by intent name)
//!                                                   ↓
//!                                  ElicitSlot | Delegate | Close
//! ```

pub mod recommend_portfolio;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::DialogError;
use crate::lex::{DialogResponse, IntentRequest};

pub use recommend_portfolio::{RecommendPortfolioHandler, RECOMMEND_PORTFOLIO_INTENT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogContext {
    pub correlation_id: String,
}

impl Default for DialogContext {
    fn default() -> Self {
        Self { correlation_id: "unknown-correlation-id".to_owned() }
    }
}

impl DialogContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self { correlation_id: correlation_id.into() }
    }
}

pub trait IntentHandler: Send + Sync {
    fn intent_name(&self) -> &'static str;
    fn handle(
        &self,
        request: IntentRequest,
        ctx: &DialogContext,
    ) -> Result<DialogResponse, DialogError>;
}

#[derive(Default)]
pub struct IntentDispatcher {
    handlers: HashMap<&'static str, Arc<dyn IntentHandler>>,
}

impl IntentDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(&mut self, handler: H)
    where
        H: IntentHandler + 'static,
    {
        self.handlers.insert(handler.intent_name(), Arc::new(handler));
    }

    pub fn dispatch(
        &self,
        request: IntentRequest,
        ctx: &DialogContext,
    ) -> Result<DialogResponse, DialogError> {
        let Some(handler) = self.handlers.get(request.intent_name()) else {
            warn!(
                event_name = "dialog.dispatch.unsupported_intent",
                correlation_id = %ctx.correlation_id,
                intent_name = %request.intent_name(),
                "no handler registered for intent"
            );
            return Err(DialogError::UnsupportedIntent {
                intent_name: request.current_intent.name,
            });
        };

        debug!(
            event_name = "dialog.dispatch.routed",
            correlation_id = %ctx.correlation_id,
            intent_name = %request.intent_name(),
            invocation_source = ?request.invocation_source,
            "routing intent request"
        );
        handler.handle(request, ctx)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

pub fn default_dispatcher() -> IntentDispatcher {
    let mut dispatcher = IntentDispatcher::new();
    dispatcher.register(RecommendPortfolioHandler);
    dispatcher
}

/// Routes a request through the default dispatcher.
pub fn dispatch(request: IntentRequest) -> Result<DialogResponse, DialogError> {
    dispatch_with_context(request, &DialogContext::default())
}

pub fn dispatch_with_context(
    request: IntentRequest,
    ctx: &DialogContext,
) -> Result<DialogResponse, DialogError> {
    default_dispatcher().dispatch(request, ctx)
}
