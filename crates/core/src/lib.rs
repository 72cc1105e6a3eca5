//! Dialog code hook for the robo advisor bot.
//!
//! The dialog manager calls [`handle`] twice per conversation: once per turn
//! while slots are being collected (`DialogCodeHook`) and once for
//! fulfillment. Validation failures come back as `ElicitSlot` responses, not
//! errors; [`DialogError`] is reserved for events this handler cannot serve.

pub mod config;
pub mod errors;
pub mod handler;
pub mod intents;
pub mod lex;
pub mod portfolio;
pub mod validation;

pub use errors::{DialogError, InterfaceError};
pub use handler::{handle, handle_json, handle_json_with_context, parse_event};
pub use intents::{
    default_dispatcher, dispatch, DialogContext, IntentDispatcher, IntentHandler,
    RecommendPortfolioHandler,
};
pub use lex::{DialogAction, DialogResponse, IntentRequest, InvocationSource, Slots};
pub use portfolio::RiskLevel;
pub use validation::{validate, ParsedInt, ValidationResult};
