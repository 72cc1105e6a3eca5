//! Wire types for the dialog code hook protocol: the inbound intent event and
//! the three dialog actions sent back (`ElicitSlot`, `Delegate`, `Close`).

pub mod request;
pub mod response;

pub use request::{
    BotDetails, CurrentIntent, IntentRequest, InvocationSource, SessionAttributes, Slots,
};
pub use response::{
    close, delegate, elicit_slot, ContentType, DialogAction, DialogResponse, FulfillmentState,
    Message,
};
