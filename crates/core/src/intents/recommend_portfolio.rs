use tracing::info;

use super::{DialogContext, IntentHandler};
use crate::errors::DialogError;
use crate::lex::{
    close, delegate, elicit_slot, DialogResponse, FulfillmentState, IntentRequest, Message,
};
use crate::portfolio::{recommendation, RiskLevel};
use crate::validation::{
    validate, AGE_SLOT, ANONYMOUS_NAME, FIRST_NAME_SLOT, INVESTMENT_AMOUNT_SLOT, RISK_LEVEL_SLOT,
};

pub const RECOMMEND_PORTFOLIO_INTENT: &str = "recommendPortfolio";

/// Validates the advisor slots while the dialog is in progress, then answers
/// with a fixed bond/equity split once the dialog manager asks for fulfillment.
pub struct RecommendPortfolioHandler;

impl IntentHandler for RecommendPortfolioHandler {
    fn intent_name(&self) -> &'static str {
        RECOMMEND_PORTFOLIO_INTENT
    }

    fn handle(
        &self,
        request: IntentRequest,
        ctx: &DialogContext,
    ) -> Result<DialogResponse, DialogError> {
        if request.is_dialog_code_hook() {
            Ok(validate_slots(request, ctx))
        } else {
            fulfill(request, ctx)
        }
    }
}

fn validate_slots(request: IntentRequest, ctx: &DialogContext) -> DialogResponse {
    let IntentRequest { current_intent, session_attributes, .. } = request;
    let mut slots = current_intent.slots;

    let result = validate(
        slots.get(FIRST_NAME_SLOT),
        slots.get(AGE_SLOT),
        slots.get(INVESTMENT_AMOUNT_SLOT),
        slots.get(RISK_LEVEL_SLOT),
    );

    match (result.violated_slot, result.message) {
        (Some(violated_slot), Some(message)) => {
            info!(
                event_name = "dialog.recommend_portfolio.slot_rejected",
                correlation_id = %ctx.correlation_id,
                violated_slot,
                "slot failed validation; eliciting again"
            );
            slots.clear(violated_slot);
            elicit_slot(session_attributes, current_intent.name, slots, violated_slot, message)
        }
        _ => {
            info!(
                event_name = "dialog.recommend_portfolio.delegated",
                correlation_id = %ctx.correlation_id,
                "slots valid; delegating to dialog manager"
            );
            delegate(session_attributes, slots)
        }
    }
}

fn fulfill(request: IntentRequest, ctx: &DialogContext) -> Result<DialogResponse, DialogError> {
    let slots = request.slots();
    let raw_risk_level = slots.get(RISK_LEVEL_SLOT);
    let risk_level = raw_risk_level
        .and_then(|value| value.parse::<RiskLevel>().ok())
        .ok_or_else(|| DialogError::InvalidRiskLevel {
            value: raw_risk_level.map(str::to_owned),
        })?;
    let first_name = slots.get(FIRST_NAME_SLOT).unwrap_or(ANONYMOUS_NAME);
    let advice = recommendation(first_name, risk_level);

    info!(
        event_name = "dialog.recommend_portfolio.fulfilled",
        correlation_id = %ctx.correlation_id,
        risk_level = %risk_level,
        "portfolio recommendation issued"
    );

    Ok(close(request.session_attributes, FulfillmentState::Fulfilled, Message::plain(advice)))
}
