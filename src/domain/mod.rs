//! Domain logic for deal valuation lives here.

pub mod app_state;
pub mod entities;
pub mod evaluation;
pub mod status;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedSettings};
#[allow(unused_imports)]
pub use entities::{
    AcceleratorOffer, CabinClass, EliteProgress, EvalError, MileValuation, MilesPurchaseOffer,
    TicketOptions, UpgradeOffer, Verdict, WorthRange,
};
#[allow(unused_imports)]
pub use evaluation::{
    evaluate_accelerator, evaluate_miles_purchase, evaluate_ticket, evaluate_upgrade,
    format_currency, miles_value, upgrade_multiplier, AcceleratorEvaluation,
    MilesPurchaseEvaluation, TicketChoice, TicketEvaluation, UpgradeChoice, UpgradeEvaluation,
    UpgradeRules,
};
#[allow(unused_imports)]
pub use status::{current_tier, status_progress, StatusProgress, StatusTier, DEFAULT_TIERS};
