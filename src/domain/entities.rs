use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-mile dollar valuation range used by every evaluator.
///
/// Passed explicitly into each call; the engine never reads ambient state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MileValuation {
    /// Dollars per mile, conservative end.
    pub low: f64,
    /// Dollars per mile, optimistic end.
    pub high: f64,
}

impl Default for MileValuation {
    fn default() -> Self {
        // 1.2 - 1.5 cents per mile, the commonly cited range for United miles.
        Self {
            low: 0.012,
            high: 0.015,
        }
    }
}

impl MileValuation {
    /// Invariant check used at the settings form boundary: both ends positive,
    /// low not above high.
    pub fn is_valid(&self) -> bool {
        self.low > 0.0 && self.high > 0.0 && self.low <= self.high
    }
}

/// Dollar value of a quantity of miles at the low and high valuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorthRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    PremiumPlus,
    Business,
}

impl CabinClass {
    pub const ALL: [CabinClass; 3] = [
        CabinClass::Economy,
        CabinClass::PremiumPlus,
        CabinClass::Business,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumPlus => "Premium Plus",
            CabinClass::Business => "Business (Polaris)",
        }
    }

    pub fn from_label(label: &str) -> Option<CabinClass> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// An Award Accelerator offer: bonus miles, optionally with PQP, for a price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcceleratorOffer {
    pub miles: f64,
    pub pqp: f64,
    pub cost: f64,
}

/// A cabin upgrade offer with the three ways to end up in the better seat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpgradeOffer {
    /// Miles required for the miles + cash path.
    pub miles: f64,
    /// Cash co-pay for the miles + cash path.
    pub cash_copay: f64,
    /// Price of the cash-only upgrade.
    pub cash_only_upgrade: f64,
    /// Price of simply buying the higher cabin outright.
    pub full_fare_cost: f64,
    pub flight_hours: f64,
    pub from_cabin: CabinClass,
    pub to_cabin: CabinClass,
}

/// The three ways to pay for a ticket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TicketOptions {
    pub miles_only_price: f64,
    pub cash_price: f64,
    pub mixed_miles: f64,
    pub mixed_cash: f64,
}

/// A buy-miles promotion (base miles plus promotional bonus).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MilesPurchaseOffer {
    pub miles: f64,
    pub bonus_miles: f64,
    pub cash_price: f64,
}

impl MilesPurchaseOffer {
    pub fn total_miles(&self) -> f64 {
        self.miles + self.bonus_miles
    }
}

/// Elite-status accrual snapshot plus an optional PQP purchase under
/// consideration. PQF cannot be bought.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EliteProgress {
    pub current_pqp: f64,
    pub current_pqf: f64,
    pub purchase_pqp: f64,
}

/// Qualitative outcome of an evaluation, decoupled from display styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Decent,
    NotWorthIt,
    Informational,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent Deal",
            Verdict::Decent => "Decent Value",
            Verdict::NotWorthIt => "Not Worth It",
            Verdict::Informational => "Info",
        }
    }
}

/// Recoverable evaluation errors. The UI surfaces the message and keeps the
/// session alive; nothing in the engine panics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("cash price required for comparison")]
    MissingComparisonInput,
}
