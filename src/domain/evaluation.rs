//! Deal evaluation lives here: pure functions over offer records.
//!
//! Every evaluator takes its inputs plus an explicit [`MileValuation`] and
//! returns a result record with the computed figures, a [`Verdict`], and the
//! formatted label/value lines the UI renders. Division by zero degrades to
//! `None` ("N/A") instead of failing; only negative money/miles and a missing
//! cash comparison are reported as errors.

use super::entities::{
    AcceleratorOffer, CabinClass, EvalError, MileValuation, MilesPurchaseOffer, TicketOptions,
    UpgradeOffer, Verdict, WorthRange,
};

/// Dollar value of `miles` at the low and high end of the valuation.
pub fn miles_value(miles: f64, valuation: &MileValuation) -> WorthRange {
    WorthRange {
        low: miles * valuation.low,
        high: miles * valuation.high,
    }
}

pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

fn format_range(range: &WorthRange) -> String {
    format!(
        "{} - {}",
        format_currency(range.low),
        format_currency(range.high)
    )
}

fn validate(miles: f64, cost: f64) -> Result<(), EvalError> {
    if cost < 0.0 {
        return Err(EvalError::InvalidInput("cost cannot be negative"));
    }
    if miles < 0.0 {
        return Err(EvalError::InvalidInput("miles cannot be negative"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Award Accelerator
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct AcceleratorEvaluation {
    pub worth: WorthRange,
    /// Dollars paid per mile; `None` when the offer carries no miles.
    pub cost_per_mile: Option<f64>,
    /// Effective dollars per PQP after crediting the miles at the high/low
    /// valuation. `None` when the offer carries no PQP.
    pub pqp_cost_low: Option<f64>,
    pub pqp_cost_high: Option<f64>,
    /// PQP earned per dollar spent, the secondary earn-rate insight.
    pub pqp_per_dollar: Option<f64>,
    /// Cents per mile paid (0 when no miles).
    pub cpm: f64,
    pub verdict: Verdict,
    pub summary: String,
    pub insight: Option<String>,
}

impl AcceleratorEvaluation {
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Miles Worth (Low)", format_currency(self.worth.low)),
            ("Miles Worth (High)", format_currency(self.worth.high)),
            (
                "Cost Per Mile",
                self.cost_per_mile
                    .map(|v| format!("{v:.3} cents", v = v * 100.0))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        ];
        if let Some(pqp_cost) = self.pqp_cost_low {
            lines.push(("PQP Cost per Dollar", format_currency(pqp_cost)));
        }
        lines
    }
}

pub fn evaluate_accelerator(
    offer: &AcceleratorOffer,
    valuation: &MileValuation,
) -> Result<AcceleratorEvaluation, EvalError> {
    validate(offer.miles, offer.cost)?;
    if offer.pqp < 0.0 {
        return Err(EvalError::InvalidInput("PQP cannot be negative"));
    }

    let worth = miles_value(offer.miles, valuation);
    let cost_per_mile = (offer.miles > 0.0).then(|| offer.cost / offer.miles);

    let (verdict, pqp_cost_low, pqp_cost_high) = if offer.pqp > 0.0 {
        // With PQP attached, credit the miles at their valuation and judge the
        // remainder as the price paid per PQP.
        let effective_low = offer.cost - worth.high;
        let effective_high = offer.cost - worth.low;
        let cost_low = effective_low / offer.pqp;
        let cost_high = effective_high / offer.pqp;
        let verdict = if cost_low < 1.30 {
            Verdict::Excellent
        } else if cost_low < 1.50 {
            Verdict::Decent
        } else {
            Verdict::NotWorthIt
        };
        (verdict, Some(cost_low), Some(cost_high))
    } else {
        let verdict = match cost_per_mile {
            Some(per_mile) if per_mile < 0.01 => Verdict::Excellent,
            Some(per_mile) if per_mile < valuation.low => Verdict::Decent,
            _ => Verdict::NotWorthIt,
        };
        (verdict, None, None)
    };

    let pqp_per_dollar = (offer.pqp > 0.0 && offer.cost > 0.0).then(|| offer.pqp / offer.cost);
    let insight = match pqp_per_dollar {
        Some(rate) if rate > 0.65 => Some(format!(
            "Excellent PQP earning rate ({rate:.2} PQP per dollar)."
        )),
        Some(rate) if rate > 0.5 => {
            Some(format!("Decent PQP earning rate ({rate:.2} PQP per dollar)."))
        }
        Some(rate) => Some(format!(
            "Below-average PQP earning rate ({rate:.2} PQP per dollar)."
        )),
        None if offer.miles > 0.0 && offer.cost > 0.0 => Some(
            "No PQP included; this offer only helps award travel, not elite status progress."
                .to_string(),
        ),
        None => None,
    };

    Ok(AcceleratorEvaluation {
        worth,
        cost_per_mile,
        pqp_cost_low,
        pqp_cost_high,
        pqp_per_dollar,
        cpm: cost_per_mile.map(|v| v * 100.0).unwrap_or(0.0),
        verdict,
        summary: verdict.label().to_string(),
        insight,
    })
}

// ---------------------------------------------------------------------------
// Upgrade Offer
// ---------------------------------------------------------------------------

/// Warning thresholds for the upgrade evaluator. The source revisions disagree
/// on the exact hour cutoffs, so they stay configurable instead of hard-coded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpgradeRules {
    /// Below this flight length, Economy -> Premium Plus draws a warning.
    pub comfort_hours: f64,
    /// Below this flight length, Premium Plus -> Business draws a warning.
    pub small_gain_hours: f64,
    /// Cash-only upgrade above this fraction of the full fare draws a warning.
    pub cash_close_ratio: f64,
}

impl Default for UpgradeRules {
    fn default() -> Self {
        Self {
            comfort_hours: 6.0,
            small_gain_hours: 5.0,
            cash_close_ratio: 0.8,
        }
    }
}

/// Perceived-value multiplier for a cabin pair. Same-class and downgrade
/// pairs are a no-op 1.0.
pub fn upgrade_multiplier(from: CabinClass, to: CabinClass) -> f64 {
    match (from, to) {
        (CabinClass::Economy, CabinClass::PremiumPlus) => 1.2,
        (CabinClass::Economy, CabinClass::Business) => 1.5,
        (CabinClass::PremiumPlus, CabinClass::Business) => 1.3,
        _ => 1.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeChoice {
    MilesAndCash,
    CashOnly,
    BuyFullFare,
}

impl UpgradeChoice {
    pub fn label(&self) -> &'static str {
        match self {
            UpgradeChoice::MilesAndCash => "Miles + Cash",
            UpgradeChoice::CashOnly => "Cash Upgrade",
            UpgradeChoice::BuyFullFare => "Buy Full Fare Ticket",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeEvaluation {
    pub worth: WorthRange,
    /// Total cost of the miles + cash path; `None` when no miles are in play.
    pub total_mixed: Option<WorthRange>,
    pub total_cash_only: f64,
    pub full_fare: f64,
    pub savings_mixed: Option<WorthRange>,
    pub savings_cash_only: f64,
    /// `None` for the same-cabin short-circuit.
    pub best_option: Option<UpgradeChoice>,
    pub comfort_factor: f64,
    pub verdict: Verdict,
    pub summary: String,
    pub warning: Option<String>,
}

impl UpgradeEvaluation {
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Miles Worth (Low)", format_currency(self.worth.low)),
            ("Miles Worth (High)", format_currency(self.worth.high)),
        ];
        if let Some(mixed) = &self.total_mixed {
            lines.push(("Total Upgrade Cost (Miles + Cash)", format_range(mixed)));
        }
        lines.push((
            "Total Upgrade Cost (Cash-Only)",
            format_currency(self.total_cash_only),
        ));
        lines.push((
            "Full-Fare Business/First Class Price",
            format_currency(self.full_fare),
        ));
        if let Some(savings) = &self.savings_mixed {
            lines.push(("Savings (Miles + Cash Upgrade)", format_range(savings)));
        }
        lines.push((
            "Savings (Cash-Only Upgrade)",
            format_currency(self.savings_cash_only),
        ));
        lines.push(("Comfort Factor", format!("{:.2}", self.comfort_factor)));
        lines
    }
}

pub fn evaluate_upgrade(
    offer: &UpgradeOffer,
    valuation: &MileValuation,
    rules: &UpgradeRules,
) -> Result<UpgradeEvaluation, EvalError> {
    validate(offer.miles, offer.cash_copay)?;
    if offer.cash_only_upgrade < 0.0 || offer.full_fare_cost < 0.0 {
        return Err(EvalError::InvalidInput("cost cannot be negative"));
    }

    // Terminal state: nothing to evaluate when both cabins match.
    if offer.from_cabin == offer.to_cabin {
        return Ok(UpgradeEvaluation {
            worth: WorthRange { low: 0.0, high: 0.0 },
            total_mixed: None,
            total_cash_only: 0.0,
            full_fare: 0.0,
            savings_mixed: None,
            savings_cash_only: 0.0,
            best_option: None,
            comfort_factor: 1.0,
            verdict: Verdict::Informational,
            summary: "No upgrade selected".to_string(),
            warning: Some(
                "You've selected the same cabin class for both options. No upgrade needed."
                    .to_string(),
            ),
        });
    }

    // Longer flights make the better seat worth more.
    let comfort_factor = 1.0 + 0.05 * offer.flight_hours;
    let multiplier = upgrade_multiplier(offer.from_cabin, offer.to_cabin);

    // Backfill missing inputs so a partially filled form still yields a
    // sensible comparison.
    let original_full_fare = offer.full_fare_cost;
    let full_fare = if offer.full_fare_cost == 0.0 {
        (offer.cash_only_upgrade * 1.5).max(1000.0)
    } else {
        offer.full_fare_cost
    };
    let (miles, cash_copay) = if offer.miles == 0.0 && offer.cash_copay == 0.0 {
        // Neither mixed component entered: assume the cash-only path.
        (0.0, offer.cash_only_upgrade)
    } else {
        (offer.miles, offer.cash_copay)
    };

    let worth = miles_value(miles, valuation);
    let total_mixed = (miles > 0.0).then(|| WorthRange {
        low: cash_copay + worth.low,
        high: cash_copay + worth.high,
    });
    let total_cash_only = if offer.cash_only_upgrade == 0.0 {
        full_fare
    } else {
        offer.cash_only_upgrade
    };

    let scale = comfort_factor * multiplier;
    let savings_mixed = total_mixed.map(|mixed| WorthRange {
        low: (full_fare - mixed.high) * scale,
        high: (full_fare - mixed.low) * scale,
    });
    let savings_cash_only = (full_fare - total_cash_only) * scale;

    let best_option = match savings_mixed {
        Some(savings) if savings.high > savings_cash_only && savings.high > 0.0 => {
            UpgradeChoice::MilesAndCash
        }
        _ if savings_cash_only > 0.0 => UpgradeChoice::CashOnly,
        _ => UpgradeChoice::BuyFullFare,
    };

    let warning = upgrade_warning(
        offer,
        rules,
        total_cash_only,
        full_fare,
        original_full_fare,
        miles,
        cash_copay,
        total_mixed.map(|m| m.high),
    );

    let verdict = if best_option == UpgradeChoice::BuyFullFare {
        Verdict::NotWorthIt
    } else {
        Verdict::Excellent
    };

    Ok(UpgradeEvaluation {
        worth,
        total_mixed,
        total_cash_only,
        full_fare,
        savings_mixed,
        savings_cash_only,
        best_option: Some(best_option),
        comfort_factor,
        verdict,
        summary: format!("Best option: {}", best_option.label()),
        warning,
    })
}

/// First matching warning wins; the order is part of the contract.
#[allow(clippy::too_many_arguments)]
fn upgrade_warning(
    offer: &UpgradeOffer,
    rules: &UpgradeRules,
    total_cash_only: f64,
    full_fare: f64,
    original_full_fare: f64,
    miles: f64,
    cash_copay: f64,
    mixed_high: Option<f64>,
) -> Option<String> {
    if offer.flight_hours < rules.comfort_hours
        && offer.from_cabin == CabinClass::Economy
        && offer.to_cabin == CabinClass::PremiumPlus
    {
        return Some("Short flight - upgrade may not be worth it.".to_string());
    }
    if total_cash_only > rules.cash_close_ratio * full_fare && original_full_fare > 0.0 {
        return Some("Upgrade cost is too close to full fare price.".to_string());
    }
    if miles > 0.0 && cash_copay > 0.0 {
        if let Some(high) = mixed_high {
            if high > full_fare {
                return Some(
                    "Miles + Cash upgrade is costing more than a full-fare business class ticket."
                        .to_string(),
                );
            }
        }
    }
    if offer.from_cabin == CabinClass::PremiumPlus
        && offer.to_cabin == CabinClass::Business
        && offer.flight_hours < rules.small_gain_hours
    {
        return Some(
            "Small difference in comfort for this flight length - not worth upgrading.".to_string(),
        );
    }
    None
}

// ---------------------------------------------------------------------------
// Ticket Purchase
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketChoice {
    Cash,
    Miles,
    Mixed,
}

impl TicketChoice {
    pub fn label(&self) -> &'static str {
        match self {
            TicketChoice::Cash => "Cash",
            TicketChoice::Miles => "Miles",
            TicketChoice::Mixed => "Miles + Cash",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TicketEvaluation {
    pub miles_worth: WorthRange,
    pub total_miles: WorthRange,
    /// `None` when the mixed option is unavailable (either component zero);
    /// an unavailable option is excluded from the comparison rather than
    /// defaulting to a zero cost.
    pub total_mixed: Option<WorthRange>,
    pub total_cash: f64,
    pub cpm_miles: Option<f64>,
    pub cpm_mixed: Option<f64>,
    pub best_option: TicketChoice,
    pub verdict: Verdict,
    pub summary: String,
    pub advice: Option<String>,
}

impl TicketEvaluation {
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Miles Cash Value (Low)", format_currency(self.miles_worth.low)),
            (
                "Miles Cash Value (High)",
                format_currency(self.miles_worth.high),
            ),
            ("Total Cost (Miles)", format_range(&self.total_miles)),
            (
                "Total Cost (Miles + Cash)",
                self.total_mixed
                    .as_ref()
                    .map(format_range)
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            ("Total Cost (Cash)", format_currency(self.total_cash)),
            (
                "CPM (Miles Option)",
                self.cpm_miles
                    .map(|v| format!("{v:.2} cents"))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            (
                "CPM (Miles + Cash)",
                self.cpm_mixed
                    .map(|v| format!("{v:.2} cents"))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        ];
        lines.push(("Best Option", self.best_option.label().to_string()));
        lines
    }
}

pub fn evaluate_ticket(
    options: &TicketOptions,
    valuation: &MileValuation,
) -> Result<TicketEvaluation, EvalError> {
    validate(options.miles_only_price, options.cash_price)?;
    validate(options.mixed_miles, options.mixed_cash)?;

    let no_redemption = options.miles_only_price == 0.0 && options.mixed_miles == 0.0;
    if !no_redemption && options.cash_price == 0.0 {
        return Err(EvalError::MissingComparisonInput);
    }

    let miles_worth = miles_value(options.miles_only_price, valuation);
    let mixed_worth = miles_value(options.mixed_miles, valuation);

    let total_miles = miles_worth;
    let mixed_available = options.mixed_miles > 0.0 && options.mixed_cash > 0.0;
    let total_mixed = mixed_available.then(|| WorthRange {
        low: mixed_worth.low + options.mixed_cash,
        high: mixed_worth.high + options.mixed_cash,
    });

    // Arg-min in enumeration order Cash, Miles, Mixed; a later option must be
    // strictly cheaper to win (tie-break is deliberately left as first-match,
    // see DESIGN.md). Zero-priced redemption options count as unavailable.
    let mut best = (TicketChoice::Cash, options.cash_price);
    if options.miles_only_price > 0.0 && total_miles.low < best.1 {
        best = (TicketChoice::Miles, total_miles.low);
    }
    if let Some(mixed) = &total_mixed {
        if mixed.low < best.1 {
            best = (TicketChoice::Mixed, mixed.low);
        }
    }
    let best_option = best.0;

    let cpm_miles = (options.miles_only_price > 0.0)
        .then(|| options.cash_price / options.miles_only_price * 100.0);
    let cpm_mixed = (options.mixed_miles > 0.0)
        .then(|| (options.cash_price - options.mixed_cash) / options.mixed_miles * 100.0);

    let advice = match best_option {
        TicketChoice::Miles if cpm_miles.is_some_and(|cpm| cpm > 1.5) => {
            Some("Great redemption value! Above average cents-per-mile.".to_string())
        }
        TicketChoice::Mixed if cpm_mixed.is_some_and(|cpm| cpm > 1.5) => {
            Some("Good value for your miles in the Miles + Cash option!".to_string())
        }
        _ => None,
    };

    Ok(TicketEvaluation {
        miles_worth,
        total_miles,
        total_mixed,
        total_cash: options.cash_price,
        cpm_miles,
        cpm_mixed,
        best_option,
        verdict: Verdict::Excellent,
        summary: format!("Best option: {}", best_option.label()),
        advice,
    })
}

// ---------------------------------------------------------------------------
// Buy Miles
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct MilesPurchaseEvaluation {
    pub worth: WorthRange,
    /// Cents paid per mile (including bonus miles); `None` for a zero-mile offer.
    pub cpm: Option<f64>,
    pub verdict: Verdict,
    pub summary: String,
    pub advice: Option<String>,
}

impl MilesPurchaseEvaluation {
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Miles Cash Value (Low)", format_currency(self.worth.low)),
            ("Miles Cash Value (High)", format_currency(self.worth.high)),
            (
                "Cost Per Mile",
                self.cpm
                    .map(|v| format!("{v:.2} cents"))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        ]
    }
}

pub fn evaluate_miles_purchase(
    offer: &MilesPurchaseOffer,
    valuation: &MileValuation,
) -> Result<MilesPurchaseEvaluation, EvalError> {
    validate(offer.miles, offer.cash_price)?;
    if offer.bonus_miles < 0.0 {
        return Err(EvalError::InvalidInput("miles cannot be negative"));
    }

    let total_miles = offer.total_miles();
    let worth = miles_value(total_miles, valuation);
    let cpm = (total_miles > 0.0).then(|| offer.cash_price / total_miles * 100.0);

    // Buying miles is the inverse of redeeming them: a LOW cents-per-mile is
    // the good outcome here.
    let verdict = match cpm {
        None => Verdict::Informational,
        Some(cpm) if cpm < 1.2 => Verdict::Excellent,
        Some(cpm) if cpm < valuation.high * 100.0 => Verdict::Decent,
        Some(_) => Verdict::NotWorthIt,
    };
    let advice = matches!(cpm, Some(cpm) if cpm < 1.2)
        .then(|| "Below the typical valuation range - a good time to buy.".to_string());

    Ok(MilesPurchaseEvaluation {
        worth,
        cpm,
        verdict,
        summary: verdict.label().to_string(),
        advice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valuation() -> MileValuation {
        MileValuation::default()
    }

    #[test]
    fn miles_value_orders_low_and_high() {
        for miles in [0.0, 1.0, 10_000.0, 1_000_000.0] {
            let worth = miles_value(miles, &valuation());
            assert!(worth.low <= worth.high, "low must not exceed high");
        }
        let worth = miles_value(10_000.0, &valuation());
        assert_eq!(worth.low, 120.0);
        assert_eq!(worth.high, 150.0);
    }

    #[test]
    fn accelerator_with_pqp_is_excellent_at_fifty_cents() {
        let offer = AcceleratorOffer {
            miles: 10_000.0,
            pqp: 100.0,
            cost: 200.0,
        };
        let result = evaluate_accelerator(&offer, &valuation()).unwrap();
        // (200 - 150) / 100 = $0.50 per PQP.
        assert_eq!(result.pqp_cost_low, Some(0.5));
        assert_eq!(result.verdict, Verdict::Excellent);
        assert_eq!(result.pqp_per_dollar, Some(0.5));
    }

    #[test]
    fn accelerator_zero_miles_reports_na_not_an_error() {
        let offer = AcceleratorOffer {
            miles: 0.0,
            pqp: 100.0,
            cost: 200.0,
        };
        let result = evaluate_accelerator(&offer, &valuation()).unwrap();
        assert_eq!(result.cost_per_mile, None);
        assert_eq!(result.worth.low, 0.0);
        let lines = result.lines();
        assert!(lines.contains(&("Cost Per Mile", "N/A".to_string())));
        assert!(lines.contains(&("Miles Worth (Low)", "$0.00".to_string())));
    }

    #[test]
    fn accelerator_negative_cost_is_invalid() {
        let offer = AcceleratorOffer {
            miles: 10_000.0,
            pqp: 100.0,
            cost: -5.0,
        };
        assert!(matches!(
            evaluate_accelerator(&offer, &valuation()),
            Err(EvalError::InvalidInput(_))
        ));
    }

    #[test]
    fn accelerator_without_pqp_judges_cost_per_mile() {
        let cheap = AcceleratorOffer {
            miles: 50_000.0,
            pqp: 0.0,
            cost: 400.0,
        };
        // 0.8 cents per mile.
        let result = evaluate_accelerator(&cheap, &valuation()).unwrap();
        assert_eq!(result.verdict, Verdict::Excellent);

        let pricey = AcceleratorOffer {
            miles: 10_000.0,
            pqp: 0.0,
            cost: 200.0,
        };
        // 2 cents per mile.
        let result = evaluate_accelerator(&pricey, &valuation()).unwrap();
        assert_eq!(result.verdict, Verdict::NotWorthIt);
    }

    fn upgrade_offer() -> UpgradeOffer {
        UpgradeOffer {
            miles: 20_000.0,
            cash_copay: 100.0,
            cash_only_upgrade: 500.0,
            full_fare_cost: 2_000.0,
            flight_hours: 10.0,
            from_cabin: CabinClass::Economy,
            to_cabin: CabinClass::Business,
        }
    }

    #[test]
    fn upgrade_same_cabin_short_circuits() {
        for cabin in CabinClass::ALL {
            let offer = UpgradeOffer {
                from_cabin: cabin,
                to_cabin: cabin,
                ..upgrade_offer()
            };
            let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
            assert_eq!(result.verdict, Verdict::Informational);
            assert_eq!(result.best_option, None);
            assert!(result.warning.unwrap().contains("same cabin class"));
        }
    }

    #[test]
    fn upgrade_long_haul_prefers_a_real_option() {
        let result =
            evaluate_upgrade(&upgrade_offer(), &valuation(), &UpgradeRules::default()).unwrap();
        assert_eq!(result.comfort_factor, 1.5);
        assert_ne!(result.best_option, Some(UpgradeChoice::BuyFullFare));
        assert_eq!(result.verdict, Verdict::Excellent);
        assert!(result.warning.is_none());
    }

    #[test]
    fn upgrade_short_premium_plus_flight_warns_first() {
        let offer = UpgradeOffer {
            flight_hours: 2.0,
            from_cabin: CabinClass::Economy,
            to_cabin: CabinClass::PremiumPlus,
            ..upgrade_offer()
        };
        let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
        assert!(result.warning.unwrap().contains("Short flight"));
    }

    #[test]
    fn upgrade_short_flight_warning_outranks_cash_close() {
        // Short Economy -> Premium Plus hop where the cash-only price is also
        // within 80% of full fare: two warning rules match, the earlier wins.
        let offer = UpgradeOffer {
            flight_hours: 2.0,
            from_cabin: CabinClass::Economy,
            to_cabin: CabinClass::PremiumPlus,
            cash_only_upgrade: 1_900.0,
            full_fare_cost: 2_000.0,
            ..upgrade_offer()
        };
        let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
        assert!(result.warning.unwrap().contains("Short flight"));
    }

    #[test]
    fn upgrade_cash_close_to_full_fare_warns() {
        let offer = UpgradeOffer {
            cash_only_upgrade: 900.0,
            full_fare_cost: 1_000.0,
            ..upgrade_offer()
        };
        let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
        assert!(result.warning.unwrap().contains("too close to full fare"));
    }

    #[test]
    fn upgrade_premium_to_business_short_flight_warns() {
        let offer = UpgradeOffer {
            miles: 5_000.0,
            cash_copay: 50.0,
            cash_only_upgrade: 300.0,
            full_fare_cost: 2_000.0,
            flight_hours: 3.0,
            from_cabin: CabinClass::PremiumPlus,
            to_cabin: CabinClass::Business,
        };
        let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
        assert!(result.warning.unwrap().contains("Small difference in comfort"));
    }

    #[test]
    fn upgrade_backfills_missing_full_fare() {
        let offer = UpgradeOffer {
            full_fare_cost: 0.0,
            cash_only_upgrade: 800.0,
            ..upgrade_offer()
        };
        let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
        assert_eq!(result.full_fare, 1_200.0);

        let offer = UpgradeOffer {
            full_fare_cost: 0.0,
            cash_only_upgrade: 100.0,
            ..upgrade_offer()
        };
        let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
        // Floor kicks in when 1.5x the cash upgrade is implausibly low.
        assert_eq!(result.full_fare, 1_000.0);
    }

    #[test]
    fn upgrade_assumes_cash_only_path_when_mixed_is_empty() {
        let offer = UpgradeOffer {
            miles: 0.0,
            cash_copay: 0.0,
            ..upgrade_offer()
        };
        let result = evaluate_upgrade(&offer, &valuation(), &UpgradeRules::default()).unwrap();
        assert_eq!(result.total_mixed, None);
        assert_eq!(result.best_option, Some(UpgradeChoice::CashOnly));
    }

    #[test]
    fn ticket_miles_beat_cash() {
        let options = TicketOptions {
            miles_only_price: 30_000.0,
            cash_price: 600.0,
            mixed_miles: 0.0,
            mixed_cash: 0.0,
        };
        let result = evaluate_ticket(&options, &valuation()).unwrap();
        // Mixed is excluded; 30000 * 0.012 = $360 beats $600 cash.
        assert_eq!(result.total_mixed, None);
        assert_eq!(result.best_option, TicketChoice::Miles);
        // Winning redemption at 2 cents per mile earns the advice note.
        assert_eq!(result.cpm_miles, Some(2.0));
        assert!(result.advice.is_some());
    }

    #[test]
    fn ticket_cash_beats_expensive_miles() {
        let options = TicketOptions {
            miles_only_price: 30_000.0,
            cash_price: 300.0,
            mixed_miles: 0.0,
            mixed_cash: 0.0,
        };
        let result = evaluate_ticket(&options, &valuation()).unwrap();
        assert_eq!(result.best_option, TicketChoice::Cash);
    }

    #[test]
    fn ticket_no_redemption_defaults_to_cash() {
        let options = TicketOptions {
            miles_only_price: 0.0,
            cash_price: 600.0,
            mixed_miles: 0.0,
            mixed_cash: 0.0,
        };
        let result = evaluate_ticket(&options, &valuation()).unwrap();
        assert_eq!(result.best_option, TicketChoice::Cash);
    }

    #[test]
    fn ticket_missing_cash_price_is_an_error() {
        let options = TicketOptions {
            miles_only_price: 30_000.0,
            cash_price: 0.0,
            mixed_miles: 15_000.0,
            mixed_cash: 200.0,
        };
        assert_eq!(
            evaluate_ticket(&options, &valuation()),
            Err(EvalError::MissingComparisonInput)
        );
    }

    #[test]
    fn ticket_mixed_option_can_win() {
        let options = TicketOptions {
            miles_only_price: 40_000.0,
            cash_price: 600.0,
            mixed_miles: 15_000.0,
            mixed_cash: 200.0,
        };
        // Mixed: 15000 * 0.012 + 200 = $380 vs $480 miles-only vs $600 cash.
        let result = evaluate_ticket(&options, &valuation()).unwrap();
        assert_eq!(result.best_option, TicketChoice::Mixed);
    }

    #[test]
    fn evaluators_are_idempotent() {
        let offer = AcceleratorOffer {
            miles: 10_000.0,
            pqp: 100.0,
            cost: 200.0,
        };
        let first = evaluate_accelerator(&offer, &valuation()).unwrap();
        let second = evaluate_accelerator(&offer, &valuation()).unwrap();
        assert_eq!(first, second);

        let upgrade = upgrade_offer();
        let first = evaluate_upgrade(&upgrade, &valuation(), &UpgradeRules::default()).unwrap();
        let second = evaluate_upgrade(&upgrade, &valuation(), &UpgradeRules::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn miles_purchase_cheap_miles_are_excellent() {
        let offer = MilesPurchaseOffer {
            miles: 10_000.0,
            bonus_miles: 10_000.0,
            cash_price: 200.0,
        };
        // 200 / 20000 = 1 cent per mile.
        let result = evaluate_miles_purchase(&offer, &valuation()).unwrap();
        assert_eq!(result.cpm, Some(1.0));
        assert_eq!(result.verdict, Verdict::Excellent);
        assert!(result.advice.is_some());
    }

    #[test]
    fn miles_purchase_expensive_miles_are_not_worth_it() {
        let offer = MilesPurchaseOffer {
            miles: 10_000.0,
            bonus_miles: 0.0,
            cash_price: 250.0,
        };
        // 2.5 cents per mile, above the high valuation.
        let result = evaluate_miles_purchase(&offer, &valuation()).unwrap();
        assert_eq!(result.verdict, Verdict::NotWorthIt);
        assert!(result.advice.is_none());
    }

    #[test]
    fn miles_purchase_zero_miles_is_informational() {
        let offer = MilesPurchaseOffer {
            miles: 0.0,
            bonus_miles: 0.0,
            cash_price: 100.0,
        };
        let result = evaluate_miles_purchase(&offer, &valuation()).unwrap();
        assert_eq!(result.cpm, None);
        assert_eq!(result.verdict, Verdict::Informational);
    }
}
