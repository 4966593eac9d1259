//! Elite-status tier table and progress calculation.

use super::entities::EliteProgress;

/// One elite tier with its qualification thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusTier {
    pub name: &'static str,
    pub pqp: f64,
    pub pqf: f64,
}

/// Premier program tiers in ascending threshold order. The order matters:
/// qualification scans forward and keeps the last tier whose thresholds are
/// both met.
pub const DEFAULT_TIERS: [StatusTier; 5] = [
    StatusTier {
        name: "General Member",
        pqp: 0.0,
        pqf: 0.0,
    },
    StatusTier {
        name: "Premier Silver",
        pqp: 4_000.0,
        pqf: 25.0,
    },
    StatusTier {
        name: "Premier Gold",
        pqp: 8_000.0,
        pqf: 50.0,
    },
    StatusTier {
        name: "Premier Platinum",
        pqp: 12_000.0,
        pqf: 75.0,
    },
    StatusTier {
        name: "Premier 1K",
        pqp: 18_000.0,
        pqf: 100.0,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct StatusProgress {
    pub current_tier: StatusTier,
    /// `None` once the top tier is reached.
    pub next_tier: Option<StatusTier>,
    pub pqp_needed: f64,
    pub pqf_needed: f64,
    pub progress_pct: f64,
    /// Whether the PQP purchase under consideration closes the gap. PQF is
    /// not purchasable, so a PQF shortfall can never be bought away.
    pub will_purchase_help: bool,
    pub pqp_after_purchase: f64,
}

impl StatusProgress {
    pub fn at_max_level(&self) -> bool {
        self.next_tier.is_none()
    }

    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Current Status", self.current_tier.name.to_string()),
            (
                "Next Status",
                self.next_tier
                    .map(|tier| tier.name.to_string())
                    .unwrap_or_else(|| "Max Level Reached".to_string()),
            ),
            ("PQP Still Needed", format!("{:.0}", self.pqp_needed)),
            ("PQF Still Needed", format!("{:.0}", self.pqf_needed)),
            ("Progress", format!("{:.1}%", self.progress_pct)),
            (
                "PQP After Purchase",
                format!("{:.0}", self.pqp_after_purchase),
            ),
        ]
    }
}

/// Highest tier whose PQP and PQF thresholds are both met. An empty table
/// degrades to the base tier instead of panicking.
pub fn current_tier(tiers: &[StatusTier], pqp: f64, pqf: f64) -> StatusTier {
    let mut current = tiers.first().copied().unwrap_or(DEFAULT_TIERS[0]);
    for tier in tiers {
        if pqp >= tier.pqp && pqf >= tier.pqf {
            current = *tier;
        }
    }
    current
}

pub fn status_progress(tiers: &[StatusTier], progress: &EliteProgress) -> StatusProgress {
    let current = current_tier(tiers, progress.current_pqp, progress.current_pqf);
    let current_index = tiers
        .iter()
        .position(|tier| tier.name == current.name)
        .unwrap_or(0);
    let next = tiers.get(current_index + 1).copied();
    let pqp_after_purchase = progress.current_pqp + progress.purchase_pqp;

    let Some(next) = next else {
        // Top of the table: terminal state, nothing left to buy toward.
        return StatusProgress {
            current_tier: current,
            next_tier: None,
            pqp_needed: 0.0,
            pqf_needed: 0.0,
            progress_pct: 100.0,
            will_purchase_help: false,
            pqp_after_purchase,
        };
    };

    let progress_pct = if next.pqp > 0.0 {
        (progress.current_pqp / next.pqp * 100.0).min(100.0)
    } else {
        100.0
    };

    StatusProgress {
        current_tier: current,
        next_tier: Some(next),
        pqp_needed: (next.pqp - progress.current_pqp).max(0.0),
        pqf_needed: (next.pqf - progress.current_pqf).max(0.0),
        progress_pct,
        will_purchase_help: pqp_after_purchase >= next.pqp && progress.current_pqf >= next.pqf,
        pqp_after_purchase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(pqp: f64, pqf: f64, purchase: f64) -> EliteProgress {
        EliteProgress {
            current_pqp: pqp,
            current_pqf: pqf,
            purchase_pqp: purchase,
        }
    }

    #[test]
    fn below_silver_is_general_member_regardless_of_pqf() {
        assert_eq!(current_tier(&DEFAULT_TIERS, 3_500.0, 20.0).name, "General Member");
        assert_eq!(current_tier(&DEFAULT_TIERS, 3_500.0, 500.0).name, "General Member");
    }

    #[test]
    fn exact_thresholds_qualify() {
        assert_eq!(current_tier(&DEFAULT_TIERS, 4_000.0, 25.0).name, "Premier Silver");
        assert_eq!(current_tier(&DEFAULT_TIERS, 18_000.0, 100.0).name, "Premier 1K");
    }

    #[test]
    fn both_thresholds_must_be_met() {
        // Plenty of PQP but too few flights caps the tier.
        assert_eq!(current_tier(&DEFAULT_TIERS, 9_500.0, 30.0).name, "Premier Silver");
    }

    #[test]
    fn progress_toward_next_tier() {
        let result = status_progress(&DEFAULT_TIERS, &progress(3_500.0, 20.0, 800.0));
        assert_eq!(result.current_tier.name, "General Member");
        assert_eq!(result.next_tier.unwrap().name, "Premier Silver");
        assert_eq!(result.pqp_needed, 500.0);
        assert_eq!(result.pqf_needed, 5.0);
        assert_eq!(result.progress_pct, 87.5);
        // 4300 PQP after purchase, but PQF is still short: buying cannot help.
        assert!(!result.will_purchase_help);
    }

    #[test]
    fn purchase_helps_only_when_pqf_already_qualifies() {
        let result = status_progress(&DEFAULT_TIERS, &progress(3_500.0, 25.0, 800.0));
        assert!(result.will_purchase_help);

        let result = status_progress(&DEFAULT_TIERS, &progress(3_500.0, 25.0, 200.0));
        assert!(!result.will_purchase_help);
    }

    #[test]
    fn empty_tier_table_degrades_to_the_base_tier() {
        assert_eq!(current_tier(&[], 5_000.0, 30.0).name, "General Member");

        let result = status_progress(&[], &progress(5_000.0, 30.0, 1_000.0));
        assert_eq!(result.current_tier.name, "General Member");
        assert!(result.at_max_level());
    }

    #[test]
    fn top_tier_is_terminal() {
        let result = status_progress(&DEFAULT_TIERS, &progress(20_000.0, 120.0, 5_000.0));
        assert!(result.at_max_level());
        assert_eq!(result.progress_pct, 100.0);
        assert_eq!(result.pqp_needed, 0.0);
        assert!(!result.will_purchase_help);
    }

    #[test]
    fn progress_percentage_is_capped() {
        // Gold-level PQP with Silver-level PQF: progress toward Gold caps at 100.
        let result = status_progress(&DEFAULT_TIERS, &progress(9_500.0, 30.0, 0.0));
        assert_eq!(result.next_tier.unwrap().name, "Premier Gold");
        assert_eq!(result.progress_pct, 100.0);
    }
}
