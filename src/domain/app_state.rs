use serde::{Deserialize, Serialize};

use super::entities::MileValuation;

/// Process-wide UI state: the user-adjustable valuation range and the help
/// visibility toggle. Evaluators never read this directly; pages pass the
/// valuation into each call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AppState {
    pub valuation: MileValuation,
    pub show_help: bool,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedSettings) {
        self.valuation = persisted.valuation;
        self.show_help = persisted.show_help;
    }

    pub fn to_persisted(&self) -> PersistedSettings {
        PersistedSettings {
            valuation: self.valuation,
            show_help: self.show_help,
        }
    }
}

/// On-disk shape of the user settings.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(default)]
    pub valuation: MileValuation,
    #[serde(default)]
    pub show_help: bool,
}
