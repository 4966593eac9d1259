pub mod accelerator;
pub mod award_search;
pub mod buy_miles;
pub mod settings;
pub mod status;
pub mod ticket;
pub mod upgrade;

pub use accelerator::AcceleratorPage;
pub use award_search::AwardSearchPage;
pub use buy_miles::BuyMilesPage;
pub use settings::SettingsPage;
pub use status::StatusPage;
pub use ticket::TicketPage;
pub use upgrade::UpgradePage;
