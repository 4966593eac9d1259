pub mod field;
pub mod help_callout;
pub mod kpi_card;
pub mod result_table;
pub mod toast;
pub mod verdict_badge;
