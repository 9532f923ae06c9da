pub mod daily_summary;
pub mod history;
pub mod roster;
pub mod summary_table;

pub use daily_summary::DailySummary;
pub use history::HistoryPanel;
pub use roster::RosterPanel;
pub use summary_table::SummaryTable;
