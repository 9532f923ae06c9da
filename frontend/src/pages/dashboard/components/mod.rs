pub mod department_load;
pub mod recent_hires;
pub mod report;
pub mod stat_cards;

pub use department_load::DepartmentLoad;
pub use recent_hires::RecentHires;
pub use report::ReportCard;
pub use stat_cards::StatCards;
