mod bar;
mod classified_bar;
mod daily_summary;
mod limit_event;

pub use bar::DailyBar;
pub use classified_bar::ClassifiedBar;
pub use daily_summary::DailySummary;
pub use limit_event::LimitEvent;
