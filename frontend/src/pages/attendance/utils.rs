use crate::api::{AttendanceRecord, AttendanceStatus, AttendanceSummaryItem};

pub fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-status-error-bg text-status-error-text"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryTally {
    pub present: usize,
    pub absent: usize,
}

pub fn tally_history(records: &[AttendanceRecord]) -> HistoryTally {
    records
        .iter()
        .fold(HistoryTally::default(), |mut tally, record| {
            match record.status {
                AttendanceStatus::Present => tally.present += 1,
                AttendanceStatus::Absent => tally.absent += 1,
            }
            tally
        })
}

/// Most present days first; ties keep name order.
pub fn rank_summary(items: &[AttendanceSummaryItem]) -> Vec<AttendanceSummaryItem> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| {
        b.present_days
            .cmp(&a.present_days)
            .then_with(|| a.full_name.cmp(&b.full_name))
    });
    ranked
}

pub fn optional_count(value: Option<i64>) -> String {
    value
        .map(|count| count.to_string())
        .unwrap_or_else(|| "-".to_string())
}
