use std::collections::{BTreeMap, HashMap};

use crate::api::{AttendanceSummaryItem, Employee};

pub const REPORT_FILENAME: &str = "hrms_report.csv";
const REPORT_HEADER: [&str; 5] = [
    "Employee ID",
    "Name",
    "Department",
    "Present Days",
    "Attendance Rate",
];

/// Whole-number percentage of present employees; 0 for an empty roster.
pub fn attendance_rate(present: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (present as f64 / total as f64 * 100.0).round() as i64
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentBar {
    pub name: String,
    pub count: i64,
    pub percent: f64,
}

pub fn department_bars(distribution: &BTreeMap<String, i64>, total: i64) -> Vec<DepartmentBar> {
    let denominator = total.max(1) as f64;
    let mut bars: Vec<DepartmentBar> = distribution
        .iter()
        .map(|(name, count)| DepartmentBar {
            name: name.clone(),
            count: *count,
            percent: (*count as f64 / denominator * 100.0).clamp(0.0, 100.0),
        })
        .collect();
    bars.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    bars
}

fn summary_rate(item: &AttendanceSummaryItem) -> String {
    let absent = item.absent_days.unwrap_or(0);
    let recorded = item.present_days + absent;
    if recorded <= 0 {
        return "-".to_string();
    }
    format!("{}%", attendance_rate(item.present_days, recorded))
}

/// One row per employee in roster order, joined to the all-time summary by
/// business code.
pub fn build_report_csv(
    employees: &[Employee],
    summary: &[AttendanceSummaryItem],
) -> Result<String, csv::Error> {
    let by_code: HashMap<&str, &AttendanceSummaryItem> = summary
        .iter()
        .map(|item| (item.employee_id.as_str(), item))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_HEADER)?;
    for employee in employees {
        let item = by_code.get(employee.employee_id.as_str());
        let present = item.map(|item| item.present_days).unwrap_or(0);
        let rate = item
            .map(|item| summary_rate(item))
            .unwrap_or_else(|| "-".to_string());
        writer.write_record([
            employee.employee_id.as_str(),
            employee.full_name.as_str(),
            employee.department.as_str(),
            present.to_string().as_str(),
            rate.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
