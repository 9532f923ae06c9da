use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use crate::{
    api::{
        ApiError, AttendanceRecord, AttendanceStatus, DailyStats, Employee, EmployeeId,
        MarkAttendanceRequest,
    },
    state::fetch::Fetch,
};

pub const REMARK_ON_TIME: &str = "On-time";
pub const REMARK_NO_INFORMATION: &str = "No information";

/// Issued when a history fetch starts; the response only lands if this is
/// still the latest ticket and the employee is still selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryTicket {
    pub employee_id: EmployeeId,
    pub token: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTicket {
    pub date: NaiveDate,
    pub token: u64,
}

/// View state of the attendance page. Owned by the page view model and
/// mutated only through these methods.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceState {
    selected_date: NaiveDate,
    search: String,
    roster: Fetch<Vec<Employee>>,
    marking: HashMap<EmployeeId, AttendanceStatus>,
    selected: Option<EmployeeId>,
    history: Fetch<Vec<AttendanceRecord>>,
    history_token: u64,
    daily: Fetch<DailyStats>,
    daily_token: u64,
}

impl AttendanceState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            search: String::new(),
            roster: Fetch::Idle,
            marking: HashMap::new(),
            selected: None,
            history: Fetch::Idle,
            history_token: 0,
            daily: Fetch::Idle,
            daily_token: 0,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn roster(&self) -> &Fetch<Vec<Employee>> {
        &self.roster
    }

    pub fn selected(&self) -> Option<EmployeeId> {
        self.selected
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        let id = self.selected?;
        self.roster.loaded()?.iter().find(|employee| employee.id == id)
    }

    pub fn history(&self) -> &Fetch<Vec<AttendanceRecord>> {
        &self.history
    }

    pub fn daily(&self) -> &Fetch<DailyStats> {
        &self.daily
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn filtered_roster(&self) -> Vec<Employee> {
        self.roster
            .loaded()
            .map(|roster| filter_roster(roster, &self.search))
            .unwrap_or_default()
    }

    pub fn begin_roster_load(&mut self) {
        self.roster = Fetch::Loading;
    }

    /// Stores the roster and drops a selection whose employee vanished.
    pub fn apply_roster(&mut self, result: Result<Vec<Employee>, ApiError>) {
        self.roster = Fetch::from_result(result);
        if let Some(roster) = self.roster.loaded().cloned() {
            self.reconcile_roster(&roster);
        }
    }

    pub fn reconcile_roster(&mut self, roster: &[Employee]) {
        if let Some(id) = self.selected {
            if !roster.iter().any(|employee| employee.id == id) {
                self.clear_selection();
            }
        }
    }

    /// Switches the active date. Selection and history are left alone.
    pub fn set_date(&mut self, date: NaiveDate) -> DailyTicket {
        self.selected_date = date;
        self.begin_daily()
    }

    pub fn begin_daily(&mut self) -> DailyTicket {
        self.daily_token = self.daily_token.wrapping_add(1);
        if self.daily.loaded().is_none() {
            self.daily = Fetch::Loading;
        }
        DailyTicket {
            date: self.selected_date,
            token: self.daily_token,
        }
    }

    pub fn apply_daily(&mut self, ticket: DailyTicket, result: Result<DailyStats, ApiError>) -> bool {
        if ticket.token != self.daily_token || ticket.date != self.selected_date {
            return false;
        }
        self.daily = Fetch::from_result(result);
        true
    }

    pub fn select(&mut self, employee_id: EmployeeId) -> HistoryTicket {
        self.selected = Some(employee_id);
        self.history = Fetch::Loading;
        self.next_history_ticket(employee_id)
    }

    /// Re-requests history for the current selection without blanking it.
    pub fn refresh_history(&mut self) -> Option<HistoryTicket> {
        let employee_id = self.selected?;
        Some(self.next_history_ticket(employee_id))
    }

    fn next_history_ticket(&mut self, employee_id: EmployeeId) -> HistoryTicket {
        self.history_token = self.history_token.wrapping_add(1);
        HistoryTicket {
            employee_id,
            token: self.history_token,
        }
    }

    pub fn apply_history(
        &mut self,
        ticket: HistoryTicket,
        result: Result<Vec<AttendanceRecord>, ApiError>,
    ) -> bool {
        if ticket.token != self.history_token || self.selected != Some(ticket.employee_id) {
            return false;
        }
        self.history = Fetch::from_result(result);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.history = Fetch::Idle;
        self.history_token = self.history_token.wrapping_add(1);
    }

    pub fn is_marking(&self, employee_id: EmployeeId) -> bool {
        self.marking.contains_key(&employee_id)
    }

    pub fn marking_status(&self, employee_id: EmployeeId) -> Option<AttendanceStatus> {
        self.marking.get(&employee_id).copied()
    }

    /// Claims the in-flight slot for `employee_id`. Returns `None` while a
    /// previous mark for the same employee is still outstanding.
    pub fn begin_mark(
        &mut self,
        employee_id: EmployeeId,
        status: AttendanceStatus,
        now: NaiveTime,
    ) -> Option<MarkAttendanceRequest> {
        if self.marking.contains_key(&employee_id) {
            return None;
        }
        self.marking.insert(employee_id, status);
        Some(build_mark_request(
            employee_id,
            status,
            self.selected_date,
            now,
        ))
    }

    pub fn finish_mark(&mut self, employee_id: EmployeeId) {
        self.marking.remove(&employee_id);
    }
}

pub fn filter_roster(roster: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return roster.to_vec();
    }
    roster
        .iter()
        .filter(|employee| {
            employee.full_name.to_lowercase().contains(&needle)
                || employee
                    .department
                    .as_str()
                    .to_lowercase()
                    .contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn build_mark_request(
    employee_id: EmployeeId,
    status: AttendanceStatus,
    date: NaiveDate,
    now: NaiveTime,
) -> MarkAttendanceRequest {
    let (check_in_time, remarks) = match status {
        AttendanceStatus::Present => (Some(now.format("%I:%M %p").to_string()), REMARK_ON_TIME),
        AttendanceStatus::Absent => (None, REMARK_NO_INFORMATION),
    };
    MarkAttendanceRequest {
        employee_id,
        date,
        status,
        check_in_time,
        remarks: Some(remarks.to_string()),
    }
}
