use crate::{
    api::{ApiClient, ApiError, AttendanceStatus, AttendanceSummaryItem, EmployeeId},
    pages::attendance::repository,
    state::{
        attendance::{AttendanceState, DailyTicket, HistoryTicket},
        fetch::Fetch,
        notifications::{use_notifications, Notifications},
    },
    utils::time::{now_local_time, today_local},
};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub state: RwSignal<AttendanceState>,
    pub summary_resource: Resource<u32, Result<Vec<AttendanceSummaryItem>, ApiError>>,
    pub summary_reload: RwSignal<u32>,
    api: StoredValue<ApiClient>,
    notifications: Notifications,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        Self::with_date(today_local())
    }

    pub fn with_date(date: NaiveDate) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let notifications = use_notifications();

        let summary_reload = create_rw_signal(0u32);
        let api_clone = api.clone();
        let summary_resource = create_resource(
            move || summary_reload.get(),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_summary(&api).await }
            },
        );

        create_effect(move |_| {
            if let Some(Err(err)) = summary_resource.get() {
                notifications.error(err.error);
            }
        });

        let vm = Self {
            state: create_rw_signal(AttendanceState::new(date)),
            summary_resource,
            summary_reload,
            api: store_value(api),
            notifications,
        };

        // initial loads happen once the page is mounted
        create_effect(move |_| {
            vm.load_roster();
            vm.load_daily();
        });

        vm
    }

    pub fn read_state(&self) -> Signal<AttendanceState> {
        self.state.into()
    }

    pub fn summary(&self) -> Signal<Fetch<Vec<AttendanceSummaryItem>>> {
        let resource = self.summary_resource;
        Signal::derive(move || Fetch::from(resource.get()))
    }

    fn client(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn load_roster(&self) {
        let state = self.state;
        let notifications = self.notifications;
        let api = self.client();
        state.update(|s| s.begin_roster_load());
        spawn_local(async move {
            let result = repository::fetch_roster(&api).await;
            if let Err(err) = &result {
                notifications.error(err.error.clone());
            }
            let _ = state.try_update(|s| s.apply_roster(result));
        });
    }

    pub fn load_daily(&self) {
        if let Some(ticket) = self.state.try_update(|s| s.begin_daily()) {
            self.fetch_daily(ticket);
        }
    }

    fn fetch_daily(&self, ticket: DailyTicket) {
        let state = self.state;
        let notifications = self.notifications;
        let api = self.client();
        spawn_local(async move {
            let result = repository::fetch_daily_stats(&api, ticket.date).await;
            let error = result.as_ref().err().map(|err| err.error.clone());
            let applied = state
                .try_update(|s| s.apply_daily(ticket, result))
                .unwrap_or(false);
            if let (true, Some(message)) = (applied, error) {
                notifications.error(message);
            }
        });
    }

    /// Refetches the daily aggregate; selection and history stay as they are.
    pub fn change_date(&self, date: NaiveDate) {
        if self.state.with_untracked(|s| s.selected_date() == date) {
            return;
        }
        if let Some(ticket) = self.state.try_update(|s| s.set_date(date)) {
            self.fetch_daily(ticket);
        }
    }

    pub fn set_search(&self, search: String) {
        self.state.update(|s| s.set_search(search));
    }

    pub fn select(&self, employee_id: EmployeeId) {
        if let Some(ticket) = self.state.try_update(|s| s.select(employee_id)) {
            self.load_history(ticket);
        }
    }

    pub fn clear_selection(&self) {
        self.state.update(|s| s.clear_selection());
    }

    fn load_history(&self, ticket: HistoryTicket) {
        let state = self.state;
        let notifications = self.notifications;
        let api = self.client();
        spawn_local(async move {
            let result = repository::fetch_history(&api, ticket.employee_id).await;
            let error = result.as_ref().err().map(|err| err.error.clone());
            let applied = state
                .try_update(|s| s.apply_history(ticket, result))
                .unwrap_or(false);
            if let (true, Some(message)) = (applied, error) {
                notifications.error(message);
            }
        });
    }

    pub fn refresh_summary(&self) {
        self.summary_reload.update(|value| *value = value.wrapping_add(1));
    }

    /// Ignored while a mark for the same employee is still in flight.
    pub fn mark(&self, employee_id: EmployeeId, status: AttendanceStatus) {
        let Some(request) = self
            .state
            .try_update(|s| s.begin_mark(employee_id, status, now_local_time()))
            .flatten()
        else {
            log::debug!("mark for employee {} already in flight", employee_id);
            return;
        };
        let name = self.state.with_untracked(|s| {
            s.roster()
                .loaded()
                .and_then(|roster| roster.iter().find(|e| e.id == employee_id))
                .map(|e| e.full_name.clone())
                .unwrap_or_else(|| format!("Employee {}", employee_id))
        });

        let vm = *self;
        let api = self.client();
        spawn_local(async move {
            let result = repository::submit_mark(&api, request).await;
            let _ = vm.state.try_update(|s| s.finish_mark(employee_id));
            match result {
                Ok(record) => {
                    vm.notifications
                        .success(format!("{} marked {}", name, record.status.as_str()));
                    vm.load_daily();
                    if let Some(ticket) = vm
                        .state
                        .try_update(|s| {
                            (s.selected() == Some(employee_id))
                                .then(|| s.refresh_history())
                                .flatten()
                        })
                        .flatten()
                    {
                        vm.load_history(ticket);
                    }
                    vm.refresh_summary();
                }
                Err(err) => vm.notifications.error(err.error),
            }
        });
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{test_support::mock::*, DailyStats};
    use crate::test_support::ssr::with_local_runtime_async;
    use serde_json::json;

    fn employees_json() -> serde_json::Value {
        json!([{
            "id": 1,
            "employee_id": "EMP-001",
            "full_name": "Alice",
            "email": "alice@example.com",
            "department": "Engineering",
            "designation": "Staff",
            "status": "Active"
        }])
    }

    fn record_json(status: &str) -> serde_json::Value {
        json!({
            "id": 1,
            "employee_id": 1,
            "date": "2024-01-10",
            "status": status,
            "check_in_time": null,
            "remarks": null
        })
    }

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn mark_present_then_absent_updates_daily_stats() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            leptos_reactive::suppress_resource_load(true);
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(200).json_body(employees_json());
            });
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(200).json_body(record_json("Present"));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/today-stats");
                then.status(200)
                    .json_body(json!({ "present": 1, "absent": 0, "total": 1 }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = AttendanceViewModel::with_date(day());
            vm.load_roster();
            settle().await;
            assert_eq!(
                vm.state.with_untracked(|s| s.filtered_roster().len()),
                1
            );

            vm.mark(1, AttendanceStatus::Present);
            assert!(vm.state.with_untracked(|s| s.is_marking(1)));
            // second trigger while in flight is dropped
            vm.mark(1, AttendanceStatus::Absent);
            settle().await;

            assert!(!vm.state.with_untracked(|s| s.is_marking(1)));
            assert_eq!(
                vm.state.with_untracked(|s| s.daily().loaded().copied()),
                Some(DailyStats {
                    present: 1,
                    absent: 0,
                    total: 1
                })
            );
            let posts: Vec<_> = server
                .received()
                .into_iter()
                .filter(|request| request.method == POST)
                .collect();
            assert_eq!(posts.len(), 1);
            assert_eq!(
                posts[0].body.as_ref().and_then(|b| b.get("date")).cloned(),
                Some(json!("2024-01-10"))
            );

            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(200).json_body(record_json("Absent"));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/today-stats");
                then.status(200)
                    .json_body(json!({ "present": 0, "absent": 1, "total": 1 }));
            });
            vm.mark(1, AttendanceStatus::Absent);
            settle().await;
            assert_eq!(
                vm.state.with_untracked(|s| s.daily().loaded().copied()),
                Some(DailyStats {
                    present: 0,
                    absent: 1,
                    total: 1
                })
            );

            leptos_reactive::suppress_resource_load(false);
            runtime.dispose();
        });
    }

    #[test]
    fn failed_mark_clears_flag_and_notifies() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            leptos_reactive::suppress_resource_load(true);
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(404)
                    .json_body(json!({ "error": "Employee not found", "code": "NOT_FOUND" }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let notifications = Notifications::new();
            provide_context(notifications);

            let vm = AttendanceViewModel::with_date(day());
            vm.mark(7, AttendanceStatus::Present);
            settle().await;

            assert!(!vm.state.with_untracked(|s| s.is_marking(7)));
            let queue = notifications.queue().get_untracked();
            assert!(queue
                .items()
                .iter()
                .any(|notice| notice.message == "Employee not found"));
            assert!(vm.state.with_untracked(|s| s.daily().loaded().is_none()));

            leptos_reactive::suppress_resource_load(false);
            runtime.dispose();
        });
    }

    #[test]
    fn selecting_loads_history_for_latest_employee() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            leptos_reactive::suppress_resource_load(true);
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/employee/1");
                then.status(200).json_body(json!([record_json("Present")]));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/attendance/employee/2");
                then.status(200).json_body(json!([]));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = AttendanceViewModel::with_date(day());
            vm.select(1);
            vm.select(2);
            settle().await;

            vm.state.with_untracked(|s| {
                assert_eq!(s.selected(), Some(2));
                assert_eq!(s.history().loaded().map(Vec::len), Some(0));
            });

            leptos_reactive::suppress_resource_load(false);
            runtime.dispose();
        });
    }
}
