use crate::{
    api::{ApiClient, ApiError, Employee},
    pages::employees::{
        repository,
        utils::{filter_employees, paginate, EmployeeFormState, Page},
    },
    state::{
        fetch::Fetch,
        notifications::{use_notifications, Notifications},
    },
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub roster: RwSignal<Fetch<Vec<Employee>>>,
    pub search: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub form: EmployeeFormState,
    pub form_open: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub saving: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub deleting: RwSignal<bool>,
    api: StoredValue<ApiClient>,
    notifications: Notifications,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let vm = Self {
            roster: create_rw_signal(Fetch::Idle),
            search: create_rw_signal(String::new()),
            page: create_rw_signal(1),
            form: EmployeeFormState::new(),
            form_open: create_rw_signal(false),
            form_error: create_rw_signal(None),
            saving: create_rw_signal(false),
            pending_delete: create_rw_signal(None),
            deleting: create_rw_signal(false),
            api: store_value(api),
            notifications: use_notifications(),
        };

        create_effect(move |_| vm.load_roster());

        vm
    }

    fn client(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn visible_page(&self) -> Signal<Fetch<Page<Employee>>> {
        let roster = self.roster;
        let search = self.search;
        let page = self.page;
        Signal::derive(move || {
            let query = search.get();
            let page = page.get();
            roster.with(|roster| roster.map(|employees| paginate(&filter_employees(employees, &query), page)))
        })
    }

    /// Refetches the roster; the current list stays on screen until the
    /// response arrives.
    pub fn load_roster(&self) {
        let roster = self.roster;
        let notifications = self.notifications;
        let api = self.client();
        if roster.with_untracked(|r| r.loaded().is_none()) {
            roster.set(Fetch::Loading);
        }
        spawn_local(async move {
            let result = repository::fetch_employees(&api).await;
            if let Err(err) = &result {
                notifications.error(err.error.clone());
            }
            let _ = roster.try_set(Fetch::from_result(result));
        });
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(1);
    }

    pub fn open_form(&self) {
        self.form_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
    }

    /// Validates locally, then creates the employee. Backend rejections
    /// (duplicate code or email) land in `form_error` as sent.
    pub fn submit_form(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.form_error.set(Some(ApiError::validation(err.to_string())));
                return;
            }
        };
        self.form_error.set(None);
        self.saving.set(true);

        let vm = *self;
        let api = self.client();
        spawn_local(async move {
            let result = repository::add_employee(&api, request).await;
            let _ = vm.saving.try_set(false);
            match result {
                Ok(employee) => {
                    vm.notifications
                        .success(format!("{} added", employee.full_name));
                    vm.form.reset();
                    vm.form_open.set(false);
                    vm.load_roster();
                }
                Err(err) => {
                    vm.notifications.error(err.error.clone());
                    let _ = vm.form_error.try_set(Some(err));
                }
            }
        });
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.deleting.get_untracked() {
            return;
        }
        let Some(employee) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        self.deleting.set(true);

        let vm = *self;
        let api = self.client();
        spawn_local(async move {
            let result = repository::remove_employee(&api, employee.id).await;
            let _ = vm.deleting.try_set(false);
            match result {
                Ok(()) => {
                    vm.notifications
                        .success(format!("{} deleted", employee.full_name));
                    vm.load_roster();
                }
                Err(err) => vm.notifications.error(err.error),
            }
        });
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::notifications::NoticeKind;
    use crate::test_support::ssr::with_local_runtime_async;
    use serde_json::{json, Value};

    fn employee_json(id: i64, code: &str, name: &str) -> Value {
        json!({
            "id": id,
            "employee_id": code,
            "full_name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "department": "Engineering",
            "designation": "Staff",
            "status": "Active"
        })
    }

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    fn roster_ids(vm: &EmployeesViewModel) -> Option<Vec<i64>> {
        vm.roster
            .with_untracked(|r| r.loaded().map(|list| list.iter().map(|e| e.id).collect()))
    }

    fn fill_form(vm: &EmployeesViewModel) {
        vm.form.employee_id_signal().set("EMP-003".into());
        vm.form.full_name_signal().set("Dana".into());
        vm.form.email_signal().set("dana@example.com".into());
    }

    #[test]
    fn successful_add_resets_form_and_refetches() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(200)
                    .json_body(json!([employee_json(1, "EMP-001", "Alice")]));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = EmployeesViewModel::new();
            vm.load_roster();
            settle().await;
            assert_eq!(roster_ids(&vm), Some(vec![1]));

            server.mock(|when, then| {
                when.method(POST).path("/api/employees/");
                then.status(201).json_body(employee_json(3, "EMP-003", "Dana"));
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(200).json_body(json!([
                    employee_json(1, "EMP-001", "Alice"),
                    employee_json(3, "EMP-003", "Dana")
                ]));
            });

            vm.open_form();
            fill_form(&vm);
            vm.submit_form();
            assert!(vm.saving.get_untracked());
            settle().await;

            assert!(!vm.saving.get_untracked());
            assert!(!vm.form_open.get_untracked());
            assert!(vm.form_error.get_untracked().is_none());
            assert!(vm.form.full_name_signal().get_untracked().is_empty());
            assert_eq!(roster_ids(&vm), Some(vec![1, 3]));

            let posted = server
                .received()
                .into_iter()
                .find(|request| request.method == POST)
                .and_then(|request| request.body)
                .unwrap();
            assert_eq!(posted["employee_id"], "EMP-003");
            assert_eq!(posted["department"], "Engineering");

            runtime.dispose();
        });
    }

    #[test]
    fn duplicate_code_is_shown_verbatim_and_form_stays_open() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/employees/");
                then.status(400).json_body(json!({
                    "error": "Employee ID already registered",
                    "code": "BAD_REQUEST"
                }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let notifications = Notifications::new();
            provide_context(notifications);

            let vm = EmployeesViewModel::new();
            vm.open_form();
            fill_form(&vm);
            vm.submit_form();
            settle().await;

            let error = vm.form_error.get_untracked().unwrap();
            assert_eq!(error.error, "Employee ID already registered");
            assert!(vm.form_open.get_untracked());
            assert!(!vm.saving.get_untracked());
            assert_eq!(vm.form.employee_id_signal().get_untracked(), "EMP-003");
            assert!(notifications.queue().with_untracked(|q| q
                .items()
                .iter()
                .any(|notice| notice.kind == NoticeKind::Error
                    && notice.message == "Employee ID already registered")));

            runtime.dispose();
        });
    }

    #[test]
    fn confirmed_delete_removes_employee_from_roster() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(200).json_body(json!([
                    employee_json(1, "EMP-001", "Alice"),
                    employee_json(2, "EMP-002", "Bob")
                ]));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = EmployeesViewModel::new();
            vm.load_roster();
            settle().await;
            assert_eq!(roster_ids(&vm), Some(vec![1, 2]));

            server.mock(|when, then| {
                when.method(DELETE).path("/api/employees/2");
                then.status(204);
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/employees/");
                then.status(200)
                    .json_body(json!([employee_json(1, "EMP-001", "Alice")]));
            });

            let bob = vm
                .roster
                .with_untracked(|r| r.loaded().and_then(|list| list.get(1).cloned()))
                .unwrap();
            vm.request_delete(bob);
            vm.confirm_delete();
            assert!(vm.pending_delete.get_untracked().is_none());
            settle().await;

            assert!(!vm.deleting.get_untracked());
            assert_eq!(roster_ids(&vm), Some(vec![1]));
            assert!(server
                .received()
                .iter()
                .any(|request| request.method == DELETE && request.path == "/api/employees/2"));

            runtime.dispose();
        });
    }

    #[test]
    fn cancelled_delete_sends_nothing() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            provide_context(ApiClient::new_with_base_url(server.url("/api")));

            let vm = EmployeesViewModel::new();
            vm.request_delete(crate::test_support::helpers::roster()[0].clone());
            vm.cancel_delete();
            vm.confirm_delete();
            settle().await;

            assert!(server
                .received()
                .iter()
                .all(|request| request.method != DELETE));

            runtime.dispose();
        });
    }
}
