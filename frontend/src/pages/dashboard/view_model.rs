use crate::{
    api::{ApiClient, ApiError, DashboardStats},
    pages::dashboard::{repository, utils::REPORT_FILENAME},
    state::{fetch::Fetch, notifications::use_notifications},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats_resource: Resource<u32, Result<DashboardStats, ApiError>>,
    pub reload: RwSignal<u32>,
    pub report_action: Action<(), Result<(), ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let notifications = use_notifications();

        let reload = create_rw_signal(0u32);
        let api_clone = api.clone();
        let stats_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_stats(&api).await }
            },
        );

        create_effect(move |_| {
            if let Some(Err(err)) = stats_resource.get() {
                notifications.error(err.error);
            }
        });

        let api_clone = api.clone();
        let report_action = create_action(move |_: &()| {
            let api = api_clone.clone();
            async move {
                let csv = repository::build_report(&api).await?;
                crate::utils::download::trigger_csv_download(REPORT_FILENAME, &csv)
                    .map_err(ApiError::unknown)
            }
        });

        create_effect(move |_| {
            if let Some(result) = report_action.value().get() {
                match result {
                    Ok(()) => notifications.success("Report downloaded"),
                    Err(err) => notifications.error(err.error),
                }
            }
        });

        Self {
            stats_resource,
            reload,
            report_action,
        }
    }

    pub fn stats(&self) -> Signal<Fetch<DashboardStats>> {
        let resource = self.stats_resource;
        Signal::derive(move || Fetch::from(resource.get()))
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn generate_report(&self) {
        if self.report_action.pending().get_untracked() {
            return;
        }
        self.report_action.dispatch(());
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
