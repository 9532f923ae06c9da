use crate::api::ApiError;

/// Lifecycle of a server-provided value. Anything but `Loaded` renders as a
/// placeholder, so a failed count never shows up as zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fetch<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Fetch::Loaded(value),
            Err(error) => Fetch::Failed(error.error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Fetch<U> {
        match self {
            Fetch::Idle => Fetch::Idle,
            Fetch::Loading => Fetch::Loading,
            Fetch::Loaded(value) => Fetch::Loaded(f(value)),
            Fetch::Failed(message) => Fetch::Failed(message.clone()),
        }
    }

    /// Text for a single number, `-` until the value has arrived.
    pub fn display_with(&self, f: impl FnOnce(&T) -> String) -> String {
        self.loaded().map(f).unwrap_or_else(|| "-".to_string())
    }
}

/// `Resource::get()` yields `None` while the request is pending.
impl<T> From<Option<Result<T, ApiError>>> for Fetch<T> {
    fn from(value: Option<Result<T, ApiError>>) -> Self {
        match value {
            None => Fetch::Loading,
            Some(result) => Fetch::from_result(result),
        }
    }
}
