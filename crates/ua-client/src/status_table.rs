/// How one lifecycle or access call ended, judged by its status code alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubCallStatus {
    Success,
    Failed(String),
    RateLimited,
}

impl SubCallStatus {
    pub fn from_status(status: u16) -> Self {
        match status {
            204 => SubCallStatus::Success,
            400 => SubCallStatus::Failed("invalid request".to_string()),
            401 => SubCallStatus::Failed("authentication error".to_string()),
            403 => SubCallStatus::Failed("insufficient permissions".to_string()),
            404 => SubCallStatus::Failed("not found".to_string()),
            429 => SubCallStatus::RateLimited,
            other => SubCallStatus::Failed(format!("HTTP {other}")),
        }
    }
}
