use crate::wire::{DirectoryListResponse, OrgUserPageResponse, UserPageResponse};
use crate::{ClientError, ClientResult, DirectoryClient, SubCallStatus};

use ua_config::{ApiConfig, RetryConfig};
use ua_core::{Directory, Identity, Operation, OperationOutcome, normalize_email};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode, Url};
use serde_json::{Value, json};
use tokio::time::sleep;

/// Users requested per directory page
pub const PAGE_SIZE: u32 = 100;

const DEFAULT_PAGE_PAUSE_MS: u64 = 100;

/// Characters of an unexpected response body kept in the error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP implementation of [`DirectoryClient`] for the organization admin API
pub struct HttpDirectoryClient {
    pub base_url: String,
    pub org_id: String,
    max_attempts: u32,
    retry_delay: Duration,
    page_pause: Duration,
    client: ReqwestClient,
}

impl HttpDirectoryClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api` - Base URL, organization, bearer credential and timeout
    /// * `retry` - Attempt count and base delay for low-level retries
    pub fn new(api: &ApiConfig, retry: &RetryConfig) -> ClientResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api.api_key))
            .map_err(|_| ClientError::authentication("API key contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(api.timeout())
            .build()
            .map_err(ClientError::setup)?;

        Ok(Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            org_id: api.org_id.clone(),
            max_attempts: retry.max_attempts,
            retry_delay: retry.delay(),
            page_pause: Duration::from_millis(DEFAULT_PAGE_PAUSE_MS),
            client,
        })
    }

    /// Override the pause between user pages
    pub fn with_page_pause(mut self, page_pause: Duration) -> Self {
        self.page_pause = page_pause;
        self
    }

    fn directories_url(&self) -> String {
        format!("{}/admin/v2/orgs/{}/directories", self.base_url, self.org_id)
    }

    pub(crate) fn users_url(&self, directory_id: &str, cursor: Option<&str>) -> ClientResult<Url> {
        let raw = format!("{}/{}/users", self.directories_url(), directory_id);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::url(raw.clone(), e))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &PAGE_SIZE.to_string());
            if let Some(cursor) = cursor {
                query.append_pair("cursor", cursor);
            }
        }

        Ok(url)
    }

    pub(crate) fn lifecycle_url(&self, account_id: &str, operation: Operation) -> String {
        format!(
            "{}/users/{}/manage/lifecycle/{}",
            self.base_url,
            account_id,
            operation.lifecycle_endpoint()
        )
    }

    pub(crate) fn access_url(&self, account_id: &str, operation: Operation) -> String {
        format!(
            "{}/admin/v1/orgs/{}/directory/users/{}/{}",
            self.base_url,
            self.org_id,
            account_id,
            operation.access_endpoint()
        )
    }

    /// Send a request, retrying network failures and HTTP 429.
    ///
    /// Network failures wait the base delay; a 429 waits `delay * attempt`.
    /// A 429 on the last attempt is handed back to the caller as a response.
    async fn execute(&self, method: Method, url: &str, body: Option<&Value>) -> ClientResult<Response> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            let mut req = self.client.request(method.clone(), url);
            if let Some(body) = body {
                req = req.json(body);
            }

            match req.send().await {
                Ok(response) => {
                    let status = response.status();
                    debug!("{} {} -> {}", method, url, status.as_u16());

                    if status == StatusCode::TOO_MANY_REQUESTS && attempt < self.max_attempts {
                        let backoff = self.retry_delay * attempt;
                        warn!(
                            "{} {} rate limited (attempt {}/{}), retrying in {:?}",
                            method, url, attempt, self.max_attempts, backoff
                        );
                        sleep(backoff).await;
                        continue;
                    }

                    return Ok(response);
                }
                Err(e) => {
                    warn!(
                        "{} {} failed (attempt {}/{}): {}",
                        method, url, attempt, self.max_attempts, e
                    );
                    last_error = Some(e);
                    if attempt < self.max_attempts {
                        sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(ClientError::network(self.max_attempts, last_error))
    }

    async fn fetch_user_page(
        &self,
        directory_id: &str,
        cursor: Option<&str>,
    ) -> ClientResult<UserPageResponse> {
        let url = self.users_url(directory_id, cursor)?;
        let response = self.execute(Method::GET, url.as_str(), None).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::service(
                status.as_u16(),
                format!("Failed to get users of directory {directory_id}"),
            ));
        }

        response.json().await.map_err(ClientError::from_json)
    }

    /// Map a non-2xx answer of an admin endpoint to the credential problem
    /// it most likely means.
    async fn access_failure(&self, status: u16, response: Response) -> ClientError {
        match status {
            401 => ClientError::authentication("Invalid API key"),
            403 => ClientError::authentication(
                "Insufficient permissions. Organization Admin rights required",
            ),
            404 => ClientError::authentication(format!("Organization {} not found", self.org_id)),
            _ => {
                let text = response.text().await.unwrap_or_default();
                let excerpt: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
                ClientError::service(status, excerpt)
            }
        }
    }

    /// Read one user through the organization user-management endpoint.
    ///
    /// Returns the number of users on the page (0 or 1).
    pub async fn check_user_management(&self) -> ClientResult<usize> {
        let raw = format!("{}/admin/v1/orgs/{}/users", self.base_url, self.org_id);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::url(raw.clone(), e))?;
        url.query_pairs_mut().append_pair("limit", "1");

        let response = self.execute(Method::GET, url.as_str(), None).await?;
        let status = response.status().as_u16();
        if !(200..=299).contains(&status) {
            return Err(self.access_failure(status, response).await);
        }

        let body: OrgUserPageResponse = response.json().await.map_err(ClientError::from_json)?;
        Ok(body.data.len())
    }

    async fn sub_call(&self, url: &str, body: Option<&Value>) -> ClientResult<SubCallStatus> {
        let response = self.execute(Method::POST, url, body).await?;
        Ok(SubCallStatus::from_status(response.status().as_u16()))
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn verify_credentials(&self) -> ClientResult<()> {
        let response = self
            .execute(Method::GET, &self.directories_url(), None)
            .await?;

        match response.status().as_u16() {
            200..=299 => Ok(()),
            status => Err(self.access_failure(status, response).await),
        }
    }

    async fn list_directories(&self) -> ClientResult<Vec<Directory>> {
        let response = self
            .execute(Method::GET, &self.directories_url(), None)
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::service(
                status.as_u16(),
                "Failed to get directories",
            ));
        }

        let body: DirectoryListResponse = response.json().await.map_err(ClientError::from_json)?;
        Ok(body.data.into_iter().map(Directory::from).collect())
    }

    async fn list_all_users(&self) -> ClientResult<Vec<Identity>> {
        let directories = self.list_directories().await?;
        if directories.is_empty() {
            return Err(ClientError::no_directories());
        }

        let mut users = Vec::new();

        for directory in &directories {
            let directory_id = directory.directory_id.as_str();
            let mut cursor: Option<String> = None;
            let mut page = 1;

            loop {
                let response = self.fetch_user_page(directory_id, cursor.as_deref()).await?;
                let next = response.next_cursor().map(str::to_string);

                debug!(
                    "Directory {}: page {}, got {} users",
                    directory_id,
                    page,
                    response.data.len()
                );

                users.extend(
                    response
                        .data
                        .into_iter()
                        .map(|user| user.into_identity(directory_id)),
                );

                match next {
                    Some(next) => {
                        cursor = Some(next);
                        page += 1;
                        sleep(self.page_pause).await;
                    }
                    None => break,
                }
            }
        }

        info!(
            "Fetched {} users from {} directories",
            users.len(),
            directories.len()
        );
        Ok(users)
    }

    async fn find_by_email(&self, email: &str) -> ClientResult<Option<Identity>> {
        let wanted = normalize_email(email);
        let directories = self.list_directories().await?;

        for directory in &directories {
            let directory_id = directory.directory_id.as_str();
            let mut cursor: Option<String> = None;

            loop {
                let response = match self.fetch_user_page(directory_id, cursor.as_deref()).await {
                    Ok(response) => response,
                    Err(e) if e.is_network() => return Err(e),
                    Err(e) => {
                        // Without the page we have no cursor, so the rest of
                        // this directory is skipped.
                        warn!(
                            "Skipping unreadable page of directory {} while searching {}: {}",
                            directory_id, email, e
                        );
                        break;
                    }
                };
                let next = response.next_cursor().map(str::to_string);

                if let Some(user) = response
                    .data
                    .into_iter()
                    .find(|user| normalize_email(&user.email) == wanted)
                {
                    return Ok(Some(user.into_identity(directory_id)));
                }

                match next {
                    Some(next) => cursor = Some(next),
                    None => break,
                }
            }
        }

        Ok(None)
    }

    async fn apply_operation(
        &self,
        account_id: &str,
        operation: Operation,
        message: &str,
    ) -> ClientResult<OperationOutcome> {
        let mut messages: Vec<String> = Vec::with_capacity(2);

        let lifecycle_body = json!({ "message": message });
        let lifecycle_url = self.lifecycle_url(account_id, operation);
        let lifecycle_action = match self.sub_call(&lifecycle_url, Some(&lifecycle_body)).await {
            Ok(SubCallStatus::Success) => {
                let action = operation.lifecycle_action();
                messages.push(format!("Lifecycle {action}"));
                Some(action)
            }
            Ok(SubCallStatus::Failed(reason)) => {
                messages.push(format!("Lifecycle: {reason}"));
                None
            }
            Ok(SubCallStatus::RateLimited) => {
                messages.push("Lifecycle: rate limited".to_string());
                return Err(ClientError::rate_limited(messages.join(" | ")));
            }
            Err(e) => {
                messages.push(format!("Lifecycle error: {e}"));
                None
            }
        };

        let access_url = self.access_url(account_id, operation);
        let access_action = match self.sub_call(&access_url, None).await {
            Ok(SubCallStatus::Success) => {
                let action = operation.access_action();
                messages.push(format!("Access {action}"));
                Some(action)
            }
            Ok(SubCallStatus::Failed(reason)) => {
                messages.push(format!("Access: {reason}"));
                None
            }
            Ok(SubCallStatus::RateLimited) => {
                messages.push("Access: rate limited".to_string());
                return Err(ClientError::rate_limited(messages.join(" | ")));
            }
            Err(e) => {
                messages.push(format!("Access error: {e}"));
                None
            }
        };

        Ok(OperationOutcome {
            lifecycle_action,
            access_action,
            message: messages.join(" | "),
        })
    }
}
