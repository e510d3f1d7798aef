//! Command actions: argument checks, bounded execution and output records.

use serde::Serialize;
use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::actions::dto::{DeleteResponse, ListResponse, ResultResponse};
use crate::actions::shutdown::shutdown_signal;
use crate::application::services::{Shortener, ShortenerError};
use crate::domain::repositories::StoreError;
use crate::error::ActionError;
use crate::utils::json_output::write_json;

/// Largest `list` page unless configured otherwise.
pub const DEFAULT_LIST_MAX_LIMIT: i64 = 500;

/// Time budget for one whole action.
pub const DEFAULT_ACTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Produces a future that resolves when the running action must be abandoned.
pub type CancelSignal =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Entry points for the `add`, `get`, `list` and `delete` commands.
///
/// Each action writes exactly one JSON record to `out`, the result on success
/// or an [`ErrorResponse`](crate::error::ErrorResponse) on failure. Failures
/// are also returned so the caller can choose an exit status.
pub struct Actions<S: Shortener> {
    service: Arc<S>,
    max_limit: i64,
    timeout: Duration,
    cancel: CancelSignal,
}

impl<S: Shortener> Actions<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            max_limit: DEFAULT_LIST_MAX_LIMIT,
            timeout: DEFAULT_ACTION_TIMEOUT,
            cancel: Arc::new(|| Box::pin(shutdown_signal())),
        }
    }

    /// Sets the largest accepted `list` limit. Non-positive values keep the default.
    pub fn with_max_limit(mut self, max_limit: i64) -> Self {
        self.max_limit = if max_limit > 0 {
            max_limit
        } else {
            DEFAULT_LIST_MAX_LIMIT
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the SIGINT/SIGTERM listener that cancels a running action.
    pub fn with_cancel_signal<F, Fut>(mut self, signal: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel = Arc::new(move || Box::pin(signal()));
        self
    }

    /// Shortens `args[0]` and prints `{shortCode, rawUrl}`.
    pub async fn add<W>(&self, out: &mut W, args: &[String]) -> Result<(), ActionError>
    where
        W: Write + ?Sized,
    {
        let result = self
            .bounded("add", async {
                let raw_url = first_arg(args)?;
                let code = self
                    .service
                    .add(raw_url)
                    .await
                    .map_err(|e| self.classify("add", e, |e| e.to_string()))?;

                Ok::<_, ActionError>(ResultResponse {
                    short_code: code,
                    raw_url: raw_url.to_string(),
                })
            })
            .await;

        self.emit(out, "add", result)
    }

    /// Resolves `args[0]` and prints `{shortCode, rawUrl}`.
    pub async fn get<W>(&self, out: &mut W, args: &[String]) -> Result<(), ActionError>
    where
        W: Write + ?Sized,
    {
        let result = self
            .bounded("get", async {
                let code = first_arg(args)?;
                let raw_url = self.service.get(code).await.map_err(|e| {
                    self.classify("get", e, |e| {
                        format!("an error occurred while retrieving the short link: {e}")
                    })
                })?;

                Ok::<_, ActionError>(ResultResponse {
                    short_code: code.to_string(),
                    raw_url,
                })
            })
            .await;

        self.emit(out, "get", result)
    }

    /// Prints one page of mappings as `{items, count, limit, offset}`.
    ///
    /// `limit` must be within `1..=max_limit` and `offset` non-negative; both
    /// are checked before the service is called.
    pub async fn list<W>(&self, out: &mut W, limit: i64, offset: i64) -> Result<(), ActionError>
    where
        W: Write + ?Sized,
    {
        let result = self
            .bounded("list", async {
                self.check_page(limit, offset)?;

                let mappings = self.service.list(limit, offset).await.map_err(|e| {
                    self.classify("list", e, |e| list_failure_detail(e, limit, offset))
                })?;

                let items: Vec<ResultResponse> =
                    mappings.into_iter().map(ResultResponse::from).collect();

                Ok::<_, ActionError>(ListResponse {
                    count: items.len(),
                    items,
                    limit,
                    offset,
                })
            })
            .await;

        self.emit(out, "list", result)
    }

    /// Deletes the mapping for `args[0]` and prints `{deleted, shortCode}`.
    pub async fn delete<W>(&self, out: &mut W, args: &[String]) -> Result<(), ActionError>
    where
        W: Write + ?Sized,
    {
        let result = self
            .bounded("delete", async {
                let code = first_arg(args)?;
                let deleted = self.service.delete(code).await.map_err(|e| {
                    self.classify("delete", e, |e| {
                        format!("failed to delete short code {code:?}: {e}")
                    })
                })?;

                if !deleted {
                    return Err(ActionError::NotFound {
                        code: code.to_string(),
                    });
                }

                Ok::<_, ActionError>(DeleteResponse {
                    deleted,
                    short_code: code.to_string(),
                })
            })
            .await;

        self.emit(out, "delete", result)
    }

    fn check_page(&self, limit: i64, offset: i64) -> Result<(), ActionError> {
        if !(1..=self.max_limit).contains(&limit) {
            return Err(ActionError::InvalidLimit {
                limit,
                max: self.max_limit,
            });
        }

        if offset < 0 {
            return Err(ActionError::InvalidOffset { offset });
        }

        Ok(())
    }

    /// Runs `work` under the action deadline, racing the cancel signal.
    async fn bounded<T, F>(&self, action: &'static str, work: F) -> Result<T, ActionError>
    where
        F: Future<Output = Result<T, ActionError>>,
    {
        tokio::select! {
            result = tokio::time::timeout(self.timeout, work) => {
                result.unwrap_or_else(|_| Err(ActionError::Timeout {
                    action,
                    limit: self.timeout,
                }))
            }
            () = (self.cancel)() => Err(ActionError::Interrupted { action }),
        }
    }

    fn classify(
        &self,
        action: &'static str,
        err: ShortenerError,
        storage_detail: impl FnOnce(StoreError) -> String,
    ) -> ActionError {
        match err {
            ShortenerError::InvalidUrl(e) => ActionError::InvalidUrl {
                reason: e.to_string(),
            },
            ShortenerError::Generation(e) => ActionError::GenerationFailed {
                reason: e.to_string(),
            },
            ShortenerError::RetriesExhausted { attempts } => {
                ActionError::RetriesExhausted { attempts }
            }
            ShortenerError::EmptyCode => ActionError::EmptyCode { action },
            ShortenerError::NotFound(code) => ActionError::NotFound { code },
            ShortenerError::Store(StoreError::Timeout) => ActionError::Timeout {
                action,
                limit: self.timeout,
            },
            ShortenerError::Store(e) => ActionError::Storage {
                detail: storage_detail(e),
            },
        }
    }

    /// Writes the single output record for an action.
    fn emit<W, T>(
        &self,
        out: &mut W,
        action: &'static str,
        result: Result<T, ActionError>,
    ) -> Result<(), ActionError>
    where
        W: Write + ?Sized,
        T: Serialize,
    {
        match result {
            Ok(body) => write_json(out, &body).map_err(|e| {
                tracing::error!(action, error = %e, "failed to write result");
                ActionError::Output {
                    detail: e.to_string(),
                }
            }),
            Err(err) => {
                tracing::debug!(action, kind = err.kind(), error = %err, "action failed");
                if let Err(e) = write_json(out, &err.to_response()) {
                    tracing::error!(action, error = %e, "failed to write error record");
                }
                Err(err)
            }
        }
    }
}

fn first_arg(args: &[String]) -> Result<&str, ActionError> {
    args.first()
        .map(String::as_str)
        .ok_or(ActionError::InvalidArguments)
}

fn list_failure_detail(err: StoreError, limit: i64, offset: i64) -> String {
    match err {
        StoreError::Query(cause) => {
            format!("error executing list query (limit={limit}, offset={offset}): {cause}")
        }
        StoreError::Scan(cause) => {
            format!("error scanning rows (limit={limit}, offset={offset}): {cause}")
        }
        StoreError::Rows(cause) => {
            format!("row iteration error (limit={limit}, offset={offset}): {cause}")
        }
        other => format!("unknown list error (limit={limit}, offset={offset}): {other}"),
    }
}
