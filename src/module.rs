use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::exists::exists;
use crate::is_empty::is_empty;

/// Arguments for the existence query, keyed as the host passes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExistsArgs {
    pub path: PathBuf,
    #[serde(default)]
    pub follow: bool,
}

/// Arguments for the emptiness query, keyed as the host passes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsEmptyArgs {
    pub path: PathBuf,
    #[serde(default = "default_ignore_missing")]
    pub ignore_missing: bool,
}

fn default_ignore_missing() -> bool {
    true
}

/// One parsed query, ready to run.
#[derive(Debug, Clone)]
pub enum Request {
    Exists(ExistsArgs),
    IsEmpty(IsEmptyArgs),
}

impl Request {
    pub fn path(&self) -> &Path {
        match self {
            Request::Exists(args) => &args.path,
            Request::IsEmpty(args) => &args.path,
        }
    }
}

/// The result document handed back to the host: one JSON object per
/// invocation. Successes report `changed` (always false, the queries never
/// mutate) plus the boolean outcome; failures carry `failed` and `msg`.
#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Response {
    fn success() -> Self {
        Response {
            changed: Some(false),
            exists: None,
            is_empty: None,
            failed: None,
            msg: None,
        }
    }

    pub fn exists(outcome: bool) -> Self {
        Response {
            exists: Some(outcome),
            ..Self::success()
        }
    }

    pub fn is_empty(outcome: bool) -> Self {
        Response {
            is_empty: Some(outcome),
            ..Self::success()
        }
    }

    pub fn failure(err: &Error) -> Self {
        Response {
            changed: None,
            exists: None,
            is_empty: None,
            failed: Some(true),
            msg: Some(err.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failed.unwrap_or(false)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Read module arguments from the JSON document the host hands over.
pub fn args_from_file<T>(path: &Path) -> crate::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Execute one query and fold the outcome into the host envelope.
pub fn run(request: &Request) -> Response {
    if request.path().as_os_str().is_empty() {
        return Response::failure(&Error::Args("path is required".to_string()));
    }

    match request {
        Request::Exists(args) => {
            log::info!("exists query for {}", args.path.display());
            match exists(&args.path, args.follow) {
                Ok(outcome) => Response::exists(outcome),
                Err(err) => Response::failure(&err),
            }
        }
        Request::IsEmpty(args) => {
            log::info!("is_empty query for {}", args.path.display());
            match is_empty(&args.path, args.ignore_missing) {
                Ok(outcome) => Response::is_empty(outcome),
                Err(err) => Response::failure(&err),
            }
        }
    }
}
