//! REST API helpers for the board page.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning an error, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` so a failed fetch or status update
//! becomes an error banner on the board instead of a crash. Callers mutate
//! board state only after a call succeeds.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use kanban::{BackendStatus, ConfigListResponse, FlowListResponse};

use crate::config::ClientConfig;

#[cfg(any(test, feature = "csr"))]
fn flows_url(config: &ClientConfig, config_id: Option<i64>) -> String {
    kanban::flows_path(&config.api_base, &config.flow_query(config_id))
}

#[cfg(any(test, feature = "csr"))]
fn configs_url(config: &ClientConfig) -> String {
    kanban::configs_path(&config.api_base, Some(config.config_status))
}

#[cfg(any(test, feature = "csr"))]
fn status_update_url(config: &ClientConfig, flow_id: i64) -> String {
    kanban::flow_path(&config.api_base, flow_id)
}

#[cfg(any(test, feature = "csr"))]
fn upload_url(config: &ClientConfig, config_id: i64) -> String {
    kanban::upload_path(&config.api_base, config_id)
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Fetch the first page of flows, optionally for one config.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not decode.
pub async fn list_flows(config: &ClientConfig, config_id: Option<i64>) -> Result<FlowListResponse, String> {
    #[cfg(feature = "csr")]
    {
        let url = flows_url(config, config_id);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("flows", resp.status()));
        }
        resp.json::<FlowListResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, config_id);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch configs used for the config filter and card subtitles.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn list_configs(config: &ClientConfig) -> Result<ConfigListResponse, String> {
    #[cfg(feature = "csr")]
    {
        let url = configs_url(config);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("configs", resp.status()));
        }
        resp.json::<ConfigListResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err("not available outside the browser".to_owned())
    }
}

/// Submit a new backend status for a flow via `PATCH {base}/flows/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn update_flow_status(config: &ClientConfig, flow_id: i64, status: BackendStatus) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = status_update_url(config, flow_id);
        let body = kanban::StatusUpdate { main_status: status };
        let resp = gloo_net::http::Request::patch(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("status update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, flow_id, status);
        Err("not available outside the browser".to_owned())
    }
}

/// Upload files as new flows under `config_id`. Returns how many flows the
/// backend created.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request fails,
/// or the server rejects the upload.
#[cfg(feature = "csr")]
pub async fn upload_flows(config: &ClientConfig, config_id: i64, files: &web_sys::FileList) -> Result<usize, String> {
    let form = web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    for index in 0..files.length() {
        let Some(file) = files.get(index) else {
            continue;
        };
        form.append_with_blob_and_filename(kanban::UPLOAD_FIELD, &file, &file.name())
            .map_err(|_| format!("could not attach {}", file.name()))?;
    }

    let url = upload_url(config, config_id);
    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("upload", resp.status()));
    }
    let created = resp.json::<Vec<serde_json::Value>>().await.map_err(|e| e.to_string())?;
    Ok(created.len())
}
