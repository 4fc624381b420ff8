use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use web_sys::AbortController;

use super::error::{classify_failure, classify_response, SubmissionError};
use super::request::SubmissionRequest;

/// POSTs the snapshot to `endpoint` and waits for the first of: a response,
/// a transport failure, or the deadline. On the deadline the fetch is aborted.
pub async fn send(
    endpoint: &str,
    request: &SubmissionRequest,
    timeout_ms: u32,
) -> Result<(), SubmissionError> {
    let controller = AbortController::new()
        .map_err(|e| SubmissionError::Network(format!("AbortController unavailable: {:?}", e)))?;

    let timed_out = Rc::new(Cell::new(false));
    // Dropped at the end of this function, which cancels it if still pending.
    let _deadline = {
        let controller = controller.clone();
        let timed_out = timed_out.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    info!("Submitting contact form to {}", endpoint);
    let signal = controller.signal();
    let response = match Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .abort_signal(Some(&signal))
        .body(request.encode())
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            let err = classify_failure(timed_out.get(), e.to_string());
            match &err {
                SubmissionError::Timeout => {
                    warn!("Contact form submission aborted after {} ms", timeout_ms)
                }
                _ => error!("{}", err),
            }
            return Err(err);
        }
    };

    let status = response.status();
    let ok = response.ok();
    let body = if ok {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };

    let outcome = classify_response(status, ok, &body);
    match &outcome {
        Ok(()) => info!("Contact form accepted with status {}", status),
        Err(e) => warn!("{}", e),
    }
    outcome
}
