use serde::Deserialize;

/// Why a contact submission did not go through.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// The request never completed (offline, CORS, DNS...).
    Network(String),
    /// Aborted after the configured deadline.
    Timeout,
    /// The server answered with a non-ok status.
    Rejected { status: u16, message: Option<String> },
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::Network(msg) => write!(f, "Network error: {}", msg),
            SubmissionError::Timeout => write!(f, "Request timed out"),
            SubmissionError::Rejected { status, message: Some(msg) } => {
                write!(f, "Rejected with status {}: {}", status, msg)
            }
            SubmissionError::Rejected { status, message: None } => {
                write!(f, "Rejected with status {}", status)
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Maps a finished HTTP exchange onto the submission outcome.
///
/// Any ok status counts as success regardless of the body. For failures the
/// body is only consulted for an optional `error` string, which is kept
/// verbatim; anything unparseable is treated as "no message".
pub fn classify_response(status: u16, ok: bool, body: &str) -> Result<(), SubmissionError> {
    if ok {
        return Ok(());
    }

    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|resp| resp.error);

    Err(SubmissionError::Rejected { status, message })
}

/// A fetch that failed before any response. The abort fired by our own
/// deadline surfaces as an ordinary fetch error, so the flag decides.
pub fn classify_failure(deadline_passed: bool, detail: String) -> SubmissionError {
    if deadline_passed {
        SubmissionError::Timeout
    } else {
        SubmissionError::Network(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_is_success_even_with_error_body() {
        assert_eq!(classify_response(200, true, r#"{"ok":true}"#), Ok(()));
        assert_eq!(classify_response(204, true, ""), Ok(()));
        assert_eq!(classify_response(201, true, r#"{"error":"ignored"}"#), Ok(()));
    }

    #[test]
    fn rejection_keeps_server_message_verbatim() {
        let err = classify_response(422, false, r#"{"error":"Email invalid"}"#).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Rejected {
                status: 422,
                message: Some("Email invalid".to_string()),
            }
        );
        assert_eq!(err.to_string(), "Rejected with status 422: Email invalid");
    }

    #[test]
    fn rejection_without_usable_body_has_no_message() {
        for body in ["", "<html>502 Bad Gateway</html>", r#"{"detail":"nope"}"#, r#"{"error":null}"#] {
            assert_eq!(
                classify_response(502, false, body),
                Err(SubmissionError::Rejected { status: 502, message: None })
            );
        }
    }

    #[test]
    fn aborted_fetch_after_deadline_is_a_timeout() {
        let err = classify_failure(true, "AbortError: The user aborted a request.".to_string());
        assert_eq!(err, SubmissionError::Timeout);
        assert_eq!(err.to_string(), "Request timed out");
    }

    #[test]
    fn fetch_error_before_deadline_is_a_network_error() {
        assert_eq!(
            classify_failure(false, "TypeError: Failed to fetch".to_string()),
            SubmissionError::Network("TypeError: Failed to fetch".to_string())
        );
    }
}
