//! Internal error helpers for mapping HTTP/reqwest errors to [`CompletionError`].

use lexidian_types::CompletionError;

/// Map a non-success HTTP status to a [`CompletionError`].
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> CompletionError {
    CompletionError::Status {
        status: status.as_u16(),
        body: body.to_string(),
    }
}

/// Map a [`reqwest::Error`] to a [`CompletionError`].
///
/// Builder failures (e.g. an unparseable endpoint URL) mean the request was
/// never usable; everything else is a transport failure.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> CompletionError {
    if err.is_builder() {
        CompletionError::InvalidRequest(err.to_string())
    } else {
        CompletionError::transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_keeps_code_and_body() {
        let err = map_http_status(reqwest::StatusCode::UNAUTHORIZED, "invalid api key");
        assert!(matches!(
            err,
            CompletionError::Status { status: 401, ref body } if body == "invalid api key"
        ));
    }

    #[test]
    fn status_500_keeps_code() {
        let err = map_http_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(matches!(err, CompletionError::Status { status: 500, .. }));
    }

    #[test]
    fn invalid_url_maps_to_invalid_request() {
        let err = reqwest::Client::new()
            .post("not a url")
            .build()
            .expect_err("invalid url should fail to build");
        assert!(matches!(
            map_reqwest_error(err),
            CompletionError::InvalidRequest(_)
        ));
    }
}
