//! Reflection-based CORS headers for the JSON callback responses.

use http::{
    HeaderMap, HeaderValue,
    header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
        ORIGIN,
    },
};

/// Mirror the caller's `Origin` and requested headers onto the response.
///
/// Any origin is allowed, with credentials. Headers absent from the request stay absent
/// from the response; an empty `Origin` is echoed back empty.
pub(crate) fn apply(request: &HeaderMap, response: &mut HeaderMap) {
    response.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    if let Some(origin) = request.get(ORIGIN) {
        response.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    }
    response.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, GET, OPTIONS, DELETE, PUT, PATCH"),
    );
    if let Some(requested) = request.get(ACCESS_CONTROL_REQUEST_HEADERS) {
        response.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_origin_verbatim() {
        let mut request = HeaderMap::new();
        request.insert(ORIGIN, HeaderValue::from_static("https://foo.com"));
        let mut response = HeaderMap::new();
        apply(&request, &mut response);

        assert_eq!(
            response.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://foo.com"
        );
        assert_eq!(
            response.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert_eq!(
            response.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "POST, GET, OPTIONS, DELETE, PUT, PATCH"
        );
    }

    #[test]
    fn absent_origin_stays_absent() {
        let mut response = HeaderMap::new();
        apply(&HeaderMap::new(), &mut response);

        assert!(response.get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        assert!(response.get(ACCESS_CONTROL_ALLOW_HEADERS).is_none());
    }

    #[test]
    fn empty_origin_is_echoed_empty() {
        let mut request = HeaderMap::new();
        request.insert(ORIGIN, HeaderValue::from_static(""));
        let mut response = HeaderMap::new();
        apply(&request, &mut response);

        assert_eq!(response.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "");
    }

    #[test]
    fn requested_headers_are_echoed() {
        let mut request = HeaderMap::new();
        request.insert(
            ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type, x-requested-with"),
        );
        let mut response = HeaderMap::new();
        apply(&request, &mut response);

        assert_eq!(
            response.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "content-type, x-requested-with"
        );
    }
}
