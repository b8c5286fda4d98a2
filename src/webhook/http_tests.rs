//! Tests for HTTP request/response types and error values.

use super::{
    HttpError, HttpRequest, HttpResponse, MultipartForm, PartContent, RequestBody,
    ValidationError, WebhookError,
};

const ENDPOINT: &str = "https://chat.example.com/api/webhooks/1/token";

fn response(status: u16, body: &[u8]) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.to_vec(),
    )
}

mod http_request {
    use super::*;

    #[test]
    fn new_keeps_url_string_untouched() {
        let req = HttpRequest::new(http::Method::PUT, "not a url at all");

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, "not a url at all");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_and_delete_set_method() {
        assert_eq!(HttpRequest::post(ENDPOINT).method, http::Method::POST);
        assert_eq!(HttpRequest::delete(ENDPOINT).method, http::Method::DELETE);
    }

    #[test]
    fn with_body_sets_byte_body() {
        let req = HttpRequest::post(ENDPOINT).with_body(b"{}".to_vec());

        assert_eq!(req.body, Some(RequestBody::Bytes(b"{}".to_vec())));
        assert_eq!(req.body.as_ref().and_then(RequestBody::as_bytes), Some(&b"{}"[..]));
    }

    #[test]
    fn with_multipart_replaces_byte_body() {
        let form = MultipartForm::new().text("username", "bot");
        let req = HttpRequest::post(ENDPOINT)
            .with_body(b"ignored".to_vec())
            .with_multipart(form.clone());

        let body = req.body.unwrap();
        assert!(body.as_bytes().is_none());
        assert_eq!(body.as_multipart(), Some(&form));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let req = HttpRequest::post(ENDPOINT)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod multipart_form {
    use super::*;

    #[test]
    fn parts_keep_insertion_order() {
        let form = MultipartForm::new()
            .text("b", "2")
            .file("file", "a.txt", b"abc".to_vec())
            .text("a", "1");

        let names: Vec<&str> = form.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "file", "a"]);
    }

    #[test]
    fn part_lookup_returns_first_match() {
        let form = MultipartForm::new().text("x", "first").text("x", "second");

        assert_eq!(
            form.part("x").map(|p| &p.content),
            Some(&PartContent::Text("first".to_string()))
        );
        assert!(form.part("missing").is_none());
    }

    #[test]
    fn file_part_keeps_name_and_bytes() {
        let form = MultipartForm::new().file("file", "report.csv", vec![0, 159, 255]);

        assert_eq!(
            form.into_parts()[0].content,
            PartContent::File {
                file_name: "report.csv".to_string(),
                bytes: vec![0, 159, 255],
            }
        );
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_error_covers_400_through_599() {
        for status in [400, 401, 404, 429, 499, 500, 502, 599] {
            assert!(response(status, b"").is_error(), "{status} should be an error");
        }
    }

    #[test]
    fn is_error_accepts_everything_else() {
        for status in [100, 200, 204, 301, 302, 399, 600] {
            assert!(!response(status, b"").is_error(), "{status} should be accepted");
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        assert_eq!(response(200, b"Hello").body_text(), Some("Hello"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        assert!(response(200, &[0xFF, 0xFE]).body_text().is_none());
    }
}

mod errors {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("refused")));

        assert!(error.to_string().contains("Connection error"));
        assert!(error.source().unwrap().to_string().contains("refused"));
    }

    #[test]
    fn remote_error_shows_status_line() {
        let error = WebhookError::Remote {
            status: http::StatusCode::NOT_FOUND,
            body: None,
        };

        assert_eq!(error.to_string(), "Remote error: 404 Not Found");
        assert_eq!(error.status(), Some(http::StatusCode::NOT_FOUND));
    }

    #[test]
    fn status_is_none_for_other_variants() {
        let error = WebhookError::Transport(HttpError::Timeout);

        assert!(error.status().is_none());
        assert_eq!(error.to_string(), "Transport error: Request timed out");
    }

    #[test]
    fn validation_error_is_transparent() {
        let error = WebhookError::from(ValidationError::UsernameTooLong {
            length: 90,
            limit: 80,
        });

        assert_eq!(
            error.to_string(),
            "Username is 90 bytes long, must be shorter than 80"
        );
    }

    #[test]
    fn file_access_error_names_path() {
        let error = WebhookError::FileAccess {
            path: "/tmp/missing.png".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(error.to_string().contains("/tmp/missing.png"));
        assert!(error.source().is_some());
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
        assert_send_sync::<WebhookError>();
    }
}
