use std::io::Read;

use astra::{Body, Request, Response};
use http::Method;

use crate::router::App;
use crate::store::{seed, PropertyStore};

/// App wired exactly like production, minus the describer (tests run
/// without an API key).
pub fn make_app() -> App {
    App {
        store: PropertyStore::new(seed::initial_properties()),
        describer: None,
    }
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

/// POST with an application/x-www-form-urlencoded body.
pub fn post_form(path: &str, fields: &[(&str, &str)]) -> Request {
    let mut encoded = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in fields {
        encoded.append_pair(k, v);
    }

    let mut req = Request::new(Body::from(encoded.finish()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("failed to read response body");
    String::from_utf8(bytes).expect("response body was not utf-8")
}
