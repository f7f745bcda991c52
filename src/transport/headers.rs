use std::time::SystemTime;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{Password, Username};

pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";
pub const ACCEPT: &str = "application/json";

/// `Basic base64(username:password)`.
pub fn basic_authorization(username: &Username, password: &Password) -> String {
    let credentials = format!("{}:{}", username.as_str(), password.as_str());
    format!("Basic {}", STANDARD.encode(credentials))
}

/// RFC 7231 IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date(now: SystemTime) -> String {
    httpdate::fmt_http_date(now)
}

/// Headers sent with every gateway call, in wire order.
pub fn request_headers(
    username: &Username,
    password: &Password,
    now: SystemTime,
) -> Vec<(&'static str, String)> {
    vec![
        ("Date", http_date(now)),
        ("Content-Type", CONTENT_TYPE.to_owned()),
        ("Authorization", basic_authorization(username, password)),
        ("Accept", ACCEPT.to_owned()),
    ]
}
