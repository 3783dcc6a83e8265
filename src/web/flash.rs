//! Single-read notices carried across a redirect.
//!
//! A notice is written into a short-lived cookie alongside the redirect and
//! removed again by the page that displays it, so reloading that page shows
//! nothing.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use url::form_urlencoded;

const FLASH_COOKIE: &str = "flash";

/// A user-visible banner message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    /// `"success"` or `"error"`, empty when there is nothing to show
    pub kind: String,
    /// Banner text
    pub message: String,
}

impl Notice {
    /// A success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".to_string(),
            message: message.into(),
        }
    }

    /// An error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error".to_string(),
            message: message.into(),
        }
    }

    fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("kind", &self.kind)
            .append_pair("message", &self.message)
            .finish()
    }

    fn decode(value: &str) -> Self {
        let mut notice = Self::default();
        for (key, val) in form_urlencoded::parse(value.as_bytes()) {
            match key.as_ref() {
                "kind" => notice.kind = val.into_owned(),
                "message" => notice.message = val.into_owned(),
                _ => {}
            }
        }
        notice
    }
}

/// Attaches a notice to the response that is about to redirect.
#[must_use]
pub fn set_notice(jar: CookieJar, notice: &Notice) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, notice.encode()))
            .path("/")
            .http_only(true),
    )
}

/// Reads the pending notice, if any, and clears it.
#[must_use]
pub fn take_notice(jar: CookieJar) -> (CookieJar, Notice) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Notice::default());
    };

    let notice = Notice::decode(cookie.value());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, notice)
}
