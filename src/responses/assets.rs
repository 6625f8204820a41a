// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// The single stylesheet, embedded so the binary stays self-contained.
pub const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serve an embedded stylesheet.
pub fn css_response(css: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "max-age=3600")
        .body(Body::from(css.to_string()))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
