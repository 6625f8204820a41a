pub mod assets;
pub mod errors;
pub mod html;

pub use errors::{error_to_response, html_error_response, ResultResp};

pub use assets::css_response;
pub use html::{html_response, redirect_response};
