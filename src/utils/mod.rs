// SPDX-License-Identifier: GPL-3.0-only
pub mod html;
pub mod url_validator;

pub use html::escape_html;
pub use url_validator::validate_url;
