// SPDX-License-Identifier: GPL-3.0-only
pub mod error;
pub mod handlers;
pub mod http;
pub mod pages;
pub mod session;

pub use handlers::PageHandlers;
pub use http::HttpServer;
