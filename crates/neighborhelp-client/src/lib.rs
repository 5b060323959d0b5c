// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// neighborhelp-client — everything between a page and the marketplace API.
//
// `api` is the seam (one trait method per endpoint), `http` the reqwest
// implementation, `routing` the navigation guard, and `flows` the
// fetch/submit logic behind each page, written against the trait so it can
// be exercised without a server.

pub mod api;
pub mod flows;
pub mod http;
pub mod routing;

#[cfg(test)]
pub(crate) mod testing;

pub use api::MarketplaceApi;
pub use http::HttpApi;
pub use routing::{Destination, Resolution, resolve};
