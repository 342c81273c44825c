use axum::http::StatusCode;

use super::html::{render_document, Breadcrumb, HtmlPage, PageMeta};
use crate::main_lib::SiteSettings;

/// Standard 404 page. Served for unknown routes and for IPO records that could
/// not be fetched.
pub fn page(site: &SiteSettings, path: &str) -> HtmlPage {
    let mut meta = PageMeta::new(
        "Page not found",
        "The page you are looking for does not exist or has been moved.",
        path,
    )
    .with_breadcrumbs(vec![Breadcrumb::new("Home", "/")]);
    meta.noindex = true;

    let content = "<section class=\"not-found\"><h1>Page not found</h1>\
<p>The page you are looking for does not exist or has been moved.</p>\
<p><a href=\"/ipo\">Browse the IPO calendar</a> or go back to the <a href=\"/\">home page</a>.</p></section>";

    HtmlPage {
        status: StatusCode::NOT_FOUND,
        cache_control: "no-cache".to_string(),
        body: render_document(site, &meta, content),
    }
}

/// Page for unexpected failures while building a page.
pub fn error_page(site: &SiteSettings, path: &str) -> HtmlPage {
    let mut meta = PageMeta::new(
        "Something went wrong",
        "This page could not be loaded. Please try again in a moment.",
        path,
    )
    .with_breadcrumbs(vec![Breadcrumb::new("Home", "/")]);
    meta.noindex = true;

    HtmlPage {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        cache_control: "no-store".to_string(),
        body: render_document(
            site,
            &meta,
            "<section class=\"not-found\"><h1>Something went wrong</h1>\
<p>This page could not be loaded. Please try again in a moment.</p></section>",
        ),
    }
}
