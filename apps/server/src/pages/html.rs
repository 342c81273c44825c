//! Page layout and HTML helpers.
//!
//! Pages are assembled from strings. Every value that did not originate in this
//! crate goes through [`escape`] before it is interpolated.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;

use super::seo;
use crate::main_lib::SiteSettings;

pub const SITE_NAME: &str = "MarketDesk";

/// Escapes text for element content and double- or single-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text and turns newlines into `<br>`.
pub fn escape_multiline(text: &str) -> String {
    text.lines().map(escape).collect::<Vec<_>>().join("<br>")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Everything the layout needs besides the page body.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Site path, starting with `/`
    pub path: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub faqs: Vec<FaqItem>,
    /// Extra JSON-LD nodes, e.g. a `FinancialProduct`
    pub schemas: Vec<Value>,
    pub og_type: &'static str,
    pub image: Option<String>,
    pub noindex: bool,
}

impl PageMeta {
    /// Page one level below home.
    pub fn new(title: &str, description: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            path: path.to_string(),
            breadcrumbs: vec![Breadcrumb::new("Home", "/"), Breadcrumb::new(title, path)],
            faqs: Vec::new(),
            schemas: Vec::new(),
            og_type: "website",
            image: None,
            noindex: false,
        }
    }

    pub fn with_faqs(mut self, faqs: Vec<FaqItem>) -> Self {
        self.faqs = faqs;
        self
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Vec<Breadcrumb>) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }
}

/// A rendered page with its status and cache policy.
pub struct HtmlPage {
    pub status: StatusCode,
    pub cache_control: String,
    pub body: String,
}

impl IntoResponse for HtmlPage {
    fn into_response(self) -> Response {
        let cache_control = HeaderValue::from_str(&self.cache_control)
            .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));
        (
            self.status,
            [(header::CACHE_CONTROL, cache_control)],
            Html(self.body),
        )
            .into_response()
    }
}

/// Renders a cacheable 200 page.
pub fn page(site: &SiteSettings, meta: &PageMeta, content: &str) -> HtmlPage {
    HtmlPage {
        status: StatusCode::OK,
        cache_control: format!(
            "public, max-age={}, stale-while-revalidate={}",
            site.revalidate_secs, site.revalidate_secs
        ),
        body: render_document(site, meta, content),
    }
}

/// Full HTML document: head with SEO tags, navigation, body, FAQs, CTA, footer.
pub fn render_document(site: &SiteSettings, meta: &PageMeta, content: &str) -> String {
    let canonical = site.url(&meta.path);
    let title = format!("{} | {}", meta.title, SITE_NAME);

    let mut schemas = vec![
        seo::web_page(&canonical, &meta.title, &meta.description),
        seo::breadcrumb_list(site, &meta.breadcrumbs),
    ];
    if !meta.faqs.is_empty() {
        schemas.push(seo::faq_page(&meta.faqs));
    }
    schemas.extend(meta.schemas.iter().cloned());

    let image_tag = meta
        .image
        .as_deref()
        .map(|image| {
            format!(
                "<meta property=\"og:image\" content=\"{}\">\n",
                escape(image)
            )
        })
        .unwrap_or_default();
    let robots = if meta.noindex {
        "<meta name=\"robots\" content=\"noindex\">\n"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en-IN">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
{robots}<link rel="canonical" href="{canonical}">
<meta property="og:site_name" content="{site_name}">
<meta property="og:type" content="{og_type}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:url" content="{canonical}">
{image_tag}<meta name="twitter:card" content="summary">
<link rel="stylesheet" href="/static/site.css">
{json_ld}
</head>
<body>
{nav}
<main>
{breadcrumbs}
{content}
{cta}
{faqs}
</main>
<footer><p>&copy; {site_name}. Market data is indicative and may be delayed. Investments in securities are subject to market risks.</p></footer>
</body>
</html>
"#,
        title = escape(&title),
        description = escape(&meta.description),
        canonical = escape(&canonical),
        site_name = SITE_NAME,
        og_type = meta.og_type,
        robots = robots,
        image_tag = image_tag,
        json_ld = seo::json_ld_script(&schemas),
        nav = nav(),
        breadcrumbs = breadcrumbs(&meta.breadcrumbs),
        content = content,
        cta = cta(&site.referral_url),
        faqs = faq_section(&meta.faqs),
    )
}

fn nav() -> String {
    let links = [
        ("/ipo", "IPO"),
        ("/ipo-gmp", "IPO GMP"),
        ("/buyback", "Buyback"),
        ("/rights-issue", "Rights Issue"),
        ("/ncd", "NCD"),
        ("/fd-rates", "FD Rates"),
        ("/rd-rates", "RD Rates"),
        ("/fuel-price", "Fuel Price"),
        ("/gold-rate", "Gold Rate"),
        ("/calculators/sip", "Calculators"),
    ];
    let items: String = links
        .iter()
        .map(|(href, label)| format!("<li><a href=\"{}\">{}</a></li>", href, label))
        .collect();
    format!(
        "<header><nav><a class=\"brand\" href=\"/\">{}</a><ul>{}</ul></nav></header>",
        SITE_NAME, items
    )
}

fn breadcrumbs(crumbs: &[Breadcrumb]) -> String {
    if crumbs.len() < 2 {
        return String::new();
    }
    let last = crumbs.len() - 1;
    let items: Vec<String> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            if i == last {
                format!("<li aria-current=\"page\">{}</li>", escape(&crumb.name))
            } else {
                format!(
                    "<li><a href=\"{}\">{}</a></li>",
                    escape(&crumb.path),
                    escape(&crumb.name)
                )
            }
        })
        .collect();
    format!(
        "<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\"><ol>{}</ol></nav>",
        items.join("")
    )
}

/// Brokerage call-to-action. Sponsored links never pass ranking signals.
pub fn cta(referral_url: &str) -> String {
    format!(
        "<aside class=\"cta\"><p>Apply for IPOs, invest in stocks and track your portfolio in one place.</p>\
<a class=\"cta-button\" href=\"{}\" rel=\"nofollow sponsored\" target=\"_blank\">Open a free demat account</a></aside>",
        escape(referral_url)
    )
}

fn faq_section(faqs: &[FaqItem]) -> String {
    if faqs.is_empty() {
        return String::new();
    }
    let items: String = faqs
        .iter()
        .map(|faq| {
            format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                escape(&faq.question),
                escape_multiline(&faq.answer)
            )
        })
        .collect();
    format!(
        "<section class=\"faq\"><h2>Frequently Asked Questions</h2>{}</section>",
        items
    )
}

/// Table with escaped headers. Cells are inserted as given, so callers escape them.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th scope=\"col\">{}</th>", escape(h)))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|c| format!("<td>{}</td>", c)).collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    format!(
        "<div class=\"table-wrap\"><table><thead><tr>{}</tr></thead><tbody>{}</tbody></table></div>",
        head, body
    )
}

/// Paragraph shown in place of an empty table.
pub fn empty_state(message: &str) -> String {
    format!("<p class=\"empty\">{}</p>", escape(message))
}

/// Two-column key/value table.
pub fn key_values(rows: &[(&str, String)]) -> String {
    let body: String = rows
        .iter()
        .map(|(key, value)| {
            format!(
                "<tr><th scope=\"row\">{}</th><td>{}</td></tr>",
                escape(key),
                escape(value)
            )
        })
        .collect();
    format!(
        "<div class=\"table-wrap\"><table class=\"kv\"><tbody>{}</tbody></table></div>",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteSettings {
        SiteSettings {
            site_url: "https://marketdesk.example".to_string(),
            referral_url: "https://broker.example/ref?id=1&src=md".to_string(),
            revalidate_secs: 300,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("₹430 - ₹450"), "₹430 - ₹450");
    }

    #[test]
    fn test_escape_multiline() {
        assert_eq!(escape_multiline("A\n<B>"), "A<br>&lt;B&gt;");
    }

    #[test]
    fn test_document_has_seo_tags() {
        let meta = PageMeta::new("IPO GMP", "Grey market premium today", "/ipo-gmp").with_faqs(
            vec![FaqItem {
                question: "What is GMP?".to_string(),
                answer: "Grey market premium.".to_string(),
            }],
        );
        let html = render_document(&site(), &meta, "<p>body</p>");

        assert!(html.contains("<title>IPO GMP | MarketDesk</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Grey market premium today\">"));
        assert!(html.contains(
            "<link rel=\"canonical\" href=\"https://marketdesk.example/ipo-gmp\">"
        ));
        assert!(html.contains("og:title"));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("\"FAQPage\""));
        assert!(html.contains("\"BreadcrumbList\""));
        assert!(html.contains("rel=\"nofollow sponsored\""));
        assert!(html.contains("href=\"https://broker.example/ref?id=1&amp;src=md\""));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_page_cache_control() {
        let page = page(&site(), &PageMeta::new("Home", "d", "/"), "");
        assert_eq!(page.status, StatusCode::OK);
        assert!(page.cache_control.contains("max-age=300"));
    }

    #[test]
    fn test_table_escapes_headers_only() {
        let html = table(&["A<B"], &[vec!["<b>x</b>".to_string()]]);
        assert!(html.contains("<th scope=\"col\">A&lt;B</th>"));
        assert!(html.contains("<td><b>x</b></td>"));
    }
}
