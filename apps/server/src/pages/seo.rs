//! schema.org JSON-LD nodes.

use marketdesk_core::ipo::IpoViewModel;
use serde_json::{json, Value};

use super::html::{Breadcrumb, FaqItem, SITE_NAME};
use crate::main_lib::SiteSettings;

pub fn web_page(url: &str, name: &str, description: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": name,
        "description": description,
        "url": url,
        "inLanguage": "en-IN",
        "isPartOf": {"@type": "WebSite", "name": SITE_NAME},
    })
}

pub fn breadcrumb_list(site: &SiteSettings, crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": site.url(&crumb.path),
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn faq_page(faqs: &[FaqItem]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {"@type": "Answer", "text": faq.answer},
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

/// `FinancialProduct` node for an IPO detail page. Unknown values are left out.
pub fn financial_product(url: &str, view: &IpoViewModel) -> Value {
    let mut node = json!({
        "@context": "https://schema.org",
        "@type": "FinancialProduct",
        "name": view.title,
        "url": url,
        "category": "Initial Public Offering",
        "provider": {"@type": "Organization", "name": view.company_name},
    });
    if !view.description.is_empty() {
        node["description"] = json!(view.description);
    }
    if let Some(logo) = &view.logo_url {
        node["image"] = json!(logo);
    }
    if let (Some(low), Some(high)) = (view.price_band_low, view.price_band_high) {
        node["offers"] = json!({
            "@type": "AggregateOffer",
            "priceCurrency": "INR",
            "lowPrice": low,
            "highPrice": high,
        });
    }
    node
}

/// `<script>` block holding the nodes. `</` is escaped so text cannot close the tag.
pub fn json_ld_script(nodes: &[Value]) -> String {
    nodes
        .iter()
        .map(|node| {
            let json = node.to_string().replace("</", "<\\/");
            format!("<script type=\"application/ld+json\">{}</script>", json)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketdesk_core::map_document_to_view_model;
    use marketdesk_market_data::IpoDocument;

    #[test]
    fn test_json_ld_script_escapes_closing_tags() {
        let script = json_ld_script(&[json!({"name": "</script><b>"})]);
        assert!(!script.contains("</script><b>"));
        assert!(script.contains("<\\/script>"));
        assert!(script.ends_with("</script>"));
    }

    #[test]
    fn test_breadcrumb_positions() {
        let site = SiteSettings {
            site_url: "https://md.example".to_string(),
            referral_url: String::new(),
            revalidate_secs: 0,
        };
        let node = breadcrumb_list(
            &site,
            &[Breadcrumb::new("Home", "/"), Breadcrumb::new("IPO", "/ipo")],
        );
        assert_eq!(node["itemListElement"][0]["position"], 1);
        assert_eq!(node["itemListElement"][0]["item"], "https://md.example/");
        assert_eq!(node["itemListElement"][1]["item"], "https://md.example/ipo");
    }

    #[test]
    fn test_financial_product_offers_only_with_band() {
        let view = map_document_to_view_model(&IpoDocument::from_value(json!({
            "title": "Acme IPO",
            "price_band_text": "₹430 to ₹450"
        })));
        let node = financial_product("https://md.example/ipo/acme", &view);
        assert_eq!(node["offers"]["lowPrice"], 430.0);
        assert_eq!(node["provider"]["name"], "Acme");

        let empty = map_document_to_view_model(&IpoDocument::default());
        assert!(financial_product("u", &empty).get("offers").is_none());
    }
}
