use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marketdesk_core::{
    calculators::{
        calculate_emi, calculate_fd, calculate_lumpsum, calculate_rd, calculate_sip,
        CalculatorKind, CalculatorResult, EmiInput, FdInput, LumpsumInput, RdInput, SipInput,
    },
    errors::{Error, Result as CoreResult, ValidationError},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{
    faq,
    format::rupees,
    html::{escape, key_values, page, Breadcrumb, HtmlPage, PageMeta},
    not_found,
};
use crate::main_lib::AppState;

/// Form fields. Kept as text so a bad value can be echoed back with an error.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorQuery {
    amount: Option<String>,
    rate: Option<String>,
    tenure: Option<String>,
}

/// Labels and default values of one calculator form.
struct CalculatorForm {
    amount_label: &'static str,
    amount: &'static str,
    rate_label: &'static str,
    rate: &'static str,
    tenure_label: &'static str,
    tenure: &'static str,
    description: &'static str,
}

fn form_for(kind: CalculatorKind) -> CalculatorForm {
    match kind {
        CalculatorKind::Sip => CalculatorForm {
            amount_label: "Monthly investment (₹)",
            amount: "5000",
            rate_label: "Expected return (% p.a.)",
            rate: "12",
            tenure_label: "Time period (years)",
            tenure: "10",
            description: "Estimate the future value of a monthly SIP in mutual funds.",
        },
        CalculatorKind::Lumpsum => CalculatorForm {
            amount_label: "Total investment (₹)",
            amount: "100000",
            rate_label: "Expected return (% p.a.)",
            rate: "12",
            tenure_label: "Time period (years)",
            tenure: "10",
            description: "Estimate the future value of a one-time investment.",
        },
        CalculatorKind::Fd => CalculatorForm {
            amount_label: "Deposit amount (₹)",
            amount: "100000",
            rate_label: "Interest rate (% p.a.)",
            rate: "7",
            tenure_label: "Tenure (months)",
            tenure: "12",
            description: "Calculate fixed deposit maturity with quarterly compounding.",
        },
        CalculatorKind::Rd => CalculatorForm {
            amount_label: "Monthly deposit (₹)",
            amount: "5000",
            rate_label: "Interest rate (% p.a.)",
            rate: "7",
            tenure_label: "Tenure (months)",
            tenure: "12",
            description: "Calculate recurring deposit maturity with quarterly compounding.",
        },
        CalculatorKind::Emi => CalculatorForm {
            amount_label: "Loan amount (₹)",
            amount: "1000000",
            rate_label: "Interest rate (% p.a.)",
            rate: "8.5",
            tenure_label: "Tenure (months)",
            tenure: "240",
            description: "Calculate the monthly EMI, total interest and total payment of a loan.",
        },
    }
}

fn invalid(message: String) -> Error {
    Error::Validation(ValidationError::InvalidInput(message))
}

fn parse_decimal(field: &str, value: &str) -> CoreResult<Decimal> {
    Decimal::from_str(&value.trim().replace(',', ""))
        .map_err(|_| invalid(format!("{} must be a number", field)))
}

fn parse_tenure(field: &str, value: &str) -> CoreResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid(format!("{} must be a whole number", field)))
}

fn investment_rows(
    result: &CalculatorResult,
    returns_label: &'static str,
) -> Vec<(&'static str, String)> {
    vec![
        ("Invested amount", rupees(result.invested_amount)),
        (returns_label, rupees(result.estimated_returns)),
        ("Total value", rupees(result.total_value)),
    ]
}

/// Runs the calculator on the submitted text fields.
fn compute(
    kind: CalculatorKind,
    amount: &str,
    rate: &str,
    tenure: &str,
) -> CoreResult<Vec<(&'static str, String)>> {
    let amount = parse_decimal("Amount", amount)?;
    let rate = parse_decimal("Rate", rate)?;
    let tenure = parse_tenure("Tenure", tenure)?;

    let rows = match kind {
        CalculatorKind::Sip => investment_rows(
            &calculate_sip(&SipInput {
                monthly_investment: amount,
                annual_rate: rate,
                years: tenure,
            })?,
            "Estimated returns",
        ),
        CalculatorKind::Lumpsum => investment_rows(
            &calculate_lumpsum(&LumpsumInput {
                principal: amount,
                annual_rate: rate,
                years: tenure,
            })?,
            "Estimated returns",
        ),
        CalculatorKind::Fd => investment_rows(
            &calculate_fd(&FdInput {
                principal: amount,
                annual_rate: rate,
                months: tenure,
            })?,
            "Interest earned",
        ),
        CalculatorKind::Rd => investment_rows(
            &calculate_rd(&RdInput {
                monthly_deposit: amount,
                annual_rate: rate,
                months: tenure,
            })?,
            "Interest earned",
        ),
        CalculatorKind::Emi => {
            let result = calculate_emi(&EmiInput {
                principal: amount,
                annual_rate: rate,
                months: tenure,
            })?;
            vec![
                ("Monthly EMI", rupees(result.monthly_emi)),
                ("Principal amount", rupees(result.principal)),
                ("Total interest", rupees(result.total_interest)),
                ("Total payment", rupees(result.total_payment)),
            ]
        }
    };
    Ok(rows)
}

fn input(name: &str, label: &str, value: &str) -> String {
    format!(
        "<label>{}<input name=\"{}\" value=\"{}\" inputmode=\"decimal\" required></label>",
        escape(label),
        name,
        escape(value)
    )
}

fn calculator_links(current: CalculatorKind) -> String {
    let links: String = CalculatorKind::ALL
        .iter()
        .map(|kind| {
            let class = if *kind == current { " class=\"active\"" } else { "" };
            format!(
                "<a{} href=\"/calculators/{}\">{}</a>",
                class,
                kind.slug(),
                kind.label()
            )
        })
        .collect();
    format!("<nav class=\"tabs\">{}</nav>", links)
}

/// `/calculators` - index of every calculator.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let items: String = CalculatorKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "<li><a href=\"/calculators/{}\">{}</a><p>{}</p></li>",
                kind.slug(),
                kind.label(),
                escape(form_for(*kind).description)
            )
        })
        .collect();
    let content = format!(
        "<h1>Financial Calculators</h1><ul class=\"tools\">{}</ul>",
        items
    );
    let meta = PageMeta::new(
        "Financial Calculators",
        "Free SIP, lumpsum, FD, RD and EMI calculators to plan investments and loans.",
        "/calculators",
    )
    .with_faqs(faq::items(faq::CALCULATORS));
    page(&state.site, &meta, &content).into_response()
}

/// `/calculators/{kind}` - form plus result for the submitted (or default) values.
pub async fn calculator(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    query: Result<Query<CalculatorQuery>, QueryRejection>,
) -> Response {
    let site = &state.site;
    let path = format!("/calculators/{}", kind);

    let Ok(kind) = CalculatorKind::from_str(&kind) else {
        tracing::warn!("Unknown calculator requested: {}", path);
        return not_found::page(site, &path).into_response();
    };
    let path = format!("/calculators/{}", kind.slug());

    let query = query.map(|Query(q)| q).unwrap_or_default();
    let form = form_for(kind);
    let amount = query.amount.as_deref().unwrap_or(form.amount);
    let rate = query.rate.as_deref().unwrap_or(form.rate);
    let tenure = query.tenure.as_deref().unwrap_or(form.tenure);

    let outcome = compute(kind, amount, rate, tenure);
    let result_html = match &outcome {
        Ok(rows) => format!(
            "<section class=\"result\"><h2>Result</h2>{}</section>",
            key_values(rows)
        ),
        Err(e) => {
            tracing::debug!("Rejected {} input: {}", kind, e);
            format!("<p class=\"error\" role=\"alert\">{}</p>", escape(&e.to_string()))
        }
    };

    let content = format!(
        "<h1>{}</h1><p class=\"lead\">{}</p>{}\
<form class=\"calculator\" method=\"get\" action=\"{}\">{}{}{}<button type=\"submit\">Calculate</button></form>{}",
        kind.label(),
        escape(form.description),
        calculator_links(kind),
        path,
        input("amount", form.amount_label, amount),
        input("rate", form.rate_label, rate),
        input("tenure", form.tenure_label, tenure),
        result_html
    );

    let meta = PageMeta::new(kind.label(), form.description, &path)
        .with_breadcrumbs(vec![
            Breadcrumb::new("Home", "/"),
            Breadcrumb::new("Calculators", "/calculators"),
            Breadcrumb::new(kind.label(), path.clone()),
        ])
        .with_faqs(faq::items(faq::CALCULATORS));

    let rendered = page(site, &meta, &content);
    match outcome {
        Ok(_) => rendered.into_response(),
        Err(_) => HtmlPage {
            status: StatusCode::BAD_REQUEST,
            cache_control: "no-cache".to_string(),
            body: rendered.body,
        }
        .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compute_for_every_kind() {
        for kind in CalculatorKind::ALL {
            let form = form_for(kind);
            let rows = compute(kind, form.amount, form.rate, form.tenure).unwrap();
            assert!(rows.len() >= 3, "{} should report at least three rows", kind);
        }
    }

    #[test]
    fn test_sip_default_result() {
        let rows = compute(CalculatorKind::Sip, "5,000", "12", "10").unwrap();
        assert_eq!(rows[0], ("Invested amount", "₹6,00,000".to_string()));
        assert_eq!(rows[2], ("Total value", "₹11,61,695.38".to_string()));
    }

    #[test]
    fn test_bad_input_is_validation_error() {
        let err = compute(CalculatorKind::Emi, "ten lakh", "8.5", "240").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("Amount must be a number"));

        let err = compute(CalculatorKind::Fd, "1000", "7", "1.5").unwrap_err();
        assert!(err.to_string().contains("Tenure must be a whole number"));

        assert!(compute(CalculatorKind::Fd, "0", "7", "12").is_err());
    }
}
