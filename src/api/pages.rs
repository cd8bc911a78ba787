// SPDX-License-Identifier: GPL-3.0-only
use crate::forms::csrf::CSRF_FIELD;
use crate::forms::{FieldKind, FieldRule, FormErrors, FormInput};
use crate::store::{CafeRecord, CAFE_COLUMNS};
use crate::utils::escape_html;
use crate::workflow::Notice;

pub const ADD_HEADING: &str = "Add a new cafe into the database";
pub const DELETE_HEADING: &str = "Delete a cafe from the database";

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Everything needed to render an add or delete form.
#[derive(Debug, Clone)]
pub struct FormView<'a> {
    pub heading: &'a str,
    pub action: &'a str,
    pub rules: &'static [FieldRule],
    pub values: FormInput,
    pub errors: FormErrors,
    pub csrf_token: String,
}

impl<'a> FormView<'a> {
    /// A blank form, with each field's initial value filled in.
    pub fn empty(heading: &'a str, action: &'a str, rules: &'static [FieldRule], csrf_token: String) -> Self {
        let values = rules
            .iter()
            .filter_map(|rule| rule.initial.map(|v| (rule.name.to_string(), v.to_string())))
            .collect();
        Self {
            heading,
            action,
            rules,
            values,
            errors: FormErrors::new(),
            csrf_token,
        }
    }

    /// The submitted form shown again with its errors.
    pub fn submitted(
        heading: &'a str,
        action: &'a str,
        rules: &'static [FieldRule],
        values: FormInput,
        errors: FormErrors,
        csrf_token: String,
    ) -> Self {
        Self {
            heading,
            action,
            rules,
            values,
            errors,
            csrf_token,
        }
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
</head>
<body>
<main class="container py-5">
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn index_page(notice: &Notice) -> String {
    let body = format!(
        r#"<div class="px-4 py-5 text-center">
<h1 class="display-5 fw-bold">{title}</h1>
<p class="lead mb-4">{subtitle}</p>
<div class="d-flex gap-2 justify-content-center">
<a class="btn btn-dark rounded-pill px-3" href="/cafes">Show all cafes</a>
<a class="btn btn-outline-dark rounded-pill px-3" href="/add">Add a cafe</a>
<a class="btn btn-outline-dark rounded-pill px-3" href="/delete">Delete a cafe</a>
</div>
</div>"#,
        title = escape_html(&notice.title),
        subtitle = escape_html(&notice.subtitle),
    );
    layout(&notice.title, &body)
}

pub fn cafes_page(cafes: &[CafeRecord]) -> String {
    let header: String = CAFE_COLUMNS
        .iter()
        .map(|column| format!("<th scope=\"col\">{}</th>", escape_html(column)))
        .collect();

    let rows: String = cafes
        .iter()
        .map(|cafe| {
            let cells: String = CAFE_COLUMNS
                .iter()
                .map(|column| {
                    let text = cafe.column_text(column).unwrap_or_default();
                    format!("<td>{}</td>", escape_html(&text))
                })
                .collect();
            format!("<tr>{cells}</tr>\n")
        })
        .collect();

    let body = format!(
        r#"<h1 class="mb-4">All Cafes</h1>
<div class="table-responsive">
<table class="table table-striped">
<thead><tr>{header}</tr></thead>
<tbody>
{rows}</tbody>
</table>
</div>
<a class="btn btn-dark rounded-pill px-3" href="/">Return to home page</a>"#
    );
    layout("All Cafes", &body)
}

fn render_field(rule: &FieldRule, view: &FormView<'_>) -> String {
    let value = view.values.get(rule.name).map(String::as_str).unwrap_or("");
    let error = view
        .errors
        .get(rule.name)
        .map(|reason| format!("<div class=\"invalid-feedback d-block\">{}</div>", escape_html(reason)))
        .unwrap_or_default();
    let name = escape_html(rule.name);
    let label = escape_html(rule.label);

    match rule.kind {
        FieldKind::Boolean => {
            let checked = if matches!(value.trim(), "" | "false") { "" } else { " checked" };
            format!(
                r#"<div class="form-check mb-3">
<input class="form-check-input" type="checkbox" id="{name}" name="{name}" value="y"{checked}>
<label class="form-check-label" for="{name}">{label}</label>
{error}</div>
"#
            )
        }
        FieldKind::Text | FieldKind::Url => {
            let input_type = if rule.kind == FieldKind::Url { "url" } else { "text" };
            let required = if rule.required { " required" } else { "" };
            format!(
                r#"<div class="mb-3">
<label class="form-label" for="{name}">{label}</label>
<input class="form-control" type="{input_type}" id="{name}" name="{name}" value="{value}"{required}>
{error}</div>
"#,
                value = escape_html(value),
            )
        }
    }
}

pub fn form_page(view: &FormView<'_>) -> String {
    // Errors not tied to a visible field, such as a bad CSRF token
    let general_errors: String = view
        .errors
        .iter()
        .filter(|(field, _)| !view.rules.iter().any(|rule| rule.name == *field))
        .map(|(_, reason)| format!("<div class=\"alert alert-danger\">{}</div>\n", escape_html(reason)))
        .collect();

    let fields: String = view.rules.iter().map(|rule| render_field(rule, view)).collect();

    let body = format!(
        r#"<h1 class="mb-4">{heading}</h1>
{general_errors}<form method="post" action="{action}" novalidate>
<input type="hidden" name="{CSRF_FIELD}" value="{csrf_token}">
{fields}<button type="submit" class="btn btn-dark rounded-pill px-3">Submit</button>
</form>"#,
        heading = escape_html(view.heading),
        action = escape_html(view.action),
        csrf_token = escape_html(&view.csrf_token),
    );
    layout(view.heading, &body)
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        r#"<h1>Page not found</h1>
<a class="btn btn-dark rounded-pill px-3" href="/">Return to home page</a>"#,
    )
}

pub fn error_page() -> String {
    layout(
        "Error",
        r#"<h1>Something went wrong</h1>
<p>We could not complete your request. Please try again later.</p>
<a class="btn btn-dark rounded-pill px-3" href="/">Return to home page</a>"#,
    )
}
