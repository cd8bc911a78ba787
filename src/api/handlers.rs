// SPDX-License-Identifier: GPL-3.0-only
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::{debug, warn};

use crate::api::error::AppError;
use crate::api::pages::{self, FormView, ADD_HEADING, DELETE_HEADING};
use crate::api::session::Session;
use crate::forms::csrf::{issue_token, verify_token, CSRF_FIELD, INVALID_TOKEN_MESSAGE};
use crate::forms::{FieldRule, FormErrors, FormInput, ADD_CAFE_RULES, DELETE_CAFE_RULES};
use crate::workflow::{AddOutcome, DeleteOutcome, WorkflowController};

pub struct PageHandlers {
    controller: WorkflowController,
    secret_key: String,
}

impl PageHandlers {
    pub fn new(controller: WorkflowController, secret_key: String) -> Self {
        Self { controller, secret_key }
    }

    fn csrf_token(&self, session: &Session) -> String {
        issue_token(&self.secret_key, &session.id)
    }

    fn csrf_ok(&self, session: &Session, input: &FormInput) -> bool {
        let submitted = input.get(CSRF_FIELD).map(String::as_str);
        let ok = verify_token(&self.secret_key, &session.id, submitted);
        if !ok {
            warn!(session_is_new = session.is_new(), "Rejected form with invalid CSRF token");
        }
        ok
    }

    fn render_submitted(
        &self,
        session: &Session,
        heading: &str,
        action: &str,
        rules: &'static [FieldRule],
        input: FormInput,
        errors: FormErrors,
    ) -> Response {
        let view = FormView::submitted(heading, action, rules, input, errors, self.csrf_token(session));
        Html(pages::form_page(&view)).into_response()
    }
}

impl PageHandlers {
    pub async fn index(&self, session: &Session) -> Response {
        let notice = self.controller.landing(&session.id).await;
        Html(pages::index_page(&notice)).into_response()
    }

    pub async fn list_cafes(&self) -> Result<Response, AppError> {
        let cafes = self.controller.list().await?;
        debug!(count = cafes.len(), "Listing cafes");
        Ok(Html(pages::cafes_page(&cafes)).into_response())
    }

    pub fn add_form(&self, session: &Session) -> Response {
        let view = FormView::empty(ADD_HEADING, "/add", ADD_CAFE_RULES, self.csrf_token(session));
        Html(pages::form_page(&view)).into_response()
    }

    pub async fn submit_add(&self, session: &Session, input: FormInput) -> Result<Response, AppError> {
        if !self.csrf_ok(session, &input) {
            let errors = FormErrors::single(CSRF_FIELD, INVALID_TOKEN_MESSAGE);
            return Ok(self.render_submitted(session, ADD_HEADING, "/add", ADD_CAFE_RULES, input, errors));
        }

        match self.controller.add(session.id, &input).await? {
            AddOutcome::Added(record) => {
                debug!(cafe_id = record.id, "Redirecting after add");
                Ok(Redirect::to("/").into_response())
            }
            AddOutcome::Rejected(errors) => {
                Ok(self.render_submitted(session, ADD_HEADING, "/add", ADD_CAFE_RULES, input, errors))
            }
        }
    }

    pub fn delete_form(&self, session: &Session) -> Response {
        let view = FormView::empty(DELETE_HEADING, "/delete", DELETE_CAFE_RULES, self.csrf_token(session));
        Html(pages::form_page(&view)).into_response()
    }

    pub async fn submit_delete(&self, session: &Session, input: FormInput) -> Result<Response, AppError> {
        if !self.csrf_ok(session, &input) {
            let errors = FormErrors::single(CSRF_FIELD, INVALID_TOKEN_MESSAGE);
            return Ok(self.render_submitted(session, DELETE_HEADING, "/delete", DELETE_CAFE_RULES, input, errors));
        }

        let outcome = self.controller.delete(session.id, &input).await?;
        let heading = outcome.heading().unwrap_or(DELETE_HEADING);
        match outcome {
            DeleteOutcome::Deleted(record) => {
                debug!(cafe_id = record.id, "Redirecting after delete");
                Ok(Redirect::to("/").into_response())
            }
            DeleteOutcome::Rejected(errors) => {
                Ok(self.render_submitted(session, heading, "/delete", DELETE_CAFE_RULES, input, errors))
            }
            DeleteOutcome::NotFound | DeleteOutcome::IdentityMismatch => Ok(self.render_submitted(
                session,
                heading,
                "/delete",
                DELETE_CAFE_RULES,
                input,
                FormErrors::new(),
            )),
        }
    }

    pub fn not_found(&self) -> Response {
        (StatusCode::NOT_FOUND, Html(pages::not_found_page())).into_response()
    }
}
