use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use serde::Serialize;
use tera::Context;
use tracing::instrument;

use super::resource::AdminResource;
use crate::state::AppState;
use crate::templates;

#[derive(Debug, Serialize)]
struct FormField {
    name: &'static str,
    value: String,
}

/// GET /admin : every registered model.
#[instrument(skip(state))]
pub async fn admin_index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let models: Vec<&str> = state.admin.resources().iter().map(|r| r.name()).collect();

    let mut ctx = Context::new();
    ctx.insert("models", &models);
    let body = templates::render(&state.templates, "admin/index.html", &ctx).map_err(internal)?;
    Ok(Html(body))
}

/// GET /admin/:model : change list, one row per record, one cell per
/// configured list_display column.
#[instrument(skip(state))]
pub async fn change_list(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let resource = resolve(&state, &model)?;
    let rows = resource.list().await.map_err(internal)?;

    let mut ctx = Context::new();
    ctx.insert("model", resource.name());
    ctx.insert("columns", resource.list_display());
    ctx.insert("rows", &rows);
    let body = templates::render(&state.templates, "admin/list.html", &ctx).map_err(internal)?;
    Ok(Html(body))
}

/// GET /admin/:model/new : blank form.
#[instrument(skip(state))]
pub async fn new_form(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let resource = resolve(&state, &model)?;
    let fields: Vec<FormField> = resource
        .fields()
        .iter()
        .map(|&name| FormField {
            name,
            value: String::new(),
        })
        .collect();

    render_form(&state, resource.name(), &format!("/admin/{model}"), &fields)
}

/// POST /admin/:model : create, then back to the change list.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Path(model): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, (StatusCode, String)> {
    let resource = resolve(&state, &model)?;
    resource.create(&form).await.map_err(form_error)?;
    Ok(Redirect::to(&format!("/admin/{model}")))
}

/// GET /admin/:model/:id : form bound to an existing record.
#[instrument(skip(state))]
pub async fn edit_form(
    State(state): State<AppState>,
    Path((model, id)): Path<(String, i64)>,
) -> Result<Html<String>, (StatusCode, String)> {
    let resource = resolve(&state, &model)?;
    let values = resource
        .get(id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, format!("no {model} with id {id}")))?;

    let fields: Vec<FormField> = resource
        .fields()
        .iter()
        .map(|&name| FormField {
            name,
            value: values.get(name).cloned().unwrap_or_default(),
        })
        .collect();

    render_form(
        &state,
        resource.name(),
        &format!("/admin/{model}/{id}"),
        &fields,
    )
}

/// POST /admin/:model/:id : update, then back to the change list.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path((model, id)): Path<(String, i64)>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, (StatusCode, String)> {
    let resource = resolve(&state, &model)?;
    let updated = resource.update(id, &form).await.map_err(form_error)?;
    if !updated {
        return Err((StatusCode::NOT_FOUND, format!("no {model} with id {id}")));
    }
    Ok(Redirect::to(&format!("/admin/{model}")))
}

/// POST /admin/:model/:id/delete
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path((model, id)): Path<(String, i64)>,
) -> Result<Redirect, (StatusCode, String)> {
    let resource = resolve(&state, &model)?;
    let deleted = resource.delete(id).await.map_err(internal)?;
    if !deleted {
        return Err((StatusCode::NOT_FOUND, format!("no {model} with id {id}")));
    }
    Ok(Redirect::to(&format!("/admin/{model}")))
}

fn resolve(
    state: &AppState,
    model: &str,
) -> Result<Arc<dyn AdminResource>, (StatusCode, String)> {
    state
        .admin
        .resolve(model)
        .cloned()
        .ok_or((StatusCode::NOT_FOUND, format!("no admin model {model}")))
}

fn render_form(
    state: &AppState,
    model: &str,
    action: &str,
    fields: &[FormField],
) -> Result<Html<String>, (StatusCode, String)> {
    let mut ctx = Context::new();
    ctx.insert("model", model);
    ctx.insert("action", action);
    ctx.insert("fields", fields);
    let body = templates::render(&state.templates, "admin/form.html", &ctx).map_err(internal)?;
    Ok(Html(body))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// Form value coercion failures are the client's fault; everything else
/// propagates as a server error.
fn form_error(e: anyhow::Error) -> (StatusCode, String) {
    if e.downcast_ref::<std::num::ParseFloatError>().is_some()
        || e.downcast_ref::<std::num::ParseIntError>().is_some()
    {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else {
        internal(e)
    }
}
