//! Customer and contact endpoints.
//!
//! Each write route builds a command, sends it through the mediator with a
//! fresh [`Notifications`] scope, and answers from
//! [`Notifications::operacao_valida`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use uuid::Uuid;

use super::error::ApiError;
use super::state::AppState;
use crate::commands::{RemoverCliente, RemoverContato};
use crate::domain::{ClienteId, ContatoId};
use crate::models::{ClienteViewModel, ContatoViewModel};
use crate::notifications::Notifications;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/index", get(index_clientes))
        .route("/contatos/index", get(index_contatos))
        .route("/busca/:cliente_id", get(obter_cliente_com_contato_por_id))
        .route("/adicionar", post(adicionar_cliente))
        .route("/contato/adicionar/:cliente_id", post(adicionar_contato))
        .route("/remover/:id", delete(remover_cliente))
        .route("/contato/remover/:id", delete(remover_contato))
}

/// List customers
pub async fn index_clientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClienteViewModel>>, ApiError> {
    let mut notifications = Notifications::new();
    let clientes = state.queries.obter_clientes(&mut notifications).await;

    if notifications.operacao_valida() {
        return Ok(Json(clientes));
    }
    Err(ApiError::NotFound(notifications.mensagens_erro()))
}

/// List contacts
pub async fn index_contatos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContatoViewModel>>, ApiError> {
    let mut notifications = Notifications::new();
    let contatos = state.queries.obter_contatos(&mut notifications).await;

    if notifications.operacao_valida() {
        return Ok(Json(contatos));
    }
    Err(ApiError::NotFound(notifications.mensagens_erro()))
}

/// Get a customer with its contact
pub async fn obter_cliente_com_contato_por_id(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ClienteViewModel>, ApiError> {
    let Path(cliente_id) = path?;
    let cliente_id = ClienteId::new(cliente_id)?;

    let mut notifications = Notifications::new();
    let cliente = state
        .queries
        .obter_cliente_com_contato_por_id(cliente_id, &mut notifications)
        .await;

    match cliente {
        Some(cliente) if notifications.operacao_valida() => Ok(Json(cliente)),
        _ => Err(ApiError::NotFound(notifications.mensagens_erro())),
    }
}

/// Register a customer, and its contact when one is nested in the body
pub async fn adicionar_cliente(
    State(state): State<AppState>,
    payload: Result<Json<ClienteViewModel>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(mut cliente) = payload?;
    let cliente_id = cliente.resolver_id();

    let mut notifications = Notifications::new();
    state
        .mediator
        .enviar_comando(cliente.comando(cliente_id), &mut notifications)
        .await;

    if let Some(contato) = cliente.contato.take() {
        if notifications.operacao_valida() {
            state
                .mediator
                .enviar_comando(contato.into_comando(cliente_id), &mut notifications)
                .await;
        }
    }

    if notifications.operacao_valida() {
        return Ok(created(format!("/clientes/busca/{}", cliente_id)));
    }
    Err(ApiError::InvalidOperationWithoutBody)
}

/// Attach a contact to an existing customer
pub async fn adicionar_contato(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ContatoViewModel>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Path(cliente_id) = path?;
    let cliente_id = ClienteId::new(cliente_id)?;
    let Json(contato) = payload?;

    let mut notifications = Notifications::new();
    state
        .mediator
        .enviar_comando(contato.into_comando(cliente_id), &mut notifications)
        .await;

    if notifications.operacao_valida() {
        return Ok(created(format!("/clientes/busca/{}", cliente_id)));
    }
    Err(ApiError::InvalidOperation(notifications.mensagens_erro()))
}

/// Remove a customer and its contact
pub async fn remover_cliente(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    let id = ClienteId::new(id)?;

    let mut notifications = Notifications::new();
    state
        .mediator
        .enviar_comando(RemoverCliente::new(id), &mut notifications)
        .await;

    if notifications.operacao_valida() {
        return Ok(StatusCode::NO_CONTENT);
    }
    Err(ApiError::InvalidOperation(notifications.mensagens_erro()))
}

/// Remove a contact
pub async fn remover_contato(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    let id = ContatoId::new(id)?;

    let mut notifications = Notifications::new();
    state
        .mediator
        .enviar_comando(RemoverContato::new(id), &mut notifications)
        .await;

    if notifications.operacao_valida() {
        return Ok(StatusCode::NO_CONTENT);
    }
    Err(ApiError::InvalidOperation(notifications.mensagens_erro()))
}

fn created(location: String) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}
