//! Rotas de Motos
//!
//! Este módulo expõe as operações CRUD do registro de motos. Os handlers
//! traduzem os erros do registro para as respostas HTTP do contrato
//! (404, 409 e 400 com mensagem em texto puro).

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::models::moto::{Moto, MotoInput};
use crate::registry::RegistryError;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_moto_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_moto))
        .route("/", get(list_motos))
        .route("/:id", get(get_moto))
        .route("/:id", put(update_moto))
        .route("/:id", delete(delete_moto))
}

fn moto_nao_encontrada(id: i32) -> AppError {
    AppError::NotFound(format!("Moto com id {} não encontrada", id))
}

/// Listar todas as motos, ordenadas por id
async fn list_motos(State(state): State<AppState>) -> Json<Vec<Moto>> {
    Json(state.registry.list().await)
}

/// Buscar uma moto por id
async fn get_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Moto>> {
    state
        .registry
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| moto_nao_encontrada(id))
}

/// Cadastrar uma nova moto
///
/// O corpo é extraído como opcional para responder 400 com a mensagem do
/// contrato quando estiver ausente ou malformado.
async fn create_moto(
    State(state): State<AppState>,
    payload: Option<Json<MotoInput>>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload
        .ok_or_else(|| AppError::BadRequest("Dados da moto são obrigatórios".to_string()))?;

    let moto = state.registry.create(input).await.map_err(|e| match e {
        RegistryError::DuplicatePlate(placa) => {
            AppError::Conflict(format!("Já existe uma moto com a placa {}", placa))
        }
        RegistryError::NotFound(id) => moto_nao_encontrada(id),
    })?;

    let location = format!("/motos/{}", moto.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(moto),
    ))
}

/// Atualizar uma moto existente
async fn update_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<MotoInput>,
) -> AppResult<Json<Moto>> {
    state
        .registry
        .update(id, input)
        .await
        .map(Json)
        .map_err(|e| match e {
            RegistryError::NotFound(id) => moto_nao_encontrada(id),
            RegistryError::DuplicatePlate(placa) => {
                AppError::Conflict(format!("Já existe outra moto com a placa {}", placa))
            }
        })
}

/// Remover uma moto
async fn delete_moto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .registry
        .delete(id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|e| match e {
            RegistryError::NotFound(id) => moto_nao_encontrada(id),
            RegistryError::DuplicatePlate(placa) => {
                AppError::Conflict(format!("Já existe uma moto com a placa {}", placa))
            }
        })
}
