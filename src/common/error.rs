use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Corpo JSON inválido")]
    InvalidJson(#[from] JsonRejection),

    #[error("Parâmetros de consulta inválidos")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Cabeçalho X-Tenant-ID ausente")]
    MissingTenant,

    #[error("Cabeçalho X-Tenant-ID inválido")]
    InvalidTenant,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Qualquer outro erro inesperado (ex: falha ao gerar o CSV)
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            // Rejeições do axum mantêm o status original, mas no nosso formato JSON.
            AppError::InvalidJson(rejection) => {
                let body = Json(json!({
                    "error": "O corpo da requisição é inválido.",
                    "details": rejection.body_text(),
                }));
                return (rejection.status(), body).into_response();
            }
            AppError::InvalidQuery(rejection) => {
                let body = Json(json!({
                    "error": "Os parâmetros da consulta são inválidos.",
                    "details": rejection.body_text(),
                }));
                return (rejection.status(), body).into_response();
            }
            AppError::MissingTenant => (StatusCode::BAD_REQUEST, "O cabeçalho X-Tenant-ID é obrigatório."),
            AppError::InvalidTenant => (StatusCode::BAD_REQUEST, "Cabeçalho X-Tenant-ID inválido (não é um UUID)."),

            // DatabaseError e InternalServerError viram 500; o detalhe fica só no log.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
