// src/middleware/tenancy.rs

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use uuid::Uuid;
use crate::common::error::AppError;

// O nome do nosso cabeçalho HTTP customizado
pub const TENANT_ID_HEADER: &str = "x-tenant-id";

// Extrator com o UUID do tenant (loja) cujos dados serão lidos.
#[derive(Debug, Clone, Copy)]
pub struct TenantContext(pub Uuid);

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(TENANT_ID_HEADER)
            .ok_or(AppError::MissingTenant)?;

        let value_str = value.to_str().map_err(|_| AppError::InvalidTenant)?;
        let tenant_id = Uuid::parse_str(value_str.trim()).map_err(|_| AppError::InvalidTenant)?;

        Ok(TenantContext(tenant_id))
    }
}
