//! Companies API endpoints.

use api_types::{
    Deleted,
    company::{
        CompanyDetailResponse, CompanyListResponse, CompanyNew, CompanyResponse, CompanySummary,
        CompanyUpdate, CompanyView,
    },
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{CompanyNewCmd, CompanyUpdateCmd};

use crate::{ServerError, invoices::map_invoice_brief, server::ServerState};

pub(crate) fn map_company(company: engine::Company) -> CompanyView {
    CompanyView {
        code: company.code,
        name: company.name,
        description: company.description,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<CompanyListResponse>, ServerError> {
    let companies = state
        .engine
        .list_companies()
        .await?
        .into_iter()
        .map(|company| CompanySummary {
            code: company.code,
            name: company.name,
        })
        .collect();

    Ok(Json(CompanyListResponse { companies }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyDetailResponse>, ServerError> {
    let detail = state.engine.company(&code).await?;

    Ok(Json(CompanyDetailResponse {
        company: map_company(detail.company),
        invoices: detail.invoices.into_iter().map(map_invoice_brief).collect(),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CompanyNew>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), ServerError> {
    let Json(payload) = payload?;
    let company = state
        .engine
        .new_company(CompanyNewCmd {
            code: payload.code,
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CompanyResponse {
            company: map_company(company),
        }),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    payload: Result<Json<CompanyUpdate>, JsonRejection>,
) -> Result<Json<CompanyResponse>, ServerError> {
    let Json(payload) = payload?;
    let company = state
        .engine
        .update_company(
            &code,
            CompanyUpdateCmd {
                name: payload.name,
                description: payload.description,
            },
        )
        .await?;

    Ok(Json(CompanyResponse {
        company: map_company(company),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Result<Json<Deleted>, ServerError> {
    state.engine.delete_company(&code).await?;
    Ok(Json(Deleted::default()))
}
