//! Invoices API endpoints.

use api_types::{
    Deleted,
    invoice::{
        InvoiceBrief, InvoiceDetail, InvoiceDetailResponse, InvoiceListResponse, InvoiceNew,
        InvoiceResponse, InvoiceSummary, InvoiceUpdate, InvoiceView,
    },
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{Amount, EngineError, InvoiceNewCmd, InvoiceUpdateCmd};

use crate::{ServerError, companies::map_company, server::ServerState};

fn map_invoice(invoice: engine::Invoice) -> InvoiceView {
    InvoiceView {
        id: invoice.id,
        comp_code: invoice.comp_code,
        amt: invoice.amt.to_major(),
        paid: invoice.paid,
        add_date: invoice.add_date,
        paid_date: invoice.paid_date,
    }
}

pub(crate) fn map_invoice_brief(invoice: engine::InvoiceBrief) -> InvoiceBrief {
    InvoiceBrief {
        id: invoice.id,
        amt: invoice.amt.to_major(),
        paid: invoice.paid,
        add_date: invoice.add_date,
        paid_date: invoice.paid_date,
    }
}

fn map_invoice_detail(invoice: engine::InvoiceDetail) -> InvoiceDetail {
    InvoiceDetail {
        id: invoice.id,
        amt: invoice.amt.to_major(),
        paid: invoice.paid,
        add_date: invoice.add_date,
        paid_date: invoice.paid_date,
        company: invoice.company.map(map_company),
    }
}

/// Invoice ids are integers; anything else cannot name an invoice.
fn parse_id(raw: &str) -> Result<i32, ServerError> {
    raw.parse()
        .map_err(|_| EngineError::InvoiceNotFound(raw.to_string()).into())
}

fn parse_amount(amt: Option<f64>) -> Result<Option<Amount>, ServerError> {
    Ok(amt.map(Amount::from_major).transpose()?)
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<InvoiceListResponse>, ServerError> {
    let invoices = state
        .engine
        .list_invoices()
        .await?
        .into_iter()
        .map(|invoice| InvoiceSummary {
            id: invoice.id,
            comp_code: invoice.comp_code,
        })
        .collect();

    Ok(Json(InvoiceListResponse { invoices }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceDetailResponse>, ServerError> {
    let id = parse_id(&id)?;
    let invoice = state.engine.invoice(id).await?;

    Ok(Json(InvoiceDetailResponse {
        invoice: map_invoice_detail(invoice),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<InvoiceNew>, JsonRejection>,
) -> Result<(StatusCode, Json<InvoiceResponse>), ServerError> {
    let Json(payload) = payload?;
    let invoice = state
        .engine
        .new_invoice(InvoiceNewCmd {
            comp_code: payload.comp_code,
            amt: parse_amount(payload.amt)?,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InvoiceResponse {
            invoice: map_invoice(invoice),
        }),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<InvoiceUpdate>, JsonRejection>,
) -> Result<Json<InvoiceResponse>, ServerError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let invoice = state
        .engine
        .update_invoice(
            id,
            InvoiceUpdateCmd {
                amt: parse_amount(payload.amt)?,
            },
        )
        .await?;

    Ok(Json(InvoiceResponse {
        invoice: map_invoice(invoice),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, ServerError> {
    let id = parse_id(&id)?;
    state.engine.delete_invoice(id).await?;
    Ok(Json(Deleted::default()))
}
