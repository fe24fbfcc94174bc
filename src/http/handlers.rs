//! REST endpoint handlers.
//!
//! Each handler is a single service call plus response shaping; all error
//! branching lives in the central mapping in `response.rs`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::client::{CreateEmployeeInput, Employee};
use crate::http::server::AppState;
use crate::service::EmployeeError;

/// GET /api/v1/employee
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, EmployeeError> {
    Ok(Json(state.service.get_all_employees().await?))
}

/// GET /api/v1/employee/search/{fragment}
pub async fn search_employees(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> Result<Json<Vec<Employee>>, EmployeeError> {
    Ok(Json(state.service.search_by_name(&fragment).await?))
}

/// GET /api/v1/employee/{id}
pub async fn employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, EmployeeError> {
    Ok(Json(state.service.get_by_id(&id).await?))
}

/// GET /api/v1/employee/highestSalary
pub async fn highest_salary(State(state): State<AppState>) -> Result<Json<i64>, EmployeeError> {
    Ok(Json(state.service.highest_salary().await?))
}

/// GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn top_ten_earning_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, EmployeeError> {
    Ok(Json(state.service.top_ten_earning_names().await?))
}

/// POST /api/v1/employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeInput>,
) -> Result<(StatusCode, Json<Employee>), EmployeeError> {
    let created = state.service.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/v1/employee/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, EmployeeError> {
    let deleted = state.service.delete_by_id(&id).await?;
    Ok(format!("Employee: {} deleted successfully", deleted.name))
}
