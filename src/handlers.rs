use crate::errors::AppError;
use crate::factors;
use crate::models::{
    Activity, DeleteResponse, LogActivityRequest, StatsResponse, SummaryResponse,
};
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let data = state.data.lock().await;
    let today = stats::today_total(&data.activities);
    Html(render_index(&date, today, data.activities.len()))
}

pub async fn list_activities(State(state): State<AppState>) -> Json<Vec<Activity>> {
    let data = state.data.lock().await;
    Json(data.activities.clone())
}

pub async fn create_activity(
    State(state): State<AppState>,
    Json(payload): Json<LogActivityRequest>,
) -> Result<(StatusCode, Json<Activity>), AppError> {
    if !payload.amount.is_finite() || payload.amount <= 0.0 {
        return Err(AppError::bad_request("amount must be a positive number"));
    }
    let date = NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?;

    let factor = factors::factor(payload.kind);
    let activity = Activity {
        id: Uuid::new_v4().to_string(),
        date: date.to_string(),
        category: factor.category,
        kind: payload.kind,
        amount: payload.amount,
        unit: factor.unit.to_string(),
        co2: stats::calculate_co2(payload.kind, payload.amount),
    };

    let mut data = state.data.lock().await;
    data.activities.push(activity.clone());
    persist_data(&state.data_path, &data).await?;

    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut data = state.data.lock().await;
    let position = data
        .activities
        .iter()
        .position(|activity| activity.id == id)
        .ok_or_else(|| AppError::not_found(format!("no activity with id {id}")))?;

    data.activities.remove(position);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(DeleteResponse {
        removed: id,
        remaining: data.activities.len(),
    }))
}

pub async fn clear_activities(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    data.activities.clear();
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_summary(&data.activities)))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(StatsResponse {
        daily: stats::last_n_days(&data.activities, 30),
        today_by_category: stats::today_category_totals(&data.activities),
    }))
}

fn build_summary(activities: &[Activity]) -> SummaryResponse {
    let last_7 = stats::last_n_days(activities, 7);
    let last_30 = stats::last_n_days(activities, 30);
    let week_total: f64 = last_7.iter().map(|day| day.total).sum();
    let month_total: f64 = last_30.iter().map(|day| day.total).sum();
    let weekly_avg = if last_7.is_empty() {
        0.0
    } else {
        week_total / last_7.len() as f64
    };

    SummaryResponse {
        date: today_string(),
        today_total: stats::today_total(activities),
        today_by_category: stats::today_category_totals(activities),
        week_total,
        month_total,
        weekly_avg,
        total_entries: activities.len(),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
