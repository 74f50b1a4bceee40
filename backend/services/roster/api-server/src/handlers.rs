// backend/services/roster/api-server/src/handlers.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use roster::application::generate_birthday_message::GenerateBirthdayMessageCommand;
use roster::application::get_member::GetMemberQuery;
use roster::application::list_members::ListMembersQuery;
use roster::application::register_member::RegisterMemberCommand;
use roster::application::send_birthday_email::SendBirthdayEmailCommand;
use roster::domain::entities::Member;
use roster::domain::models::{DeliveryResult, GeneratedMessage, RankedMember};
use roster::domain::value_objects::{Language, MemberId, Tone};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MessageParams {
    pub tone: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmailParams {
    pub tone: Option<String>,
    pub dry_run: Option<bool>,
}

fn parse_tone(raw: Option<&str>) -> ApiResult<Tone> {
    Ok(raw.map(str::parse::<Tone>).transpose()?.unwrap_or_default())
}

pub async fn health() -> &'static str {
    "ok"
}

/// POST /members
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterMemberCommand>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Member>)> {
    let Json(command) = payload?;
    let member = state.register_member.execute(command).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /members?sort_by_birthday&upcoming_only&window_days
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListMembersQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<RankedMember>>> {
    let Query(query) = query?;
    Ok(Json(state.list_members.execute(query).await?))
}

/// GET /members/{id}
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<RankedMember>> {
    let member_id: MemberId = id.parse()?;
    Ok(Json(state.get_member.execute(GetMemberQuery { member_id }).await?))
}

/// POST /members/{id}/birthday-message?tone&language
pub async fn generate_birthday_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Result<Query<MessageParams>, QueryRejection>,
) -> ApiResult<Json<GeneratedMessage>> {
    let Query(params) = params?;
    let command = GenerateBirthdayMessageCommand {
        member_id: id.parse()?,
        tone: parse_tone(params.tone.as_deref())?,
        language: params.language.map(Language::try_new).transpose()?,
    };

    Ok(Json(state.generate_message.execute(command).await?))
}

/// POST /members/{id}/send-email?tone&dry_run (dry_run vaut true par défaut)
pub async fn send_birthday_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> ApiResult<Json<DeliveryResult>> {
    let Query(params) = params?;
    let command = SendBirthdayEmailCommand {
        member_id: id.parse()?,
        tone: parse_tone(params.tone.as_deref())?,
        dry_run: params.dry_run.unwrap_or(true),
    };

    Ok(Json(state.send_email.execute(command).await?))
}
