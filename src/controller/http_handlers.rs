use actix_web::http::{StatusCode, header};
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::MutexGuard;

use super::AppState;
use super::round::{delete_round, save_completed};
use crate::catalog::CourseStore;
use crate::error::CoreError;
use crate::model::{CourseId, RoundId};
use crate::session::{MAX_STROKES, MIN_STROKES, RoundSession};
use crate::storage::{filter_rounds, load_history};
use crate::view::{self, HistoryRow};

#[derive(Deserialize)]
pub struct StartForm {
    pub course: String,
}

/// `hole` is the 1-based hole number throughout the form API.
#[derive(Deserialize)]
pub struct HoleForm {
    pub hole: usize,
}

#[derive(Deserialize)]
pub struct ScoreForm {
    pub hole: usize,
    pub score: i32,
}

#[derive(Deserialize)]
pub struct StrokeForm {
    pub hole: usize,
    pub delta: i32,
}

/// Register every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/course/{id}", web::get().to(course_overview))
        .route("/round", web::get().to(scorecard))
        .route("/round/start", web::post().to(start_round))
        .route("/round/score", web::post().to(score_hole))
        .route("/round/stroke", web::post().to(step_stroke))
        .route("/round/par", web::post().to(score_par))
        .route("/round/complete", web::post().to(complete_round))
        .route("/round/abandon", web::post().to(abandon_round))
        .route("/rounds", web::get().to(history))
        .route("/rounds/{id}/delete", web::post().to(delete_saved_round))
        .route("/health", web::get().to(HttpResponse::Ok));
}

fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map_or("", |s| s.as_str())
}

fn flag(query: &HashMap<String, String>, key: &str) -> bool {
    match get_param_str(query, key) {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false),
    }
}

#[must_use]
pub fn error_response(e: &CoreError) -> HttpResponse {
    let status = match e {
        CoreError::Parse(_) => StatusCode::BAD_REQUEST,
        CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        CoreError::Catalog(_) | CoreError::Storage(_) | CoreError::Other(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    HttpResponse::build(status).json(json!({"error": e.to_string()}))
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

fn lock_session(state: &AppState) -> Result<MutexGuard<'_, RoundSession>, HttpResponse> {
    state.session.lock().map_err(|_| {
        tracing::error!("round session lock poisoned");
        error_response(&CoreError::Other("round session unavailable".into()))
    })
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let q = get_param_str(&query, "q").trim();
    let courses = state.catalog.search(q);
    html(view::render_course_list(&courses, q))
}

pub async fn course_overview(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let id = CourseId::new(path.into_inner());
    match state.catalog.course_by_id(&id) {
        Some(course) => html(view::render_course_overview(course)),
        None => error_response(&CoreError::NotFound(format!("course '{id}'"))),
    }
}

pub async fn start_round(form: web::Form<StartForm>, state: Data<AppState>) -> impl Responder {
    let id = CourseId::new(form.into_inner().course.trim());
    let Some(course) = state.catalog.course_by_id(&id) else {
        return error_response(&CoreError::NotFound(format!("course '{id}'")));
    };
    let mut session = match lock_session(&state) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    // The displaced round, if any, has already been logged by the session.
    let _ = session.start(course);
    see_other("/round")
}

pub async fn scorecard(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let json = flag(&query, "json");
    let session = match lock_session(&state) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let (Some(round), Some(course)) = (session.current_round(), session.current_course()) else {
        if json {
            return error_response(&CoreError::NotFound("no active round".into()));
        }
        return html(view::render_no_round());
    };

    if json {
        HttpResponse::Ok().json(json!({
            "round": round,
            "holes_played": round.holes_played(),
            "total_score": round.total_score(),
            "front_nine": round.front_nine(),
            "back_nine": round.back_nine(),
            "par_for_played_holes": round.par_for_played_holes(course),
            "to_par": round.to_par(course),
            "is_complete": round.is_complete(),
            "is_partial": round.is_partial(),
        }))
    } else {
        html(view::render_scorecard(round, course))
    }
}

pub async fn score_hole(form: web::Form<ScoreForm>, state: Data<AppState>) -> impl Responder {
    let form = form.into_inner();
    if !(MIN_STROKES..=MAX_STROKES).contains(&form.score) {
        return error_response(&CoreError::Parse(format!(
            "score must be between {MIN_STROKES} and {MAX_STROKES}, got {}",
            form.score
        )));
    }
    let mut session = match lock_session(&state) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    if let Some(handle) = form.hole.checked_sub(1).and_then(|i| session.handle(i)) {
        handle.set(&mut session, form.score);
    }
    see_other("/round")
}

pub async fn step_stroke(form: web::Form<StrokeForm>, state: Data<AppState>) -> impl Responder {
    let form = form.into_inner();
    if form.delta != 1 && form.delta != -1 {
        return error_response(&CoreError::Parse(format!(
            "delta must be 1 or -1, got {}",
            form.delta
        )));
    }
    let mut session = match lock_session(&state) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    if let Some(index) = form.hole.checked_sub(1) {
        if form.delta > 0 {
            session.add_stroke(index);
        } else {
            session.subtract_stroke(index);
        }
    }
    see_other("/round")
}

pub async fn score_par(form: web::Form<HoleForm>, state: Data<AppState>) -> impl Responder {
    let mut session = match lock_session(&state) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    if let Some(index) = form.hole.checked_sub(1) {
        session.score_par(index);
    }
    see_other("/round")
}

pub async fn complete_round(state: Data<AppState>) -> impl Responder {
    let completed = match lock_session(&state) {
        Ok(mut session) => session.complete(),
        Err(resp) => return resp,
    };
    let Some(round) = completed else {
        return error_response(&CoreError::Parse("no active round".into()));
    };

    match save_completed(round, state.store.as_ref()).await {
        Ok(_) => see_other("/rounds"),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "error": e.to_string(),
            "round": e.round,
        })),
    }
}

pub async fn abandon_round(state: Data<AppState>) -> impl Responder {
    match lock_session(&state) {
        Ok(mut session) => {
            session.abandon();
            see_other("/")
        }
        Err(resp) => resp,
    }
}

pub async fn history(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let q = get_param_str(&query, "q").trim();
    let catalog = state.catalog.as_ref();
    let rounds = match load_history(state.store.as_ref(), catalog).await {
        Ok(rounds) => rounds,
        Err(e) => return error_response(&e),
    };
    let matching = filter_rounds(&rounds, catalog, q);

    if flag(&query, "json") {
        return HttpResponse::Ok().json(&matching);
    }
    let rows: Vec<HistoryRow<'_>> = matching
        .into_iter()
        .map(|round| HistoryRow {
            round,
            course: catalog
                .course_by_id(round.course_id())
                .unwrap_or_else(|| catalog.default_course()),
        })
        .collect();
    html(view::render_history(&rows, q))
}

pub async fn delete_saved_round(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    let raw = path.into_inner();
    let id = match RoundId::parse(&raw) {
        Ok(id) => id,
        Err(e) => return error_response(&CoreError::Parse(format!("round id '{raw}': {e}"))),
    };
    let store = state.store.as_ref();
    let round = match store.get(id).await {
        Ok(Some(round)) => round,
        Ok(None) => return error_response(&CoreError::NotFound(format!("round {id}"))),
        Err(e) => return error_response(&e.into()),
    };
    match delete_round(&round, store).await {
        Ok(()) => see_other("/rounds"),
        Err(e) => error_response(&e.into()),
    }
}
