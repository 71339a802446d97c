use actix_web::{get, web, HttpResponse};
use chrono::{FixedOffset, Offset, Utc};
use futures::future::join_all;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog;
use crate::error::{AppError, Result};
use crate::models::{LearnerProfileSummary, RecommendationData, RecommendationResponse};
use crate::services::{build_learner_profile, ContextualBooster, RecommendationEngine};
use graphy_client::{GraphyClient, GraphyError, Learner};

pub struct RecommendationHandlerState {
    pub graphy: Arc<GraphyClient>,
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub email: Option<String>,
}

#[get("/api/dashboard/recommendations")]
pub async fn get_recommendations(
    query: web::Query<RecommendationQuery>,
    state: web::Data<RecommendationHandlerState>,
) -> Result<HttpResponse> {
    let email = match query.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => email,
        _ => {
            return Err(AppError::BadRequest(
                "Email parameter is required".to_string(),
            ))
        }
    };

    let learner = resolve_learner(&state.graphy, email).await?;

    // History failures degrade to an empty profile; the learner still gets
    // popular content.
    let enrollments = match state.graphy.enrollments(&learner.id).await {
        Ok(enrollments) => enrollments,
        Err(e) => {
            warn!(
                error = %e,
                learner_id = %learner.id,
                "Failed to fetch enrollments, continuing with empty history"
            );
            Vec::new()
        }
    };

    let progress_reports = {
        let fetches = enrollments
            .iter()
            .map(|enrollment| state.graphy.progress_report(&learner.id, &enrollment.product_id));
        join_all(fetches)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(report) => report,
                Err(e) => {
                    warn!(error = %e, "Failed to fetch progress report, skipping");
                    None
                }
            })
            .collect()
    };

    let all_products = catalog::all_products();
    let popular_products = catalog::popular_products();

    let profile = build_learner_profile(learner, enrollments, progress_reports, &all_products);
    let recommendations = RecommendationEngine::new()
        .generate(&profile, &all_products, &popular_products)
        .await;

    let offset =
        FixedOffset::east_opt(state.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
    let now = Utc::now().with_timezone(&offset);
    let recommendations = ContextualBooster::new().enhance(recommendations, &profile, now);

    info!(
        learner_id = %profile.learner.id,
        count = recommendations.len(),
        "Serving dashboard recommendations"
    );

    Ok(HttpResponse::Ok().json(RecommendationResponse {
        success: true,
        data: RecommendationData {
            recommendations,
            learner_profile: LearnerProfileSummary::from(&profile),
            generated_at: Utc::now(),
        },
    }))
}

async fn resolve_learner(graphy: &GraphyClient, email: &str) -> Result<Learner> {
    match graphy.learner_by_email(email).await {
        Ok(Some(learner)) => Ok(learner),
        Ok(None) => Err(AppError::NotFound("Learner not found".to_string())),
        Err(GraphyError::NotConfigured) => {
            info!(email, "Graphy API not configured, serving demo identity");
            Ok(Learner::demo(email))
        }
        Err(e) => Err(e.into()),
    }
}
