//! HTTP query API over the guest search path.
//!
//! A thin validation layer: raw query parameters are checked and
//! converted into a [`SearchQuery`], the guest fetcher does the work,
//! and listings are returned under their original wire names. Field
//! errors come back as a 400 with a JSON message.

use actix_web::http::StatusCode;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, ResponseError};
use joblens_core::{AppConfig, Arrangement, CoreError, JobType, SearchQuery, TimePosted};
use joblens_guest::{GuestFetcher, HttpTransport, PageTransport};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

/// Request-level failures, rendered as JSON error bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// Query parameters of `GET /linkedin/job-listings`.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    keywords: String,
    location: String,
    distance: u16,
    job_type: String,
    time_posted: String,
    /// Comma-separated, e.g. `remote,onSite`
    job_arrangements: String,
    num_results: u32,
}

impl ListingParams {
    fn into_query(self) -> Result<SearchQuery, ApiError> {
        let job_type = JobType::from_str(&self.job_type)?;
        let time_posted = TimePosted::from_str(&self.time_posted)?;
        let arrangements = self
            .job_arrangements
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Arrangement::from_str)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(SearchQuery::new(
            self.keywords,
            self.location,
            self.distance,
            job_type,
            time_posted,
            arrangements,
            self.num_results,
        )?)
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

async fn job_listings<T>(
    params: web::Query<ListingParams>,
    fetcher: web::Data<GuestFetcher<T>>,
) -> Result<HttpResponse, ApiError>
where
    T: PageTransport + Send + Sync + 'static,
{
    let query = params.into_inner().into_query()?;
    tracing::debug!(
        "API search '{}' in '{}' ({} results)",
        query.keywords(),
        query.location(),
        query.target_results()
    );

    let listings = fetcher.fetch_listings(&query).await;
    Ok(HttpResponse::Ok().json(listings))
}

/// Registers the API routes for a fetcher over transport `T`.
pub fn routes<T>(cfg: &mut web::ServiceConfig)
where
    T: PageTransport + Send + Sync + 'static,
{
    cfg.service(health)
        .route("/linkedin/job-listings", web::get().to(job_listings::<T>));
}

/// Runs the HTTP API until the process is stopped.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let fetcher = web::Data::new(GuestFetcher::new(&config.guest)?);
    let bind_address = config.server.bind_address.clone();
    let port = config.server.port;
    tracing::info!("Listing API on http://{}:{}", bind_address, port);

    HttpServer::new(move || {
        App::new()
            .app_data(fetcher.clone())
            .configure(routes::<HttpTransport>)
    })
    .bind((bind_address.as_str(), port))?
    .run()
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use async_trait::async_trait;
    use joblens_core::GuestConfig;
    use url::Url;

    struct StaticTransport {
        body: String,
    }

    #[async_trait]
    impl PageTransport for StaticTransport {
        async fn fetch(&self, _url: &Url, _user_agent: &str) -> joblens_guest::Result<String> {
            Ok(self.body.clone())
        }
    }

    fn card(title: &str) -> String {
        format!(
            r#"<div class="base-card relative job-search-card">
              <a class="base-card__full-link" href="https://in.linkedin.com/jobs/view/1">v</a>
              <h3 class="base-search-card__title">{title}</h3>
              <h4 class="base-search-card__subtitle">Acme</h4>
              <span class="job-search-card__location">Pune</span>
              <span class="job-posting-benefits__text">Actively Hiring</span>
              <time class="job-search-card__listdate--new">1 day ago</time>
            </div>"#
        )
    }

    fn fetcher_over(body: String) -> web::Data<GuestFetcher<StaticTransport>> {
        web::Data::new(GuestFetcher::with_transport(
            StaticTransport { body },
            &GuestConfig::default(),
        ))
    }

    const VALID_QUERY: &str = "/linkedin/job-listings?keywords=rust&location=Pune&distance=25\
        &job_type=fullTime&time_posted=pastWeek&job_arrangements=remote,onSite&num_results=10";

    #[actix_web::test]
    async fn test_health_reports_ok() {
        let app = test::init_service(
            App::new()
                .app_data(fetcher_over(String::new()))
                .configure(routes::<StaticTransport>),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
    }

    #[actix_web::test]
    async fn test_listings_served_under_wire_names() {
        let app = test::init_service(
            App::new()
                .app_data(fetcher_over(card("Backend Engineer")))
                .configure(routes::<StaticTransport>),
        )
        .await;

        let request = test::TestRequest::get().uri(VALID_QUERY).to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body: serde_json::Value = test::read_body_json(response).await;
        let listings = body.as_array().expect("array body");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0]["job_title"], "Backend Engineer");
        assert_eq!(listings[0]["company_name"], "Acme");
    }

    #[actix_web::test]
    async fn test_unknown_job_type_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(fetcher_over(String::new()))
                .configure(routes::<StaticTransport>),
        )
        .await;

        let uri = VALID_QUERY.replace("job_type=fullTime", "job_type=bogus");
        let request = test::TestRequest::get().uri(&uri).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["error"].as_str().expect("error message").contains("bogus"));
    }

    #[actix_web::test]
    async fn test_out_of_range_distance_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(fetcher_over(String::new()))
                .configure(routes::<StaticTransport>),
        )
        .await;

        let uri = VALID_QUERY.replace("distance=25", "distance=80");
        let request = test::TestRequest::get().uri(&uri).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_missing_parameter_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(fetcher_over(String::new()))
                .configure(routes::<StaticTransport>),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/linkedin/job-listings?keywords=rust")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // `use actix_web::test` shadows the built-in attribute, so name it explicitly.
    #[::core::prelude::v1::test]
    fn test_params_validate_into_query() {
        let params = ListingParams {
            keywords: "rust".to_string(),
            location: "Pune".to_string(),
            distance: 25,
            job_type: "fullTime".to_string(),
            time_posted: "pastDay".to_string(),
            job_arrangements: "remote, onSite".to_string(),
            num_results: 40,
        };

        let query = params.into_query().expect("valid params");
        assert_eq!(query.job_type(), JobType::FullTime);
        assert_eq!(query.arrangements().len(), 2);
        assert_eq!(query.target_results(), 40);
    }
}
