// src/presentation/http/controllers/pages.rs
use crate::application::queries::pages::{
    GetComponentDatasOutput, GetComponentDatasQuery, GetPageComponentsOutput,
    GetPageComponentsQuery, GetPageDatasOutput, GetPageDatasQuery, GetPageOutput, GetPageQuery,
    GetPagesOutput, GetPagesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiQuery;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_page_index() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetPagesParams {
    /// Substring matched against page name and display name.
    #[serde(default)]
    pub search_key: Option<String>,
    /// 1-based page number.
    #[serde(default = "default_page_index")]
    pub page_index: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetPageParams {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetPageDatasParams {
    #[serde(default)]
    pub page_name: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default = "default_page_index")]
    pub page_index: u32,
}

#[utoipa::path(
    get,
    path = "/api/v1/pages",
    params(GetPagesParams),
    responses(
        (status = 200, description = "Filtered, paginated page list.", body = GetPagesOutput),
        (status = 400, description = "Malformed query string.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<GetPagesParams>,
) -> HttpResult<Json<GetPagesOutput>> {
    state
        .services
        .page_queries
        .get_pages(GetPagesQuery {
            search_key: params.search_key,
            page_index: params.page_index,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/page",
    params(GetPageParams),
    responses(
        (status = 200, description = "The page, or `null` when neither id nor name matches.", body = GetPageOutput),
        (status = 400, description = "Malformed query string.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_page(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<GetPageParams>,
) -> HttpResult<Json<GetPageOutput>> {
    state
        .services
        .page_queries
        .get_page(GetPageQuery {
            id: params.id,
            name: params.name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/{name}/components",
    params(("name" = String, Path, description = "Page name")),
    responses(
        (status = 200, description = "Components placed on the page.", body = GetPageComponentsOutput)
    ),
    tag = "Pages"
)]
pub async fn list_page_components(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
) -> HttpResult<Json<GetPageComponentsOutput>> {
    state
        .services
        .page_queries
        .get_page_components(GetPageComponentsQuery { name })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/page-datas",
    params(GetPageDatasParams),
    responses(
        (status = 200, description = "Data entries of the page.", body = GetPageDatasOutput),
        (status = 400, description = "Malformed query string.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No page matches the name or id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Page data"
)]
pub async fn list_page_datas(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<GetPageDatasParams>,
) -> HttpResult<Json<GetPageDatasOutput>> {
    state
        .services
        .page_queries
        .get_page_datas(GetPageDatasQuery {
            page_name: params.page_name,
            id: params.id,
            page_index: params.page_index,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/{name}/datas/{data_name}/components",
    params(
        ("name" = String, Path, description = "Page name"),
        ("data_name" = String, Path, description = "Page data name")
    ),
    responses(
        (status = 200, description = "Component data of the page data entry.", body = GetComponentDatasOutput)
    ),
    tag = "Page data"
)]
pub async fn list_component_datas(
    Extension(state): Extension<HttpState>,
    Path((page_name, page_data_name)): Path<(String, String)>,
) -> HttpResult<Json<GetComponentDatasOutput>> {
    state
        .services
        .page_queries
        .get_component_datas(GetComponentDatasQuery {
            page_name,
            page_data_name,
        })
        .await
        .into_http()
        .map(Json)
}
