// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio. Toda respuesta pasa por handle_response.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::models::auth::{SendOtpRequest, VerifyOtpRequest};
use crate::models::{ActivityLocationsResponse, DashboardData, DashboardResponse, StatusResponse, VerifyOtpResponse};
use crate::services::handle_response::{handle_response, ApiError};
use crate::utils::query::query_string;
use crate::utils::storage;

/// Cliente API - sólo requests HTTP
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url.clone(),
        }
    }

    /// Headers comunes: api key + Accept, y Bearer cuando hay token
    /// guardado. Los multipart no fijan Content-Type (el browser pone
    /// el boundary).
    async fn base_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let mut builder = builder
            .header("x-api-key", &CONFIG.x_api_key)
            .header("Accept", "application/json");

        if let Some(token) = storage::get_auth_field("token").await {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        builder
    }

    /// Pide un OTP para el teléfono dado.
    pub async fn send_otp(&self, phone: &str) -> Result<StatusResponse, ApiError> {
        let url = format!("{}/auth/send-otp", self.base_url);

        log::info!("📨 Enviando OTP");

        let response = self
            .base_headers(Request::post(&url))
            .await
            .json(&SendOtpRequest {
                phone: phone.to_string(),
            })
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(response).await
    }

    /// Verifica el OTP; la respuesta trae token + datos del promotor.
    pub async fn verify_otp(&self, phone: &str, otp: &str) -> Result<VerifyOtpResponse, ApiError> {
        let url = format!("{}/auth/verify-otp", self.base_url);

        let response = self
            .base_headers(Request::post(&url))
            .await
            .json(&VerifyOtpRequest {
                phone: phone.to_string(),
                otp: otp.to_string(),
            })
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(response).await
    }

    /// Sociedades asignadas, paginadas y filtradas por búsqueda.
    pub async fn get_activity_locations(
        &self,
        query: &SocietyQuery,
    ) -> Result<ActivityLocationsResponse, ApiError> {
        let qs = query_string(&[
            ("limit", query.limit.to_string()),
            ("page", query.page.to_string()),
            ("search", query.search.clone()),
            ("projectId", query.project_id.clone()),
            ("cityId", query.city_id.clone()),
        ]);
        let url = format!("{}/app/getAllActivityLocations?{}", self.base_url, qs);

        let response = self
            .base_headers(Request::get(&url))
            .await
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(response).await
    }

    /// Dashboard con los dos scopes en una sola respuesta.
    pub async fn get_dashboard_data(
        &self,
        query: &DashboardQuery,
    ) -> Result<DashboardData, ApiError> {
        let qs = query_string(&[
            ("activityLocId", query.activity_loc_id.clone()),
            ("promoterId", query.promoter_id.clone()),
            ("todaysPage", query.todays_page.to_string()),
            ("totalPage", query.total_page.to_string()),
            ("todaysLimit", query.todays_limit.to_string()),
            ("totalLimit", query.total_limit.to_string()),
        ]);
        let url = format!("{}/app/getDashboardData?{}", self.base_url, qs);

        log::info!(
            "📊 Dashboard: todaysPage={} totalPage={}",
            query.todays_page,
            query.total_page
        );

        let response = self
            .base_headers(Request::get(&url))
            .await
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let parsed: DashboardResponse = handle_response(response).await?;
        Ok(parsed.data)
    }

    /// Crea una entrada de pedido (multipart con evidencia fotográfica).
    pub async fn create_order_entry(
        &self,
        fields: &OrderEntryFields,
        order_image: &File,
        profile_image: Option<&File>,
    ) -> Result<StatusResponse, ApiError> {
        let url = format!("{}/order", self.base_url);

        let form = FormData::new().map_err(|_| ApiError::Build("FormData".to_string()))?;
        let _ = form.append_with_str("promoterId", &fields.promoter_id);
        let _ = form.append_with_str("projectId", &fields.project_id);
        let _ = form.append_with_str("activityLocId", &fields.activity_loc_id);
        let _ = form.append_with_str("vendorId", &fields.vendor_id);
        let _ = form.append_with_str("activityId", &fields.activity_id);

        if !fields.name.is_empty() {
            let _ = form.append_with_str("name", &fields.name);
        }
        if !fields.phone.is_empty() {
            let _ = form.append_with_str("phone", &fields.phone);
        }

        let stamp = chrono::Utc::now().timestamp_millis();
        let _ = form.append_with_blob_and_filename(
            "orderImage",
            order_image,
            &format!("photo_{}.jpg", stamp),
        );
        if let Some(profile) = profile_image {
            let _ = form.append_with_blob_and_filename(
                "profileImage",
                profile,
                &format!("profile_{}.jpg", stamp),
            );
        }

        log::info!("📝 Creando entrada de pedido en {}", fields.activity_loc_id);

        let response = self
            .base_headers(Request::post(&url))
            .await
            .body(form)
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(response).await
    }

    /// Sube imágenes de la sociedad (multipart, una o más).
    pub async fn upload_images(
        &self,
        images: &[File],
        activity_loc_id: &str,
    ) -> Result<StatusResponse, ApiError> {
        let url = format!("{}/app/uploadImages", self.base_url);

        let form = FormData::new().map_err(|_| ApiError::Build("FormData".to_string()))?;
        let stamp = chrono::Utc::now().timestamp_millis();
        for (i, image) in images.iter().enumerate() {
            let _ = form.append_with_blob_and_filename(
                "images",
                image,
                &format!("photo_{}_{}.jpg", stamp, i),
            );
        }
        let _ = form.append_with_str("activityLocId", activity_loc_id);

        log::info!("📤 Subiendo {} imágenes de sociedad", images.len());

        let response = self
            .base_headers(Request::post(&url))
            .await
            .body(form)
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct SocietyQuery {
    pub limit: u32,
    pub page: u32,
    pub search: String,
    pub project_id: String,
    pub city_id: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct DashboardQuery {
    pub activity_loc_id: String,
    pub promoter_id: String,
    pub todays_page: u32,
    pub total_page: u32,
    pub todays_limit: u32,
    pub total_limit: u32,
}

/// Campos de sesión que acompañan al multipart de /order
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OrderEntryFields {
    pub promoter_id: String,
    pub project_id: String,
    pub activity_loc_id: String,
    pub vendor_id: String,
    pub activity_id: String,
    pub name: String,
    pub phone: String,
}
