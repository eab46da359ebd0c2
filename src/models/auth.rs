use serde::{Deserialize, Serialize};

/// Documento de sesión persistido bajo la clave "authData".
/// Se crea al verificar el OTP y sólo lo tocan login/logout.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub token: String,
    pub promoter_id: String,
    pub vendor_id: String,
    pub project_id: String,
    #[serde(default)]
    pub city_id: String,
    #[serde(default)]
    pub city_name: String,
}

impl AuthData {
    /// La presencia del token define "autenticado"
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Mapea la respuesta de verify-otp al documento persistido.
    /// El primer projectId asignado es el vigente.
    pub fn from_verify(response: &VerifyOtpResponse) -> Option<Self> {
        let token = response.token.clone().filter(|t| !t.is_empty())?;
        let promoter = response.promoter.as_ref()?;

        Some(Self {
            token,
            promoter_id: promoter.id.clone(),
            vendor_id: promoter.vendor_id.clone(),
            project_id: promoter.project_ids.first().cloned().unwrap_or_default(),
            city_id: promoter.city_id.clone().unwrap_or_default(),
            city_name: promoter.city_name.clone().unwrap_or_default(),
        })
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SendOtpRequest {
    pub phone: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub otp: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub promoter: Option<PromoterInfo>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromoterInfo {
    pub id: String,
    pub vendor_id: String,
    #[serde(default)]
    pub project_ids: Vec<String>,
    #[serde(default)]
    pub city_id: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
}

/// Respuesta genérica {success, message} de los POST
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_response_maps_to_auth_data() {
        let response = VerifyOtpResponse {
            success: true,
            message: None,
            token: Some("abc".to_string()),
            promoter: Some(PromoterInfo {
                id: "p1".to_string(),
                vendor_id: "v1".to_string(),
                project_ids: vec!["pr1".to_string(), "pr2".to_string()],
                city_id: None,
                city_name: None,
            }),
        };

        let auth = AuthData::from_verify(&response).expect("auth data");
        assert_eq!(auth.token, "abc");
        assert_eq!(auth.promoter_id, "p1");
        assert_eq!(auth.vendor_id, "v1");
        assert_eq!(auth.project_id, "pr1");
        assert!(auth.has_token());
    }

    #[test]
    fn verify_response_without_token_yields_nothing() {
        let response = VerifyOtpResponse {
            success: false,
            ..Default::default()
        };
        assert!(AuthData::from_verify(&response).is_none());

        let empty_token = VerifyOtpResponse {
            success: true,
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(AuthData::from_verify(&empty_token).is_none());
    }

    #[test]
    fn auth_data_serializes_camel_case() {
        let auth = AuthData {
            token: "t".to_string(),
            promoter_id: "p1".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&auth).unwrap();
        assert_eq!(value["promoterId"], "p1");
        assert!(value.get("promoter_id").is_none());
    }
}
