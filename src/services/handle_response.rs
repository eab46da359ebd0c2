// ============================================================================
// RESPONSE INTERCEPTOR - Normaliza TODAS las respuestas del backend
// ============================================================================
// texto → JSON (vacío = payload ausente), sentinelas de sesión, status.
// Ante una falla de sesión: limpia ambos documentos y vuelve a la entrada
// de la app antes de rechazar. Ningún call site lo puentea.
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::utils::storage;

/// Error normalizado de la capa HTTP
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// El backend invalidó el token
    #[error("Your login is no longer valid. Please sign in again.")]
    InvalidToken,
    /// El backend invalidó la sesión
    #[error("Your session has expired. Please sign in again.")]
    InvalidSession,
    #[error("{0}")]
    Server(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request build error: {0}")]
    Build(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_session_fault(&self) -> bool {
        matches!(self, ApiError::InvalidToken | ApiError::InvalidSession)
    }
}

pub(crate) const GENERIC_SERVER_ERROR: &str = "Something went wrong. Please try again.";

// Sentinelas que el backend manda en `message`. El contrato es por string
// y se preserva tal cual; ésta es la única función que lo traduce a un
// error estructurado. El backend histórico emitió las dos variantes, con
// y sin punto final.
const INVALID_TOKEN_SENTINEL: &str = "Unauthorized: Invalid token";
const INVALID_SESSION_SENTINEL: &str = "Unauthorized: Invalid session";

pub(crate) fn session_fault(message: &str) -> Option<ApiError> {
    let normalized = message.trim().trim_end_matches('.');
    match normalized {
        INVALID_TOKEN_SENTINEL => Some(ApiError::InvalidToken),
        INVALID_SESSION_SENTINEL => Some(ApiError::InvalidSession),
        _ => None,
    }
}

/// Evaluación pura de una respuesta, en el orden del contrato:
/// cuerpo a texto → JSON (vacío no es error), sentinela (con cualquier
/// status), y recién después el status del transporte.
pub(crate) fn evaluate_payload(ok: bool, status: u16, text: &str) -> Result<Value, ApiError> {
    let payload: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) if ok => return Err(ApiError::Parse(e.to_string())),
            // cuerpo ilegible de una respuesta fallida: manda el status
            Err(_) => {
                return Err(ApiError::Server(format!(
                    "HTTP {}: {}",
                    status, GENERIC_SERVER_ERROR
                )))
            }
        }
    };

    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        if let Some(fault) = session_fault(message) {
            return Err(fault);
        }
    }

    if !ok {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
        return Err(ApiError::Server(message));
    }

    Ok(payload)
}

/// Interceptor aplicado a toda respuesta saliente del ApiClient.
pub async fn handle_response<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match evaluate_payload(ok, status, &text) {
        Ok(payload) => {
            // payload ausente: decodifica como objeto vacío para que los
            // response types (todos con defaults) salgan "falsy"
            let payload = if payload.is_null() {
                Value::Object(serde_json::Map::new())
            } else {
                payload
            };
            serde_json::from_value(payload).map_err(|e| ApiError::Parse(e.to_string()))
        }
        Err(err) => {
            if err.is_session_fault() {
                log::warn!("🔒 Sesión invalidada por el backend: {}", err);
                storage::clear_loc_data().await;
                storage::clear_auth_data().await;
                force_entry_route();
            }
            Err(err)
        }
    }
}

// Equivalente a location.replace("/"): vuelve a la entrada de la app
fn force_entry_route() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().replace("/");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_on_success_is_absent_payload_not_error() {
        assert_eq!(evaluate_payload(true, 200, ""), Ok(Value::Null));
        assert_eq!(evaluate_payload(true, 204, "   "), Ok(Value::Null));
    }

    #[test]
    fn success_body_resolves_with_parsed_payload() {
        let payload = evaluate_payload(true, 200, r#"{"success": true, "message": "OTP sent"}"#)
            .expect("payload");
        assert_eq!(payload["success"], json!(true));
    }

    #[test]
    fn invalid_session_sentinel_wins_over_any_status() {
        // incluso con HTTP 200 la sesión cae
        let result = evaluate_payload(true, 200, r#"{"message": "Unauthorized: Invalid session"}"#);
        assert_eq!(result, Err(ApiError::InvalidSession));

        let result =
            evaluate_payload(false, 401, r#"{"message": "Unauthorized: Invalid session."}"#);
        assert_eq!(result, Err(ApiError::InvalidSession));
    }

    #[test]
    fn invalid_token_sentinel_matches_both_historical_spellings() {
        for raw in [
            r#"{"message": "Unauthorized: Invalid token."}"#,
            r#"{"message": "Unauthorized: Invalid token"}"#,
        ] {
            assert_eq!(evaluate_payload(false, 401, raw), Err(ApiError::InvalidToken));
        }
    }

    #[test]
    fn the_two_session_faults_are_distinguishable_by_message() {
        assert_ne!(
            ApiError::InvalidToken.to_string(),
            ApiError::InvalidSession.to_string()
        );
    }

    #[test]
    fn near_miss_messages_are_not_session_faults() {
        assert_eq!(session_fault("Unauthorized"), None);
        assert_eq!(session_fault("Invalid token"), None);
        assert_eq!(session_fault("unauthorized: invalid token"), None);
    }

    #[test]
    fn non_success_status_uses_payload_message() {
        let result = evaluate_payload(false, 422, r#"{"message": "Phone number not registered"}"#);
        assert_eq!(
            result,
            Err(ApiError::Server("Phone number not registered".to_string()))
        );
    }

    #[test]
    fn non_success_status_without_message_falls_back_to_generic() {
        let result = evaluate_payload(false, 500, "");
        assert_eq!(result, Err(ApiError::Server(GENERIC_SERVER_ERROR.to_string())));

        let result = evaluate_payload(false, 500, r#"{"success": false}"#);
        assert_eq!(result, Err(ApiError::Server(GENERIC_SERVER_ERROR.to_string())));
    }

    #[test]
    fn unreadable_body_on_failed_response_reports_status() {
        let result = evaluate_payload(false, 502, "<html>Bad Gateway</html>");
        assert_eq!(
            result,
            Err(ApiError::Server(format!("HTTP 502: {}", GENERIC_SERVER_ERROR)))
        );
    }

    #[test]
    fn unreadable_body_on_success_is_a_parse_error() {
        assert!(matches!(
            evaluate_payload(true, 200, "not json"),
            Err(ApiError::Parse(_))
        ));
    }
}
