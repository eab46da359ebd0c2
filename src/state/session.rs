// ============================================================================
// SESSION GATE - Fase de sesión + redirects forzados
// ============================================================================
// Funciones puras: los efectos (navegar) los ejecuta el consumidor (App).
// ============================================================================

use crate::models::{AuthData, LocationData};

/// Fase de sesión derivada de los dos documentos persistidos
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    AuthenticatedNoLocation,
    AuthenticatedWithLocation,
}

/// Función pura y total: sólo miran la presencia del token y del
/// activityLocId. Un string vacío cuenta como ausente.
pub fn classify(auth: Option<&AuthData>, location: Option<&LocationData>) -> SessionPhase {
    let has_token = auth.map(AuthData::has_token).unwrap_or(false);
    if !has_token {
        return SessionPhase::Unauthenticated;
    }

    let has_location = location.map(LocationData::has_location).unwrap_or(false);
    if has_location {
        SessionPhase::AuthenticatedWithLocation
    } else {
        SessionPhase::AuthenticatedNoLocation
    }
}

/// Pantallas de la app. Render condicional, sin crate de router.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Login,
    Otp { phone: String },
    Location,
    Dashboard,
    CreateEntry,
    UploadImages,
}

impl Route {
    /// Login y OTP quedan exentas del gate para no entrar en loops
    /// de redirect durante el flujo de autenticación.
    pub fn is_auth_free(&self) -> bool {
        matches!(self, Route::Login | Route::Otp { .. })
    }
}

/// Decide el redirect forzado para (fase, ruta actual). None = se queda.
pub fn gate(phase: SessionPhase, route: &Route) -> Option<Route> {
    match phase {
        SessionPhase::Unauthenticated => {
            if route.is_auth_free() {
                None
            } else {
                Some(Route::Login)
            }
        }
        SessionPhase::AuthenticatedNoLocation => {
            if matches!(route, Route::Location) {
                None
            } else {
                Some(Route::Location)
            }
        }
        SessionPhase::AuthenticatedWithLocation => {
            // La selección no se cambia después: fuera de login/otp/location
            if route.is_auth_free() || matches!(route, Route::Location) {
                Some(Route::Dashboard)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(token: &str) -> AuthData {
        AuthData {
            token: token.to_string(),
            promoter_id: "p1".to_string(),
            vendor_id: "v1".to_string(),
            project_id: "pr1".to_string(),
            ..Default::default()
        }
    }

    fn location(id: &str) -> LocationData {
        LocationData {
            activity_loc_id: id.to_string(),
            activity_loc_name: "Green Valley".to_string(),
            activity_id: "a1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn classify_without_token_is_unauthenticated() {
        assert_eq!(classify(None, None), SessionPhase::Unauthenticated);
        assert_eq!(
            classify(None, Some(&location("x"))),
            SessionPhase::Unauthenticated
        );
        // token vacío cuenta como ausente
        assert_eq!(
            classify(Some(&auth("")), Some(&location("x"))),
            SessionPhase::Unauthenticated
        );
    }

    #[test]
    fn classify_with_token_and_without_location() {
        assert_eq!(
            classify(Some(&auth("t")), None),
            SessionPhase::AuthenticatedNoLocation
        );
        assert_eq!(
            classify(Some(&auth("t")), Some(&location(""))),
            SessionPhase::AuthenticatedNoLocation
        );
    }

    #[test]
    fn classify_with_token_and_location() {
        assert_eq!(
            classify(Some(&auth("t")), Some(&location("x"))),
            SessionPhase::AuthenticatedWithLocation
        );
    }

    #[test]
    fn classify_is_deterministic() {
        let a = auth("t");
        let l = location("x");
        let first = classify(Some(&a), Some(&l));
        for _ in 0..10 {
            assert_eq!(classify(Some(&a), Some(&l)), first);
        }
    }

    #[test]
    fn unauthenticated_is_forced_to_login_except_on_auth_free_routes() {
        let phase = SessionPhase::Unauthenticated;
        assert_eq!(gate(phase, &Route::Dashboard), Some(Route::Login));
        assert_eq!(gate(phase, &Route::CreateEntry), Some(Route::Login));
        assert_eq!(gate(phase, &Route::UploadImages), Some(Route::Login));
        assert_eq!(gate(phase, &Route::Location), Some(Route::Login));
        // exentas: evita el loop de redirect en el flujo de login
        assert_eq!(gate(phase, &Route::Login), None);
        assert_eq!(
            gate(
                phase,
                &Route::Otp {
                    phone: "9876543210".to_string()
                }
            ),
            None
        );
    }

    #[test]
    fn no_location_is_forced_to_location_screen() {
        let phase = SessionPhase::AuthenticatedNoLocation;
        assert_eq!(gate(phase, &Route::Login), Some(Route::Location));
        assert_eq!(gate(phase, &Route::Dashboard), Some(Route::Location));
        assert_eq!(gate(phase, &Route::Location), None);
    }

    #[test]
    fn full_session_is_forced_off_auth_and_location_routes() {
        let phase = SessionPhase::AuthenticatedWithLocation;
        assert_eq!(gate(phase, &Route::Login), Some(Route::Dashboard));
        assert_eq!(gate(phase, &Route::Location), Some(Route::Dashboard));
        assert_eq!(gate(phase, &Route::Dashboard), None);
        assert_eq!(gate(phase, &Route::CreateEntry), None);
        assert_eq!(gate(phase, &Route::UploadImages), None);
    }
}
