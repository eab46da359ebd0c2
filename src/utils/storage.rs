// ============================================================================
// STORAGE - Documentos de sesión persistidos
// ============================================================================
// Dos blobs JSON en localStorage: "authData" y "locData". El contrato es
// asíncrono y nunca lanza: una falla de I/O degrada a None / false y se
// loguea. La ausencia de un documento es un estado válido y esperado.
// ============================================================================

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::models::{AuthData, LocationData};
use crate::utils::constants::{AUTH_DATA_KEY, LOC_DATA_KEY};

fn save_to_storage<T: Serialize>(key: &str, value: &T) -> bool {
    match LocalStorage::set(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ Error guardando {}: {}", key, e);
            false
        }
    }
}

fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

/// Guarda el documento de autenticación completo.
pub async fn store_auth_data(data: &AuthData) -> bool {
    save_to_storage(AUTH_DATA_KEY, data)
}

/// Guarda el documento de ubicación completo.
pub async fn store_loc_data(data: &LocationData) -> bool {
    save_to_storage(LOC_DATA_KEY, data)
}

pub async fn get_auth_data() -> Option<AuthData> {
    load_from_storage(AUTH_DATA_KEY)
}

pub async fn get_loc_data() -> Option<LocationData> {
    load_from_storage(LOC_DATA_KEY)
}

/// Proyecta un campo (clave camelCase del wire) del documento de auth.
/// Deserializa el blob entero y recorta el campo pedido.
pub async fn get_auth_field(field: &str) -> Option<String> {
    project_field(&get_auth_data().await?, field)
}

/// Ídem para el documento de ubicación.
pub async fn get_loc_field(field: &str) -> Option<String> {
    project_field(&get_loc_data().await?, field)
}

fn project_field<T: Serialize>(doc: &T, field: &str) -> Option<String> {
    match serde_json::to_value(doc) {
        Ok(Value::Object(map)) => map
            .get(field)
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// Borra el documento de auth. Borrar lo ya borrado sigue siendo éxito.
pub async fn clear_auth_data() -> bool {
    LocalStorage::delete(AUTH_DATA_KEY);
    true
}

pub async fn clear_loc_data() -> bool {
    LocalStorage::delete(LOC_DATA_KEY);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_field_uses_wire_names() {
        let auth = AuthData {
            token: "abc".to_string(),
            promoter_id: "p1".to_string(),
            vendor_id: "v1".to_string(),
            project_id: "pr1".to_string(),
            ..Default::default()
        };

        assert_eq!(project_field(&auth, "token").as_deref(), Some("abc"));
        assert_eq!(project_field(&auth, "promoterId").as_deref(), Some("p1"));
        // el nombre interno snake_case no existe en el wire
        assert_eq!(project_field(&auth, "promoter_id"), None);
        // un campo vacío cuenta como ausente
        assert_eq!(project_field(&auth, "cityId"), None);
    }

    #[test]
    fn project_field_on_location_document() {
        let location = LocationData {
            activity_loc_id: "loc-9".to_string(),
            activity_loc_name: "Green Valley".to_string(),
            activity_id: "act-1".to_string(),
            ..Default::default()
        };

        assert_eq!(
            project_field(&location, "activityLocId").as_deref(),
            Some("loc-9")
        );
        assert_eq!(project_field(&location, "societyId"), None);
    }
}
