use serde::{Deserialize, Serialize};

/// Documento de ubicación persistido bajo la clave "locData".
/// Una vez confirmado, el activityLocId no cambia dentro de la sesión
/// (sólo reset-settings o logout lo destruyen).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub activity_loc_id: String,
    pub activity_loc_name: String,
    pub activity_id: String,
    #[serde(default)]
    pub city_id: String,
    #[serde(default)]
    pub city_name: String,
}

impl LocationData {
    pub fn has_location(&self) -> bool {
        !self.activity_loc_id.is_empty()
    }

    /// Construye el documento desde la sociedad elegida en el selector.
    pub fn from_selection(location: &ActivityLocation, city_id: &str, city_name: &str) -> Self {
        Self {
            activity_loc_id: location.id.clone(),
            activity_loc_name: location.name.clone(),
            activity_id: location
                .activity
                .as_ref()
                .map(|a| a.id.clone())
                .unwrap_or_default(),
            city_id: city_id.to_string(),
            city_name: city_name.to_string(),
        }
    }
}

/// Sociedad / punto de actividad que devuelve el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLocation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub activity: Option<ActivityInfo>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInfo {
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLocationsResponse {
    #[serde(default)]
    pub data: Vec<ActivityLocation>,
    #[serde(default)]
    pub pagination: Option<SearchPaginationInfo>,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchPaginationInfo {
    #[serde(default)]
    pub total_count: u32,
}
