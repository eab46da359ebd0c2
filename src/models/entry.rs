use serde::{Deserialize, Serialize};

/// Entrada de pedido del dashboard. Es propiedad del backend: el cliente
/// sólo la lee y la identidad es el `id`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub order_address: Option<String>,
    #[serde(default)]
    pub order_image: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub cashback_amount: Option<f64>,
}

/// El servidor es la fuente de verdad del total, no la acumulación local
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub todays_entries: Vec<Entry>,
    #[serde(default)]
    pub total_entries: Vec<Entry>,
    #[serde(default)]
    pub todays_pagination: PaginationInfo,
    #[serde(default)]
    pub total_pagination: PaginationInfo,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(default)]
    pub data: DashboardData,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_response_decodes_camel_case() {
        let raw = r#"{
            "data": {
                "todaysEntries": [{"id": "1", "customerName": "John Doe", "cashbackAmount": 50}],
                "totalEntries": [],
                "todaysPagination": {"totalCount": 12},
                "totalPagination": {"totalCount": 40}
            }
        }"#;

        let response: DashboardResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.data.todays_entries.len(), 1);
        assert_eq!(
            response.data.todays_entries[0].customer_name.as_deref(),
            Some("John Doe")
        );
        assert_eq!(response.data.todays_pagination.total_count, 12);
        assert_eq!(response.data.total_pagination.total_count, 40);
    }
}
