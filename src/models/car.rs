//! Car record shape. API keys are camelCase, columns snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored car row. `deleted_at` set means the row is invisible to reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub make: String,
    pub car_model: String,
    pub year: i32,
    pub price: f64,
}

/// Create payload: the client-supplied fields only. Identity and
/// timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub make: String,
    pub car_model: String,
    pub year: i32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_car_decodes_camel_case_keys() {
        let car: NewCar = serde_json::from_str(
            r#"{"make":"Toyota","carModel":"Corolla","year":2020,"price":18500.0}"#,
        )
        .unwrap();
        assert_eq!(car.car_model, "Corolla");
        assert_eq!(car.year, 2020);
    }

    #[test]
    fn new_car_rejects_non_numeric_year() {
        let result = serde_json::from_str::<NewCar>(
            r#"{"make":"Toyota","carModel":"Corolla","year":"abc","price":18500.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn car_serializes_with_camel_case_keys() {
        let car = Car {
            id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            make: "Lada".into(),
            car_model: "Niva".into(),
            year: 1999,
            price: 3000.0,
        };
        let json = serde_json::to_value(&car).unwrap();
        assert!(json.get("carModel").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("car_model").is_none());
    }
}
