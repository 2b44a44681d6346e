use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One line item of a customer order, as stored in the dataset file.
///
/// `order_id` is not unique per row: a multi-line order repeats its id
/// across rows, so distinct-order counts must deduplicate on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderRecord {
    pub order_id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    /// Unit price, must be positive
    pub price: f64,
    pub quantity: i64,
    /// Source of all time-derived fields
    #[serde(with = "serde_order_date")]
    pub order_date: NaiveDateTime,
    /// Customer rating, 1-5
    pub rating: i32,
    #[serde(with = "serde_flag")]
    pub is_repeating_customer: bool,
}

impl SalesOrderRecord {
    pub fn validate(&self) -> Result<(), String> {
        if self.price <= 0.0 {
            return Err(format!("price must be positive, got {}", self.price));
        }
        if self.quantity < 1 {
            return Err(format!("quantity must be at least 1, got {}", self.quantity));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(format!("rating must be within 1-5, got {}", self.rating));
        }
        Ok(())
    }
}

// Local serde helper for the order timestamp. Reads both the space-separated
// form the dataset file carries and the ISO "T" form; always writes the
// space-separated form.
mod serde_order_date {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    const FORMAT_ISO: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, FORMAT_ISO))
            .map_err(serde::de::Error::custom)
    }
}

// Local serde helper for the repeat-customer flag. The original data producer
// wrote "True"/"False", so parsing is case-insensitive; writes are lowercase.
mod serde_flag {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if s.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(serde::de::Error::custom(format!(
                "invalid boolean flag: {}",
                s
            )))
        }
    }
}
