use std::collections::HashMap;

use chrono::{DateTime, Utc};

pub mod address;
pub mod currency;
pub mod expandable;
pub mod list;

pub use address::{Address, AddressParams, BillingDetails, BillingDetailsParams, Shipping, ShippingParams};
pub use currency::Currency;
pub use expandable::{Expandable, Object};
pub use list::{List, ListMeta};

/// Free-form key/value pairs attached to a resource.
pub type Metadata = HashMap<String, String>;

/// Seconds since the Unix epoch, as sent by the API.
pub type Timestamp = i64;

/// Converts an API timestamp into a UTC datetime, `None` when out of range.
pub fn to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

/// Asserts every `(value, wire)` pair encodes to `wire` and decodes back to `value`.
#[cfg(test)]
pub(crate) fn assert_wire_values<T>(values: &[(T, &str)])
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    for (value, wire) in values {
        assert_eq!(serde_json::to_value(value).unwrap(), serde_json::Value::from(*wire), "{:?}", value);
        assert_eq!(&serde_json::from_value::<T>(serde_json::Value::from(*wire)).unwrap(), value, "{}", wire);
    }
}

/// Decodes `json`, checks that encoding and decoding again gives the same value
/// and that no non-null field of `json` was dropped along the way.
#[cfg(test)]
pub(crate) fn assert_round_trips<T>(json: &str) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let decoded: T = serde_json::from_str(json).unwrap();
    let encoded = serde_json::to_value(&decoded).unwrap();
    let again: T = serde_json::from_value(encoded.clone()).unwrap();
    assert_eq!(again, decoded);

    let fixture: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(without_nulls(encoded), without_nulls(fixture));
    decoded
}

#[cfg(test)]
fn without_nulls(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, without_nulls(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(without_nulls).collect()),
        other => other,
    }
}
