use displaydoc::Display;
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{Object, Timestamp};

#[derive(Debug, Display, Error)]
pub enum Error {
    /// Event has no `data` object.
    NoData,
    /// Cannot index an array with non-integer key `{0}`.
    NonIntegerKey(String),
    /// Index {index} is out of range for an array of length {len}.
    IndexOutOfRange { index: usize, len: usize },
    /// Cannot descend into a scalar value with key `{0}`.
    NotAContainer(String),
    /// Failed to decode event data at `{path}`: {source}
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The `type` of an event: `<resource>.<what happened>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
pub enum EventType {
    #[serde(rename = "account.application.authorized")]
    AccountApplicationAuthorized,
    #[serde(rename = "account.application.deauthorized")]
    AccountApplicationDeauthorized,
    #[serde(rename = "account.updated")]
    AccountUpdated,
    #[serde(rename = "charge.captured")]
    ChargeCaptured,
    #[serde(rename = "charge.expired")]
    ChargeExpired,
    #[serde(rename = "charge.failed")]
    ChargeFailed,
    #[serde(rename = "charge.pending")]
    ChargePending,
    #[serde(rename = "charge.refunded")]
    ChargeRefunded,
    #[serde(rename = "charge.succeeded")]
    ChargeSucceeded,
    #[serde(rename = "charge.updated")]
    ChargeUpdated,
    #[serde(rename = "customer.created")]
    CustomerCreated,
    #[serde(rename = "customer.deleted")]
    CustomerDeleted,
    #[serde(rename = "customer.source.created")]
    CustomerSourceCreated,
    #[serde(rename = "customer.source.deleted")]
    CustomerSourceDeleted,
    #[serde(rename = "customer.source.expiring")]
    CustomerSourceExpiring,
    #[serde(rename = "customer.source.updated")]
    CustomerSourceUpdated,
    #[serde(rename = "customer.updated")]
    CustomerUpdated,
    #[serde(rename = "mandate.updated")]
    MandateUpdated,
    #[serde(rename = "payment_intent.amount_capturable_updated")]
    PaymentIntentAmountCapturableUpdated,
    #[serde(rename = "payment_intent.canceled")]
    PaymentIntentCanceled,
    #[serde(rename = "payment_intent.created")]
    PaymentIntentCreated,
    #[serde(rename = "payment_intent.partially_funded")]
    PaymentIntentPartiallyFunded,
    #[serde(rename = "payment_intent.payment_failed")]
    PaymentIntentPaymentFailed,
    #[serde(rename = "payment_intent.processing")]
    PaymentIntentProcessing,
    #[serde(rename = "payment_intent.requires_action")]
    PaymentIntentRequiresAction,
    #[serde(rename = "payment_intent.succeeded")]
    PaymentIntentSucceeded,
    #[serde(rename = "payment_method.attached")]
    PaymentMethodAttached,
    #[serde(rename = "payment_method.automatically_updated")]
    PaymentMethodAutomaticallyUpdated,
    #[serde(rename = "payment_method.detached")]
    PaymentMethodDetached,
    #[serde(rename = "payment_method.updated")]
    PaymentMethodUpdated,
    #[serde(rename = "setup_intent.canceled")]
    SetupIntentCanceled,
    #[serde(rename = "setup_intent.created")]
    SetupIntentCreated,
    #[serde(rename = "setup_intent.requires_action")]
    SetupIntentRequiresAction,
    #[serde(rename = "setup_intent.setup_failed")]
    SetupIntentSetupFailed,
    #[serde(rename = "setup_intent.succeeded")]
    SetupIntentSucceeded,
    #[serde(rename = "source.canceled")]
    SourceCanceled,
    #[serde(rename = "source.chargeable")]
    SourceChargeable,
    #[serde(rename = "source.failed")]
    SourceFailed,
    #[serde(rename = "source.mandate_notification")]
    SourceMandateNotification,
    #[serde(rename = "source.refund_attributes_required")]
    SourceRefundAttributesRequired,
    #[serde(rename = "source.transaction.created")]
    SourceTransactionCreated,
    #[serde(rename = "source.transaction.updated")]
    SourceTransactionUpdated,
    #[serde(other)]
    Other(String),
}

/// A notification that something happened on the account.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub object: String,
    /// Connected account that originated the event.
    pub account: Option<String>,
    pub api_version: Option<String>,
    pub created: Timestamp,
    pub data: Option<EventData>,
    pub livemode: bool,
    pub pending_webhooks: i64,
    pub request: Option<EventRequest>,
    #[serde(rename = "type")]
    pub type_: Option<EventType>,
}

impl Object for Event {
    const OBJECT: &'static str = "event";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The resource as it was when the event fired, kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventData {
    pub object: Map<String, Value>,
    /// Old values of the attributes an `*.updated` event changed.
    pub previous_attributes: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventRequest {
    /// `None` for events not caused by an API request.
    pub id: Option<String>,
    pub idempotency_key: Option<String>,
}

impl Event {
    /// Looks up `keys` in `data.object`. Numeric keys index into arrays.
    ///
    /// Strings come back as is; numbers, booleans, objects and arrays as
    /// their JSON text. Missing and `null` values are `Ok(None)`.
    pub fn get_object_value(&self, keys: &[&str]) -> Result<Option<String>, Error> {
        let data = self.data.as_ref().ok_or(Error::NoData)?;
        lookup(&data.object, keys)
    }

    /// Same as [`Event::get_object_value`] over `data.previous_attributes`.
    pub fn get_previous_value(&self, keys: &[&str]) -> Result<Option<String>, Error> {
        let data = self.data.as_ref().ok_or(Error::NoData)?;
        match &data.previous_attributes {
            Some(previous) => lookup(previous, keys),
            None => Ok(None),
        }
    }

    /// Decodes `data.object` into a typed resource.
    pub fn data_object<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let data = self.data.as_ref().ok_or(Error::NoData)?;
        serde_path_to_error::deserialize(Value::Object(data.object.clone())).map_err(|e| Error::Decode {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

fn lookup(map: &Map<String, Value>, keys: &[&str]) -> Result<Option<String>, Error> {
    let Some((first, rest)) = keys.split_first() else {
        return Ok(None);
    };
    let mut node = map.get(*first);
    for key in rest {
        node = match node {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => {
                let index: usize = key
                    .parse()
                    .map_err(|_| Error::NonIntegerKey(key.to_string()))?;
                let item = items.get(index).ok_or(Error::IndexOutOfRange {
                    index,
                    len: items.len(),
                })?;
                Some(item)
            }
            Some(Value::Object(map)) => map.get(*key),
            Some(_) => return Err(Error::NotAContainer(key.to_string())),
        };
    }
    Ok(node.and_then(|value| match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stripe::setup_intent::{SetupIntent, SetupIntentStatus};
    use crate::types::{assert_round_trips, assert_wire_values};

    const SETUP_INTENT_SUCCEEDED: &str = r#"{
        "id": "evt_1NG8Du2eZvKYlo2CUI79vXWy",
        "object": "event",
        "api_version": "2024-12-18.acacia",
        "created": 1686089970,
        "data": {
            "object": {
                "id": "seti_1NG8Du2eZvKYlo2C9XMqbR0x",
                "object": "setup_intent",
                "customer": null,
                "metadata": {"order_id": "6735"},
                "payment_method_types": ["card", "sepa_debit"],
                "amount": 1099,
                "livemode": false,
                "status": "succeeded"
            },
            "previous_attributes": {"status": "requires_confirmation"}
        },
        "livemode": false,
        "pending_webhooks": 0,
        "request": {"id": null, "idempotency_key": null},
        "type": "setup_intent.succeeded"
    }"#;

    fn event() -> Event {
        serde_json::from_str(SETUP_INTENT_SUCCEEDED).unwrap()
    }

    #[test]
    fn walks_maps_and_arrays() {
        let event = event();
        assert_eq!(event.type_, Some(EventType::SetupIntentSucceeded));
        assert_eq!(
            event.get_object_value(&["metadata", "order_id"]).unwrap().as_deref(),
            Some("6735")
        );
        assert_eq!(
            event.get_object_value(&["payment_method_types", "1"]).unwrap().as_deref(),
            Some("sepa_debit")
        );
        assert_eq!(event.get_object_value(&["amount"]).unwrap().as_deref(), Some("1099"));
        assert_eq!(event.get_object_value(&["livemode"]).unwrap().as_deref(), Some("false"));
        assert_eq!(
            event.get_previous_value(&["status"]).unwrap().as_deref(),
            Some("requires_confirmation")
        );
    }

    #[test]
    fn absent_and_null_values_are_none() {
        let event = event();
        assert_eq!(event.get_object_value(&["customer"]).unwrap(), None);
        assert_eq!(event.get_object_value(&["nope"]).unwrap(), None);
        assert_eq!(event.get_object_value(&["customer", "email"]).unwrap(), None);
        assert_eq!(event.get_previous_value(&["metadata"]).unwrap(), None);
    }

    #[test]
    fn bad_paths_are_errors() {
        let event = event();
        assert!(matches!(
            event.get_object_value(&["payment_method_types", "first"]),
            Err(Error::NonIntegerKey(key)) if key == "first"
        ));
        assert!(matches!(
            event.get_object_value(&["payment_method_types", "5"]),
            Err(Error::IndexOutOfRange { index: 5, len: 2 })
        ));
        assert!(matches!(
            event.get_object_value(&["status", "code"]),
            Err(Error::NotAContainer(key)) if key == "code"
        ));
    }

    #[test]
    fn decodes_data_object() {
        let intent: SetupIntent = event().data_object().unwrap();
        assert_eq!(intent.id, "seti_1NG8Du2eZvKYlo2C9XMqbR0x");
        assert_eq!(intent.status, Some(SetupIntentStatus::Succeeded));
    }

    #[test]
    fn data_decode_errors_name_the_field() {
        let event: Event = serde_json::from_str(
            r#"{"id": "evt_1", "type": "setup_intent.created",
                "data": {"object": {"id": "seti_1", "object": "setup_intent", "latest_attempt": [1]}}}"#,
        )
        .unwrap();
        match event.data_object::<SetupIntent>() {
            Err(Error::Decode { path, source }) => {
                assert_eq!(path, "latest_attempt");
                assert!(source.to_string().contains("`setup_attempt`"));
            }
            other => panic!("expected a decode error, got {:?}", other.map(|intent| intent.id)),
        }
    }

    #[test]
    fn unknown_event_types_are_kept() {
        let event: Event =
            serde_json::from_str(r#"{"id": "evt_1", "type": "billing.meter.error_report_triggered"}"#).unwrap();
        assert_eq!(
            event.type_,
            Some(EventType::Other("billing.meter.error_report_triggered".to_string()))
        );
        assert!(matches!(event.get_object_value(&["id"]), Err(Error::NoData)));
    }

    #[test]
    fn every_known_value_round_trips() {
        assert_wire_values(&[
            (EventType::AccountApplicationAuthorized, "account.application.authorized"),
            (EventType::AccountApplicationDeauthorized, "account.application.deauthorized"),
            (EventType::AccountUpdated, "account.updated"),
            (EventType::ChargeCaptured, "charge.captured"),
            (EventType::ChargeExpired, "charge.expired"),
            (EventType::ChargeFailed, "charge.failed"),
            (EventType::ChargePending, "charge.pending"),
            (EventType::ChargeRefunded, "charge.refunded"),
            (EventType::ChargeSucceeded, "charge.succeeded"),
            (EventType::ChargeUpdated, "charge.updated"),
            (EventType::CustomerCreated, "customer.created"),
            (EventType::CustomerDeleted, "customer.deleted"),
            (EventType::CustomerSourceCreated, "customer.source.created"),
            (EventType::CustomerSourceDeleted, "customer.source.deleted"),
            (EventType::CustomerSourceExpiring, "customer.source.expiring"),
            (EventType::CustomerSourceUpdated, "customer.source.updated"),
            (EventType::CustomerUpdated, "customer.updated"),
            (EventType::MandateUpdated, "mandate.updated"),
            (EventType::PaymentIntentAmountCapturableUpdated, "payment_intent.amount_capturable_updated"),
            (EventType::PaymentIntentCanceled, "payment_intent.canceled"),
            (EventType::PaymentIntentCreated, "payment_intent.created"),
            (EventType::PaymentIntentPartiallyFunded, "payment_intent.partially_funded"),
            (EventType::PaymentIntentPaymentFailed, "payment_intent.payment_failed"),
            (EventType::PaymentIntentProcessing, "payment_intent.processing"),
            (EventType::PaymentIntentRequiresAction, "payment_intent.requires_action"),
            (EventType::PaymentIntentSucceeded, "payment_intent.succeeded"),
            (EventType::PaymentMethodAttached, "payment_method.attached"),
            (EventType::PaymentMethodAutomaticallyUpdated, "payment_method.automatically_updated"),
            (EventType::PaymentMethodDetached, "payment_method.detached"),
            (EventType::PaymentMethodUpdated, "payment_method.updated"),
            (EventType::SetupIntentCanceled, "setup_intent.canceled"),
            (EventType::SetupIntentCreated, "setup_intent.created"),
            (EventType::SetupIntentRequiresAction, "setup_intent.requires_action"),
            (EventType::SetupIntentSetupFailed, "setup_intent.setup_failed"),
            (EventType::SetupIntentSucceeded, "setup_intent.succeeded"),
            (EventType::SourceCanceled, "source.canceled"),
            (EventType::SourceChargeable, "source.chargeable"),
            (EventType::SourceFailed, "source.failed"),
            (EventType::SourceMandateNotification, "source.mandate_notification"),
            (EventType::SourceRefundAttributesRequired, "source.refund_attributes_required"),
            (EventType::SourceTransactionCreated, "source.transaction.created"),
            (EventType::SourceTransactionUpdated, "source.transaction.updated"),
        ]);
    }

    #[test]
    fn fully_populated_event_round_trips() {
        let event: Event = assert_round_trips(
            r#"{
                "id": "evt_1NG8Du2eZvKYlo2CUI79vXWy",
                "object": "event",
                "account": "acct_1032D82eZvKYlo2C",
                "api_version": "2024-12-18.acacia",
                "created": 1686089970,
                "data": {
                    "object": {
                        "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
                        "object": "payment_intent",
                        "amount": 2000,
                        "currency": "usd",
                        "status": "succeeded"
                    },
                    "previous_attributes": {"status": "processing"}
                },
                "livemode": true,
                "pending_webhooks": 2,
                "request": {"id": "req_8PaHkOtgR2BBx1", "idempotency_key": "6735-confirm"},
                "type": "payment_intent.succeeded"
            }"#,
        );
        assert_eq!(event.type_, Some(EventType::PaymentIntentSucceeded));
        assert_eq!(event.request.as_ref().unwrap().id.as_deref(), Some("req_8PaHkOtgR2BBx1"));
        assert_eq!(event.get_previous_value(&["status"]).unwrap().as_deref(), Some("processing"));
    }
}
