use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::params::{impl_list_params, impl_params, ListParams, Params, RangeQuery};
use crate::stripe::account::{Account, Application};
use crate::stripe::api_error::ApiError;
use crate::stripe::charge::Charge;
use crate::stripe::customer::Customer;
use crate::stripe::mandate::MandateDataParams;
use crate::stripe::payment_method::{PaymentMethod, PaymentMethodParams};
use crate::stripe::setup_intent::{
    AutomaticPaymentMethods, AutomaticPaymentMethodsParams, NextActionRedirectToUrl, NextActionType,
    NextActionVerifyWithMicrodeposits,
};
use crate::types::{Currency, Expandable, Metadata, Object, Shipping, ShippingParams, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    Canceled,
    Processing,
    RequiresAction,
    RequiresCapture,
    RequiresConfirmation,
    RequiresPaymentMethod,
    Succeeded,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentCancellationReason {
    Abandoned,
    Automatic,
    Duplicate,
    Expired,
    FailedInvoice,
    Fraudulent,
    RequestedByCustomer,
    VoidInvoice,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    Automatic,
    AutomaticAsync,
    Manual,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationMethod {
    Automatic,
    Manual,
    #[serde(other)]
    Other(String),
}

/// Saves the payment method for later use when the payment succeeds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SetupFutureUsage {
    OffSession,
    OnSession,
    #[serde(other)]
    Other(String),
}

/// Tracks one payment from creation through checkout.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentIntent {
    pub id: String,
    pub object: String,
    pub amount: i64,
    pub amount_capturable: i64,
    pub amount_received: i64,
    pub application: Option<Expandable<Application>>,
    pub application_fee_amount: Option<i64>,
    pub automatic_payment_methods: Option<AutomaticPaymentMethods>,
    pub canceled_at: Option<Timestamp>,
    pub cancellation_reason: Option<PaymentIntentCancellationReason>,
    pub capture_method: Option<CaptureMethod>,
    /// Lets a frontend finish the payment. Never log it.
    pub client_secret: Option<String>,
    pub confirmation_method: Option<ConfirmationMethod>,
    pub created: Timestamp,
    pub currency: Option<Currency>,
    pub customer: Option<Expandable<Customer>>,
    pub description: Option<String>,
    pub last_payment_error: Option<Box<ApiError>>,
    pub latest_charge: Option<Expandable<Charge>>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub next_action: Option<PaymentIntentNextAction>,
    pub on_behalf_of: Option<Expandable<Account>>,
    pub payment_method: Option<Expandable<PaymentMethod>>,
    pub payment_method_types: Vec<String>,
    pub receipt_email: Option<String>,
    pub setup_future_usage: Option<SetupFutureUsage>,
    pub shipping: Option<Shipping>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub status: Option<PaymentIntentStatus>,
    pub transfer_group: Option<String>,
}

impl Object for PaymentIntent {
    const OBJECT: &'static str = "payment_intent";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentIntentNextAction {
    pub redirect_to_url: Option<NextActionRedirectToUrl>,
    #[serde(rename = "type")]
    pub type_: Option<NextActionType>,
    pub use_stripe_sdk: Option<serde_json::Value>,
    pub verify_with_microdeposits: Option<NextActionVerifyWithMicrodeposits>,
}

/// Creates or updates a PaymentIntent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentIntentParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_payment_methods: Option<AutomaticPaymentMethodsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_method: Option<ConfirmationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<SetupFutureUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_group: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentIntentConfirmParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<SetupFutureUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_stripe_sdk: Option<bool>,
}

/// Captures funds of a `requires_capture` intent, optionally less than authorized.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentIntentCaptureParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_to_capture: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_suffix: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentIntentCancelParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<PaymentIntentCancellationReason>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentIntentListParams {
    #[serde(flatten)]
    pub list_params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

impl_params!(
    PaymentIntentParams,
    PaymentIntentConfirmParams,
    PaymentIntentCaptureParams,
    PaymentIntentCancelParams,
);
impl_list_params!(PaymentIntentListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form;
    use crate::params::ParamsContainer;
    use crate::stripe::api_error::{DeclineCode, ErrorCode};
    use crate::types::{assert_round_trips, assert_wire_values, AddressParams};

    #[test]
    fn decodes_a_failed_intent_with_its_latest_charge() {
        let json = r#"{
            "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
            "object": "payment_intent",
            "amount": 2000,
            "amount_capturable": 0,
            "amount_received": 0,
            "automatic_payment_methods": {"enabled": true},
            "capture_method": "automatic",
            "client_secret": "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_YrKJUKribcBjcG8HVhfZluoGH",
            "confirmation_method": "automatic",
            "created": 1680800504,
            "currency": "usd",
            "last_payment_error": {
                "charge": "ch_3MtwBwLkdIwHu7ix0K5iQTrd",
                "code": "card_declined",
                "decline_code": "generic_decline",
                "type": "card_error"
            },
            "latest_charge": {"id": "ch_3MtwBwLkdIwHu7ix0K5iQTrd", "object": "charge", "status": "failed"},
            "livemode": false,
            "metadata": {},
            "next_action": null,
            "payment_method_types": ["card", "link"],
            "setup_future_usage": "off_session",
            "status": "requires_payment_method"
        }"#;
        let intent: PaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.status, Some(PaymentIntentStatus::RequiresPaymentMethod));
        assert_eq!(intent.capture_method, Some(CaptureMethod::Automatic));
        assert_eq!(intent.setup_future_usage, Some(SetupFutureUsage::OffSession));
        assert!(intent.next_action.is_none());

        let charge = intent.latest_charge.as_ref().unwrap().as_object().unwrap();
        assert_eq!(charge.id, "ch_3MtwBwLkdIwHu7ix0K5iQTrd");

        let error = intent.last_payment_error.as_ref().unwrap();
        assert_eq!(error.code, Some(ErrorCode::CardDeclined));
        assert_eq!(error.decline_code, Some(DeclineCode::GenericDecline));
    }

    #[test]
    fn redirect_next_action() {
        let json = r#"{
            "id": "pi_1",
            "status": "requires_action",
            "next_action": {
                "redirect_to_url": {"return_url": "https://example.com/return", "url": "https://hooks.stripe.com/redirect"},
                "type": "redirect_to_url"
            }
        }"#;
        let intent: PaymentIntent = serde_json::from_str(json).unwrap();
        let next_action = intent.next_action.unwrap();
        assert_eq!(next_action.type_, Some(NextActionType::RedirectToUrl));
        assert_eq!(
            next_action.redirect_to_url.unwrap().url.as_deref(),
            Some("https://hooks.stripe.com/redirect")
        );
    }

    #[test]
    fn create_params_with_shipping() {
        let mut params = PaymentIntentParams {
            amount: Some(2000),
            currency: Some(Currency::Usd),
            shipping: Some(ShippingParams {
                address: AddressParams {
                    line1: Some("510 Townsend St".into()),
                    country: Some("US".into()),
                    ..Default::default()
                },
                name: "Jenny Rosen".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        params.set_idempotency_key("order-6735");

        assert_eq!(
            form::encode(&params).unwrap(),
            "amount=2000&currency=usd\
             &shipping%5Baddress%5D%5Bcountry%5D=US\
             &shipping%5Baddress%5D%5Bline1%5D=510+Townsend+St\
             &shipping%5Bname%5D=Jenny+Rosen"
        );
    }

    #[test]
    fn capture_less_than_authorized() {
        let params = PaymentIntentCaptureParams {
            amount_to_capture: Some(750),
            final_capture: Some(false),
            ..Default::default()
        };
        assert_eq!(form::encode(&params).unwrap(), "amount_to_capture=750&final_capture=false");
    }

    #[test]
    fn every_known_value_round_trips() {
        assert_wire_values(&[
            (PaymentIntentStatus::Canceled, "canceled"),
            (PaymentIntentStatus::Processing, "processing"),
            (PaymentIntentStatus::RequiresAction, "requires_action"),
            (PaymentIntentStatus::RequiresCapture, "requires_capture"),
            (PaymentIntentStatus::RequiresConfirmation, "requires_confirmation"),
            (PaymentIntentStatus::RequiresPaymentMethod, "requires_payment_method"),
            (PaymentIntentStatus::Succeeded, "succeeded"),
        ]);
        assert_wire_values(&[
            (PaymentIntentCancellationReason::Abandoned, "abandoned"),
            (PaymentIntentCancellationReason::Automatic, "automatic"),
            (PaymentIntentCancellationReason::Duplicate, "duplicate"),
            (PaymentIntentCancellationReason::Expired, "expired"),
            (PaymentIntentCancellationReason::FailedInvoice, "failed_invoice"),
            (PaymentIntentCancellationReason::Fraudulent, "fraudulent"),
            (PaymentIntentCancellationReason::RequestedByCustomer, "requested_by_customer"),
            (PaymentIntentCancellationReason::VoidInvoice, "void_invoice"),
        ]);
        assert_wire_values(&[
            (CaptureMethod::Automatic, "automatic"),
            (CaptureMethod::AutomaticAsync, "automatic_async"),
            (CaptureMethod::Manual, "manual"),
        ]);
        assert_wire_values(&[
            (ConfirmationMethod::Automatic, "automatic"),
            (ConfirmationMethod::Manual, "manual"),
        ]);
        assert_wire_values(&[
            (SetupFutureUsage::OffSession, "off_session"),
            (SetupFutureUsage::OnSession, "on_session"),
        ]);
    }

    #[test]
    fn fully_populated_payment_intent_round_trips() {
        let intent: PaymentIntent = assert_round_trips(
            r#"{
                "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
                "object": "payment_intent",
                "amount": 2000,
                "amount_capturable": 2000,
                "amount_received": 0,
                "application": "ca_1",
                "application_fee_amount": 100,
                "automatic_payment_methods": {"allow_redirects": "never", "enabled": true},
                "canceled_at": 1680801000,
                "cancellation_reason": "fraudulent",
                "capture_method": "manual",
                "client_secret": "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_YrKJUKribcBjcG8HVhfZluoGH",
                "confirmation_method": "automatic",
                "created": 1680800504,
                "currency": "eur",
                "customer": {
                    "id": "cus_NffrFeUfNV2Hib",
                    "object": "customer",
                    "balance": 0,
                    "created": 1680800000,
                    "deleted": false,
                    "email": "jennyrosen@example.com",
                    "invoice_credit_balance": {},
                    "livemode": false,
                    "metadata": {},
                    "preferred_locales": ["fr"]
                },
                "description": "order 6735",
                "last_payment_error": {
                    "code": "card_declined",
                    "decline_code": "generic_decline",
                    "message": "Your card was declined.",
                    "type": "card_error"
                },
                "latest_charge": "ch_3MtwBwLkdIwHu7ix1D6c2TRm",
                "livemode": false,
                "metadata": {"order_id": "6735"},
                "next_action": {
                    "redirect_to_url": {"return_url": "https://example.com/return", "url": "https://hooks.stripe.com/3d_secure"},
                    "type": "use_stripe_sdk",
                    "use_stripe_sdk": {"type": "three_d_secure_redirect", "stripe_js": "https://hooks.stripe.com/redirect"},
                    "verify_with_microdeposits": {
                        "arrival_date": 1680887000,
                        "hosted_verification_url": "https://payments.stripe.com/microdeposit/pacs_test",
                        "microdeposit_type": "descriptor_code"
                    }
                },
                "on_behalf_of": "acct_1032D82eZvKYlo2C",
                "payment_method": "pm_1MtwBwLkdIwHu7ixL2f3vhmE",
                "payment_method_types": ["card", "sepa_debit"],
                "receipt_email": "jennyrosen@example.com",
                "setup_future_usage": "off_session",
                "shipping": {
                    "address": {
                        "city": "Paris",
                        "country": "FR",
                        "line1": "1 Rue de Rivoli",
                        "line2": "Apt 2",
                        "postal_code": "75001",
                        "state": "IDF"
                    },
                    "carrier": "La Poste",
                    "name": "Jenny Rosen",
                    "phone": "+33100000000",
                    "tracking_number": "LP123456789FR"
                },
                "statement_descriptor": "ROCKET RIDES",
                "statement_descriptor_suffix": "6735",
                "status": "requires_capture",
                "transfer_group": "group_6735"
            }"#,
        );
        assert_eq!(intent.cancellation_reason, Some(PaymentIntentCancellationReason::Fraudulent));
        assert_eq!(intent.customer.as_ref().unwrap().as_object().unwrap().preferred_locales, ["fr"]);
        assert_eq!(intent.latest_charge.as_ref().unwrap().id(), "ch_3MtwBwLkdIwHu7ix1D6c2TRm");
    }
}
