use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::stripe::account::{Account, Application};
use crate::stripe::api_error::ErrorCode;
use crate::stripe::card::CardFunding;
use crate::stripe::customer::Customer;
use crate::stripe::payment_intent::PaymentIntent;
use crate::stripe::payment_method::{
    CardNetwork, PaymentMethodCardBrand, PaymentMethodCardChecks, PaymentMethodCardWallet, PaymentMethodType,
};
use crate::stripe::payment_source::PaymentSource;
use crate::stripe::setup_attempt::ThreeDSecureResult;
use crate::types::{BillingDetails, Currency, Expandable, Metadata, Object, Shipping, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Failed,
    Pending,
    Succeeded,
    #[serde(other)]
    Other(String),
}

/// Where the authorization decision for a charge came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeType {
    Authorized,
    Blocked,
    Invalid,
    IssuerDeclined,
    ManualReview,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeNetworkStatus {
    ApprovedByNetwork,
    DeclinedByNetwork,
    NotSentToNetwork,
    ReversedAfterApproval,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeAdviceCode {
    ConfirmCardData,
    DoNotTryAgain,
    TryAgainLater,
    #[serde(other)]
    Other(String),
}

/// A single attempt to move money from a payment source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Charge {
    pub id: String,
    pub object: String,
    pub amount: i64,
    pub amount_captured: i64,
    pub amount_refunded: i64,
    pub application: Option<Expandable<Application>>,
    pub application_fee_amount: Option<i64>,
    pub authorization_code: Option<String>,
    pub billing_details: Option<BillingDetails>,
    pub calculated_statement_descriptor: Option<String>,
    pub captured: bool,
    pub created: Timestamp,
    pub currency: Option<Currency>,
    pub customer: Option<Expandable<Customer>>,
    pub description: Option<String>,
    pub disputed: bool,
    pub failure_code: Option<ErrorCode>,
    pub failure_message: Option<String>,
    pub livemode: bool,
    pub metadata: Option<Metadata>,
    pub on_behalf_of: Option<Expandable<Account>>,
    pub outcome: Option<ChargeOutcome>,
    pub paid: bool,
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    pub payment_method: Option<String>,
    pub payment_method_details: Option<ChargePaymentMethodDetails>,
    pub receipt_email: Option<String>,
    pub receipt_number: Option<String>,
    pub receipt_url: Option<String>,
    pub refunded: bool,
    pub shipping: Option<Shipping>,
    pub source: Option<PaymentSource>,
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_suffix: Option<String>,
    pub status: Option<ChargeStatus>,
    pub transfer_group: Option<String>,
}

impl Object for Charge {
    const OBJECT: &'static str = "charge";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChargeOutcome {
    pub advice_code: Option<OutcomeAdviceCode>,
    pub network_advice_code: Option<String>,
    pub network_decline_code: Option<String>,
    pub network_status: Option<OutcomeNetworkStatus>,
    pub reason: Option<String>,
    pub risk_level: Option<String>,
    pub risk_score: Option<i64>,
    pub rule: Option<Expandable<OutcomeRule>>,
    pub seller_message: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<OutcomeType>,
}

/// The Radar rule that decided the outcome.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutcomeRule {
    pub id: String,
    pub action: Option<String>,
    pub predicate: Option<String>,
}

impl Object for OutcomeRule {
    const OBJECT: &'static str = "rule";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChargePaymentMethodDetails {
    pub card: Option<ChargeCard>,
    #[serde(rename = "type")]
    pub type_: Option<PaymentMethodType>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChargeCard {
    pub amount_authorized: Option<i64>,
    pub authorization_code: Option<String>,
    pub brand: Option<PaymentMethodCardBrand>,
    pub checks: Option<PaymentMethodCardChecks>,
    pub country: Option<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    pub fingerprint: Option<String>,
    pub funding: Option<CardFunding>,
    pub last4: Option<String>,
    pub mandate: Option<String>,
    pub network: Option<CardNetwork>,
    pub network_transaction_id: Option<String>,
    pub three_d_secure: Option<ChargeThreeDSecure>,
    pub wallet: Option<PaymentMethodCardWallet>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChargeThreeDSecure {
    pub authentication_flow: Option<String>,
    pub result: Option<ThreeDSecureResult>,
    pub result_reason: Option<String>,
    pub version: Option<String>,
}
