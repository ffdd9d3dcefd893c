use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::params::{impl_params, Params};
use crate::stripe::payment_method::PaymentMethod;
use crate::types::{Currency, Expandable, Object, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum CustomerAcceptanceType {
    Offline,
    Online,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum AcssDebitDefaultFor {
    Invoice,
    Subscription,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum AcssDebitPaymentSchedule {
    Combined,
    Interval,
    Sporadic,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum AcssDebitTransactionType {
    Business,
    Personal,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum BacsDebitNetworkStatus {
    Accepted,
    Pending,
    Refused,
    Revoked,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum BacsDebitRevocationReason {
    AccountClosed,
    BankAccountRestricted,
    BankOwnershipChanged,
    CouldNotProcess,
    DebitNotAuthorized,
    #[serde(other)]
    Other(String),
}

/// Which detail hash of [`MandatePaymentMethodDetails`] is populated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum MandatePaymentMethodDetailsType {
    AcssDebit,
    AmazonPay,
    AuBecsDebit,
    BacsDebit,
    Blik,
    Card,
    Cashapp,
    KakaoPay,
    KrCard,
    Link,
    Paypal,
    RevolutPay,
    SepaDebit,
    UsBankAccount,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum UsBankAccountCollectionMethod {
    Paper,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum MandateStatus {
    Active,
    Inactive,
    Pending,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum MandateType {
    MultiUse,
    SingleUse,
    #[serde(other)]
    Other(String),
}

/// Record of the permission a customer gave to debit their payment method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Mandate {
    pub id: String,
    pub object: String,
    pub customer_acceptance: Option<CustomerAcceptance>,
    pub livemode: bool,
    pub multi_use: Option<NoDetails>,
    pub on_behalf_of: Option<String>,
    pub payment_method: Option<Expandable<PaymentMethod>>,
    pub payment_method_details: Option<MandatePaymentMethodDetails>,
    pub single_use: Option<MandateSingleUse>,
    pub status: Option<MandateStatus>,
    #[serde(rename = "type")]
    pub type_: Option<MandateType>,
}

impl Object for Mandate {
    const OBJECT: &'static str = "mandate";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Placeholder for hashes the API sends without any properties, e.g. `"multi_use": {}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoDetails {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomerAcceptance {
    pub accepted_at: Option<Timestamp>,
    pub offline: Option<NoDetails>,
    pub online: Option<OnlineAcceptance>,
    #[serde(rename = "type")]
    pub type_: Option<CustomerAcceptanceType>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OnlineAcceptance {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandatePaymentMethodDetails {
    pub acss_debit: Option<MandateAcssDebit>,
    pub amazon_pay: Option<NoDetails>,
    pub au_becs_debit: Option<MandateAuBecsDebit>,
    pub bacs_debit: Option<MandateBacsDebit>,
    pub card: Option<NoDetails>,
    pub cashapp: Option<NoDetails>,
    pub kakao_pay: Option<NoDetails>,
    pub kr_card: Option<NoDetails>,
    pub link: Option<NoDetails>,
    pub paypal: Option<MandatePaypal>,
    pub revolut_pay: Option<NoDetails>,
    pub sepa_debit: Option<MandateSepaDebit>,
    #[serde(rename = "type")]
    pub type_: Option<MandatePaymentMethodDetailsType>,
    pub us_bank_account: Option<MandateUsBankAccount>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandateAcssDebit {
    pub default_for: Vec<AcssDebitDefaultFor>,
    pub interval_description: Option<String>,
    pub payment_schedule: Option<AcssDebitPaymentSchedule>,
    pub transaction_type: Option<AcssDebitTransactionType>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandateAuBecsDebit {
    /// Link to the mandate document.
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandateBacsDebit {
    pub network_status: Option<BacsDebitNetworkStatus>,
    pub reference: Option<String>,
    pub revocation_reason: Option<BacsDebitRevocationReason>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandatePaypal {
    pub billing_agreement_id: Option<String>,
    pub payer_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandateSepaDebit {
    pub reference: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandateUsBankAccount {
    pub collection_method: Option<UsBankAccountCollectionMethod>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MandateSingleUse {
    pub amount: i64,
    pub currency: Option<Currency>,
}

/// Retrieving a mandate only takes `expand`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MandateParams {
    #[serde(flatten)]
    pub params: Params,
}

/// `mandate_data` sent when confirming an intent that needs a mandate.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MandateDataParams {
    pub customer_acceptance: CustomerAcceptanceParams,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerAcceptanceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<OnlineAcceptanceParams>,
    #[serde(rename = "type")]
    pub type_: Option<CustomerAcceptanceType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OnlineAcceptanceParams {
    pub ip_address: String,
    pub user_agent: String,
}

impl_params!(MandateParams);
