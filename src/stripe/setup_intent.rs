use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::params::{impl_list_params, impl_params, ListParams, Params, RangeQuery};
use crate::stripe::account::{Account, Application};
use crate::stripe::api_error::ApiError;
use crate::stripe::customer::Customer;
use crate::stripe::mandate::{
    AcssDebitDefaultFor, AcssDebitPaymentSchedule, AcssDebitTransactionType, Mandate,
    MandateDataParams, UsBankAccountCollectionMethod,
};
use crate::stripe::payment_method::{CardNetwork, PaymentMethod, PaymentMethodParams};
use crate::stripe::setup_attempt::SetupAttempt;
use crate::types::{Currency, Expandable, Metadata, Object, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SetupIntentStatus {
    Canceled,
    Processing,
    RequiresAction,
    RequiresConfirmation,
    RequiresPaymentMethod,
    Succeeded,
    #[serde(other)]
    Other(String),
}

/// How the payment method will be reused once set up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SetupIntentUsage {
    OffSession,
    OnSession,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SetupIntentCancellationReason {
    Abandoned,
    Duplicate,
    RequestedByCustomer,
    #[serde(other)]
    Other(String),
}

/// Direction of money movement a payment method is set up for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    Inbound,
    Outbound,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum AllowRedirects {
    Always,
    Never,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum NextActionType {
    AlipayHandleRedirect,
    CashappHandleRedirectOrDisplayQrCode,
    OxxoDisplayDetails,
    RedirectToUrl,
    UseStripeSdk,
    VerifyWithMicrodeposits,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum MicrodepositType {
    Amounts,
    DescriptorCode,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum RequestThreeDSecure {
    Any,
    Automatic,
    Challenge,
    #[serde(other)]
    Other(String),
}

/// Bank account verification: `automatic`, `instant` or `microdeposits`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    Automatic,
    Instant,
    Microdeposits,
    #[serde(other)]
    Other(String),
}

/// Guides a customer through saving a payment method for later payments.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupIntent {
    pub id: String,
    pub object: String,
    pub application: Option<Expandable<Application>>,
    pub attach_to_self: Option<bool>,
    pub automatic_payment_methods: Option<AutomaticPaymentMethods>,
    pub cancellation_reason: Option<SetupIntentCancellationReason>,
    /// Lets a frontend finish the setup. Never log it.
    pub client_secret: Option<String>,
    pub created: Timestamp,
    pub customer: Option<Expandable<Customer>>,
    pub description: Option<String>,
    pub flow_directions: Option<Vec<FlowDirection>>,
    pub last_setup_error: Option<Box<ApiError>>,
    pub latest_attempt: Option<Expandable<SetupAttempt>>,
    pub livemode: bool,
    pub mandate: Option<Expandable<Mandate>>,
    pub metadata: Option<Metadata>,
    pub next_action: Option<SetupIntentNextAction>,
    pub on_behalf_of: Option<Expandable<Account>>,
    pub payment_method: Option<Expandable<PaymentMethod>>,
    pub payment_method_configuration_details: Option<PaymentMethodConfigurationDetails>,
    pub payment_method_options: Option<SetupIntentPaymentMethodOptions>,
    pub payment_method_types: Vec<String>,
    pub single_use_mandate: Option<Expandable<Mandate>>,
    pub status: Option<SetupIntentStatus>,
    pub usage: Option<SetupIntentUsage>,
}

impl Object for SetupIntent {
    const OBJECT: &'static str = "setup_intent";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AutomaticPaymentMethods {
    pub allow_redirects: Option<AllowRedirects>,
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodConfigurationDetails {
    pub id: String,
    pub parent: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupIntentNextAction {
    pub redirect_to_url: Option<NextActionRedirectToUrl>,
    #[serde(rename = "type")]
    pub type_: Option<NextActionType>,
    /// Opaque to everything but Stripe.js.
    pub use_stripe_sdk: Option<serde_json::Value>,
    pub verify_with_microdeposits: Option<NextActionVerifyWithMicrodeposits>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NextActionRedirectToUrl {
    pub return_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NextActionVerifyWithMicrodeposits {
    pub arrival_date: Timestamp,
    pub hosted_verification_url: Option<String>,
    pub microdeposit_type: Option<MicrodepositType>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupIntentPaymentMethodOptions {
    pub acss_debit: Option<AcssDebitOptions>,
    pub card: Option<CardOptions>,
    pub sepa_debit: Option<serde_json::Value>,
    pub us_bank_account: Option<UsBankAccountOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AcssDebitOptions {
    pub currency: Option<Currency>,
    pub mandate_options: Option<AcssDebitMandateOptions>,
    pub verification_method: Option<VerificationMethod>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AcssDebitMandateOptions {
    pub custom_mandate_url: Option<String>,
    pub default_for: Option<Vec<AcssDebitDefaultFor>>,
    pub interval_description: Option<String>,
    pub payment_schedule: Option<AcssDebitPaymentSchedule>,
    pub transaction_type: Option<AcssDebitTransactionType>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardOptions {
    pub mandate_options: Option<CardMandateOptions>,
    pub network: Option<CardNetwork>,
    pub request_three_d_secure: Option<RequestThreeDSecure>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardMandateOptions {
    pub amount: i64,
    pub amount_type: Option<String>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub end_date: Option<Timestamp>,
    pub interval: Option<String>,
    pub interval_count: Option<i64>,
    pub reference: Option<String>,
    pub start_date: Option<Timestamp>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UsBankAccountOptions {
    pub mandate_options: Option<UsBankAccountMandateOptions>,
    pub verification_method: Option<VerificationMethod>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UsBankAccountMandateOptions {
    pub collection_method: Option<UsBankAccountCollectionMethod>,
}

/// Creates or updates a SetupIntent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SetupIntentParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_to_self: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_payment_methods: Option<AutomaticPaymentMethodsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_directions: Option<Vec<FlowDirection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_options: Option<PaymentMethodOptionsParams>,
    /// `Some(vec![])` clears the list on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_use: Option<SingleUseParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<SetupIntentUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_stripe_sdk: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AutomaticPaymentMethodsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_redirects: Option<AllowRedirects>,
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentMethodOptionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardOptionsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_bank_account: Option<UsBankAccountOptionsParams>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CardOptionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<CardNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_three_d_secure: Option<RequestThreeDSecure>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UsBankAccountOptionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<VerificationMethod>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SingleUseParams {
    pub amount: i64,
    pub currency: Option<Currency>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SetupIntentCancelParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<SetupIntentCancellationReason>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SetupIntentConfirmParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_data: Option<MandateDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_options: Option<PaymentMethodOptionsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_stripe_sdk: Option<bool>,
}

/// Verifies a bank account with either the two amounts or the descriptor code.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SetupIntentVerifyMicrodepositsParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amounts: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SetupIntentListParams {
    #[serde(flatten)]
    pub list_params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_to_self: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl_params!(
    SetupIntentParams,
    SetupIntentCancelParams,
    SetupIntentConfirmParams,
    SetupIntentVerifyMicrodepositsParams,
);
impl_list_params!(SetupIntentListParams);
