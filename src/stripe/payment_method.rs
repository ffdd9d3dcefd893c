use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::params::{impl_list_params, impl_params, ListParams, Params};
use crate::stripe::card::CardFunding;
use crate::stripe::customer::Customer;
use crate::types::{BillingDetails, BillingDetailsParams, Expandable, Metadata, Object, Timestamp};

/// The `type` discriminator of a payment method; names the populated detail hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    AcssDebit,
    Affirm,
    AfterpayClearpay,
    Alipay,
    Alma,
    AmazonPay,
    AuBecsDebit,
    BacsDebit,
    Bancontact,
    Blik,
    Boleto,
    Card,
    CardPresent,
    Cashapp,
    CustomerBalance,
    Eps,
    Fpx,
    Giropay,
    Grabpay,
    Ideal,
    InteracPresent,
    KakaoPay,
    Klarna,
    Konbini,
    KrCard,
    Link,
    Mobilepay,
    Multibanco,
    NaverPay,
    Oxxo,
    P24,
    PayByBank,
    Payco,
    Paynow,
    Paypal,
    Pix,
    Promptpay,
    RevolutPay,
    SamsungPay,
    SepaDebit,
    Sofort,
    Swish,
    Twint,
    UsBankAccount,
    WechatPay,
    Zip,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum AllowRedisplay {
    Always,
    Limited,
    Unspecified,
    #[serde(other)]
    Other(String),
}

/// Card brand as reported on a payment method (lowercase, unlike legacy cards).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodCardBrand {
    Amex,
    Diners,
    Discover,
    EftposAu,
    Jcb,
    Mastercard,
    Unionpay,
    Unknown,
    Visa,
    #[serde(other)]
    Other(String),
}

/// Result of an address or CVC check.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum CardCheck {
    Fail,
    Pass,
    Unavailable,
    Unchecked,
    #[serde(other)]
    Other(String),
}

/// Card networks a card can be processed on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum CardNetwork {
    Amex,
    CartesBancaires,
    Diners,
    Discover,
    EftposAu,
    Girocard,
    Interac,
    Jcb,
    Link,
    Mastercard,
    Unionpay,
    Unknown,
    Visa,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum CardWalletType {
    AmexExpressCheckout,
    ApplePay,
    GooglePay,
    Link,
    Masterpass,
    SamsungPay,
    VisaCheckout,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum AccountHolderType {
    Company,
    Individual,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountType {
    Checking,
    Savings,
    #[serde(other)]
    Other(String),
}

/// A customer's payment instrument.
///
/// Exactly one detail hash is populated, the one named by `type`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethod {
    pub id: String,
    pub object: String,
    pub acss_debit: Option<PaymentMethodAcssDebit>,
    pub allow_redisplay: Option<AllowRedisplay>,
    pub au_becs_debit: Option<PaymentMethodAuBecsDebit>,
    pub bacs_debit: Option<PaymentMethodBacsDebit>,
    pub billing_details: Option<BillingDetails>,
    pub card: Option<PaymentMethodCard>,
    pub cashapp: Option<PaymentMethodCashApp>,
    pub created: Timestamp,
    pub customer: Option<Expandable<Customer>>,
    pub ideal: Option<PaymentMethodIdeal>,
    pub link: Option<PaymentMethodLink>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub paypal: Option<PaymentMethodPaypal>,
    pub sepa_debit: Option<PaymentMethodSepaDebit>,
    pub sofort: Option<PaymentMethodSofort>,
    #[serde(rename = "type")]
    pub type_: Option<PaymentMethodType>,
    pub us_bank_account: Option<PaymentMethodUsBankAccount>,
}

impl Object for PaymentMethod {
    const OBJECT: &'static str = "payment_method";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodCard {
    pub brand: Option<PaymentMethodCardBrand>,
    pub checks: Option<PaymentMethodCardChecks>,
    /// Two-letter country code of the issuer.
    pub country: Option<String>,
    pub display_brand: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<CardFunding>,
    pub last4: Option<String>,
    pub networks: Option<PaymentMethodCardNetworks>,
    pub three_d_secure_usage: Option<ThreeDSecureUsage>,
    pub wallet: Option<PaymentMethodCardWallet>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodCardChecks {
    pub address_line1_check: Option<CardCheck>,
    pub address_postal_code_check: Option<CardCheck>,
    pub cvc_check: Option<CardCheck>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodCardNetworks {
    pub available: Vec<CardNetwork>,
    pub preferred: Option<CardNetwork>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThreeDSecureUsage {
    pub supported: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodCardWallet {
    pub dynamic_last4: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<CardWalletType>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodAcssDebit {
    pub bank_name: Option<String>,
    pub fingerprint: Option<String>,
    pub institution_number: Option<String>,
    pub last4: Option<String>,
    pub transit_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodAuBecsDebit {
    pub bsb_number: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodBacsDebit {
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub sort_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodCashApp {
    pub buyer_id: Option<String>,
    pub cashtag: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodIdeal {
    pub bank: Option<String>,
    pub bic: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodLink {
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodPaypal {
    pub country: Option<String>,
    pub payer_email: Option<String>,
    pub payer_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodSepaDebit {
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub country: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodSofort {
    pub country: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentMethodUsBankAccount {
    pub account_holder_type: Option<AccountHolderType>,
    pub account_type: Option<BankAccountType>,
    pub bank_name: Option<String>,
    pub financial_connections_account: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub routing_number: Option<String>,
}

/// Creates or updates a payment method.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentMethodParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acss_debit: Option<AcssDebitParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_redisplay: Option<AllowRedisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub au_becs_debit: Option<AuBecsDebitParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bacs_debit: Option<BacsDebitParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetailsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<PaymentMethodCardParams>,
    /// Connect only: the customer owning `payment_method` when cloning it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal: Option<IdealParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_debit: Option<SepaDebitParams>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<PaymentMethodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_bank_account: Option<UsBankAccountParams>,
}

/// Raw card details, or a token standing in for them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentMethodCardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AcssDebitParams {
    pub account_number: String,
    pub institution_number: String,
    pub transit_number: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuBecsDebitParams {
    pub account_number: String,
    pub bsb_number: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BacsDebitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IdealParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SepaDebitParams {
    pub iban: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UsBankAccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<AccountHolderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<BankAccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_connections_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentMethodAttachParams {
    #[serde(flatten)]
    pub params: Params,
    pub customer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentMethodDetachParams {
    #[serde(flatten)]
    pub params: Params,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PaymentMethodListParams {
    #[serde(flatten)]
    pub list_params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<PaymentMethodType>,
}

impl_params!(PaymentMethodParams, PaymentMethodAttachParams, PaymentMethodDetachParams);
impl_list_params!(PaymentMethodListParams);
