use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::stripe::account::Account;
use crate::stripe::customer::Customer;
use crate::stripe::payment_method::CardCheck;
use crate::types::{Currency, Expandable, Metadata, Object};

/// Brand of a legacy card object. These are display names, not snake_case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
pub enum CardBrand {
    #[serde(rename = "American Express")]
    AmericanExpress,
    #[serde(rename = "Diners Club")]
    DinersClub,
    #[serde(rename = "Discover")]
    Discover,
    #[serde(rename = "JCB")]
    Jcb,
    #[serde(rename = "MasterCard")]
    MasterCard,
    #[serde(rename = "UnionPay")]
    UnionPay,
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "Visa")]
    Visa,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum CardFunding {
    Credit,
    Debit,
    Prepaid,
    Unknown,
    #[serde(other)]
    Other(String),
}

/// Payout speeds an external account supports.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethod {
    Instant,
    Standard,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum CardTokenizationMethod {
    AndroidPay,
    ApplePay,
    #[serde(other)]
    Other(String),
}

/// A card attached to a customer or a connected account.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Card {
    pub id: String,
    pub object: String,
    pub account: Option<Expandable<Account>>,
    pub address_city: Option<String>,
    pub address_country: Option<String>,
    pub address_line1: Option<String>,
    pub address_line1_check: Option<CardCheck>,
    pub address_line2: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub address_zip_check: Option<CardCheck>,
    pub available_payout_methods: Option<Vec<PayoutMethod>>,
    pub brand: Option<CardBrand>,
    pub country: Option<String>,
    pub currency: Option<Currency>,
    pub customer: Option<Expandable<Customer>>,
    pub cvc_check: Option<CardCheck>,
    pub default_for_currency: Option<bool>,
    pub deleted: bool,
    pub dynamic_last4: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<CardFunding>,
    pub last4: Option<String>,
    pub metadata: Metadata,
    pub name: Option<String>,
    pub status: Option<String>,
    pub tokenization_method: Option<CardTokenizationMethod>,
}

impl Object for Card {
    const OBJECT: &'static str = "card";

    fn id(&self) -> &str {
        &self.id
    }
}
