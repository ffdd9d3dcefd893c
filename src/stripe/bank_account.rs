use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::stripe::account::Account;
use crate::stripe::card::PayoutMethod;
use crate::stripe::customer::Customer;
use crate::stripe::payment_method::AccountHolderType;
use crate::types::{Currency, Expandable, Metadata, Object};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountStatus {
    Errored,
    New,
    Validated,
    VerificationFailed,
    Verified,
    #[serde(other)]
    Other(String),
}

/// A bank account attached to a customer (ACH source) or a connected account.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BankAccount {
    pub id: String,
    pub object: String,
    pub account: Option<Expandable<Account>>,
    pub account_holder_name: Option<String>,
    pub account_holder_type: Option<AccountHolderType>,
    pub account_type: Option<String>,
    pub available_payout_methods: Option<Vec<PayoutMethod>>,
    pub bank_name: Option<String>,
    pub country: Option<String>,
    pub currency: Option<Currency>,
    pub customer: Option<Expandable<Customer>>,
    pub default_for_currency: Option<bool>,
    pub deleted: bool,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub metadata: Metadata,
    pub routing_number: Option<String>,
    pub status: Option<BankAccountStatus>,
}

impl Object for BankAccount {
    const OBJECT: &'static str = "bank_account";

    fn id(&self) -> &str {
        &self.id
    }
}
