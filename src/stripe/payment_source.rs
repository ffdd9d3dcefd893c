use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::stripe::account::Account;
use crate::stripe::bank_account::BankAccount;
use crate::stripe::card::Card;
use crate::stripe::source::Source;
use crate::types::Object;

/// Anything a customer can be charged through, discriminated by `object`.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentSource {
    Account(Box<Account>),
    BankAccount(Box<BankAccount>),
    Card(Box<Card>),
    Source(Box<Source>),
    /// A source kind this crate does not model, kept as received.
    Other(Value),
}

impl PaymentSource {
    /// The wire `object` value of the wrapped source.
    pub fn object(&self) -> &str {
        match self {
            PaymentSource::Account(_) => Account::OBJECT,
            PaymentSource::BankAccount(_) => BankAccount::OBJECT,
            PaymentSource::Card(_) => Card::OBJECT,
            PaymentSource::Source(_) => Source::OBJECT,
            PaymentSource::Other(value) => value.get("object").and_then(Value::as_str).unwrap_or_default(),
        }
    }

    pub fn as_card(&self) -> Option<&Card> {
        match self {
            PaymentSource::Card(card) => Some(card),
            _ => None,
        }
    }
}

impl Object for PaymentSource {
    const OBJECT: &'static str = "payment_source";

    fn id(&self) -> &str {
        match self {
            PaymentSource::Account(account) => &account.id,
            PaymentSource::BankAccount(bank_account) => &bank_account.id,
            PaymentSource::Card(card) => &card.id,
            PaymentSource::Source(source) => &source.id,
            PaymentSource::Other(value) => value.get("id").and_then(Value::as_str).unwrap_or_default(),
        }
    }
}

impl Serialize for PaymentSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PaymentSource::Account(account) => account.serialize(serializer),
            PaymentSource::BankAccount(bank_account) => bank_account.serialize(serializer),
            PaymentSource::Card(card) => card.serialize(serializer),
            PaymentSource::Source(source) => source.serialize(serializer),
            PaymentSource::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PaymentSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let object = match value.get("object") {
            Some(Value::String(object)) => object.clone(),
            Some(_) => return Err(D::Error::custom("payment source `object` must be a string")),
            None => return Err(D::Error::missing_field("object")),
        };

        let source = match object.as_str() {
            "account" => PaymentSource::Account(Box::new(from_value(value)?)),
            "bank_account" => PaymentSource::BankAccount(Box::new(from_value(value)?)),
            "card" => PaymentSource::Card(Box::new(from_value(value)?)),
            "source" => PaymentSource::Source(Box::new(from_value(value)?)),
            _ => PaymentSource::Other(value),
        };
        Ok(source)
    }
}

fn from_value<T: DeserializeOwned, E: serde::de::Error>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}
