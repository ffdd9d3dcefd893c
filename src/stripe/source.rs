use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::types::{Address, Currency, Metadata, Object, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SourceFlow {
    CodeVerification,
    None,
    Receiver,
    Redirect,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Canceled,
    Chargeable,
    Consumed,
    Failed,
    Pending,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SourceUsage {
    Reusable,
    SingleUse,
    #[serde(other)]
    Other(String),
}

/// Legacy payment source (`src_...`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Source {
    pub id: String,
    pub object: String,
    pub amount: Option<i64>,
    pub client_secret: Option<String>,
    pub created: Timestamp,
    pub currency: Option<Currency>,
    pub customer: Option<String>,
    pub flow: Option<SourceFlow>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub owner: Option<SourceOwner>,
    pub statement_descriptor: Option<String>,
    pub status: Option<SourceStatus>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub usage: Option<SourceUsage>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceOwner {
    pub address: Option<Address>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub verified_address: Option<Address>,
    pub verified_email: Option<String>,
    pub verified_name: Option<String>,
    pub verified_phone: Option<String>,
}

impl Object for Source {
    const OBJECT: &'static str = "source";

    fn id(&self) -> &str {
        &self.id
    }
}
