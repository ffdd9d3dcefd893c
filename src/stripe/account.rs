use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::types::{Currency, Metadata, Object, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Custom,
    Express,
    None,
    Standard,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Company,
    GovernmentEntity,
    Individual,
    NonProfit,
    #[serde(other)]
    Other(String),
}

/// A Stripe account, usually a Connect account referenced by `on_behalf_of`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub object: String,
    pub business_type: Option<BusinessType>,
    pub charges_enabled: bool,
    pub country: Option<String>,
    pub created: Timestamp,
    pub default_currency: Option<Currency>,
    pub deleted: bool,
    pub details_submitted: bool,
    pub email: Option<String>,
    pub metadata: Metadata,
    pub payouts_enabled: bool,
    #[serde(rename = "type")]
    pub type_: Option<AccountType>,
}

impl Object for Account {
    const OBJECT: &'static str = "account";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A Connect platform application (`ca_...`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Application {
    pub id: String,
    pub object: String,
    pub deleted: bool,
    pub name: Option<String>,
}

impl Object for Application {
    const OBJECT: &'static str = "application";

    fn id(&self) -> &str {
        &self.id
    }
}
