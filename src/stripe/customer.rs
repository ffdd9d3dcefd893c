use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::params::{impl_list_params, impl_params, ListParams, Params, RangeQuery};
use crate::stripe::payment_method::PaymentMethod;
use crate::stripe::payment_source::PaymentSource;
use crate::types::{Address, AddressParams, Currency, Expandable, List, Metadata, Object, Shipping, ShippingParams, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum TaxExempt {
    Exempt,
    None,
    Reverse,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Customer {
    pub id: String,
    pub object: String,
    pub address: Option<Address>,
    /// Credit (negative) or debit (positive) applied to the next invoice, in the smallest currency unit.
    pub balance: i64,
    pub created: Timestamp,
    pub currency: Option<Currency>,
    pub default_source: Option<Expandable<PaymentSource>>,
    pub deleted: bool,
    pub delinquent: Option<bool>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub invoice_credit_balance: HashMap<String, i64>,
    pub invoice_prefix: Option<String>,
    pub invoice_settings: Option<CustomerInvoiceSettings>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub name: Option<String>,
    pub next_invoice_sequence: Option<i64>,
    pub phone: Option<String>,
    pub preferred_locales: Vec<String>,
    pub shipping: Option<Shipping>,
    pub sources: Option<List<PaymentSource>>,
    pub tax_exempt: Option<TaxExempt>,
}

impl Object for Customer {
    const OBJECT: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomerInvoiceSettings {
    pub custom_fields: Option<Vec<InvoiceCustomField>>,
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    pub footer: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InvoiceCustomField {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerParams {
    #[serde(flatten)]
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_settings: Option<CustomerInvoiceSettingsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_invoice_sequence: Option<i64>,
    /// Payment method to attach on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_locales: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<TaxExempt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_clock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerInvoiceSettingsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<InvoiceCustomField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerListParams {
    #[serde(flatten)]
    pub list_params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_clock: Option<String>,
}

impl_params!(CustomerParams);
impl_list_params!(CustomerListParams);
