use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::params::{impl_list_params, ListParams, RangeQuery};
use crate::stripe::account::{Account, Application};
use crate::stripe::api_error::ApiError;
use crate::stripe::customer::Customer;
use crate::stripe::payment_method::{PaymentMethod, PaymentMethodCardChecks, PaymentMethodType};
use crate::stripe::setup_intent::{FlowDirection, SetupIntent, SetupIntentUsage};
use crate::types::{Expandable, Object, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum SetupAttemptStatus {
    Abandoned,
    Failed,
    Processing,
    RequiresAction,
    RequiresConfirmation,
    Succeeded,
    #[serde(other)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum ThreeDSecureResult {
    AttemptAcknowledged,
    Authenticated,
    Exempted,
    Failed,
    NotSupported,
    ProcessingError,
    #[serde(other)]
    Other(String),
}

/// One attempt at confirming a SetupIntent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupAttempt {
    pub id: String,
    pub object: String,
    pub application: Option<Expandable<Application>>,
    pub attach_to_self: Option<bool>,
    pub created: Timestamp,
    pub customer: Option<Expandable<Customer>>,
    pub flow_directions: Option<Vec<FlowDirection>>,
    pub livemode: bool,
    pub on_behalf_of: Option<Expandable<Account>>,
    pub payment_method: Option<Expandable<PaymentMethod>>,
    pub payment_method_details: Option<SetupAttemptPaymentMethodDetails>,
    pub setup_error: Option<Box<ApiError>>,
    pub setup_intent: Option<Expandable<SetupIntent>>,
    pub status: Option<SetupAttemptStatus>,
    pub usage: Option<SetupIntentUsage>,
}

impl Object for SetupAttempt {
    const OBJECT: &'static str = "setup_attempt";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupAttemptPaymentMethodDetails {
    pub card: Option<SetupAttemptCard>,
    #[serde(rename = "type")]
    pub type_: Option<PaymentMethodType>,
}

/// Card used in the attempt. Brand and funding stay raw strings here, as on the wire.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupAttemptCard {
    pub brand: Option<String>,
    pub checks: Option<PaymentMethodCardChecks>,
    pub country: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub last4: Option<String>,
    pub network: Option<String>,
    pub three_d_secure: Option<SetupAttemptThreeDSecure>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SetupAttemptThreeDSecure {
    pub authentication_flow: Option<String>,
    pub result: Option<ThreeDSecureResult>,
    pub result_reason: Option<String>,
    pub transaction_id: Option<String>,
    pub version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SetupAttemptListParams {
    #[serde(flatten)]
    pub list_params: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
    /// Required: the SetupIntent whose attempts to list.
    pub setup_intent: String,
}

impl_list_params!(SetupAttemptListParams);
