//! Request parameters shared by every endpoint.
//!
//! Resource parameter structs embed [`Params`] (or [`ListParams`]) with
//! `#[serde(flatten)]` and get the helper methods through
//! [`ParamsContainer`] / [`ListParamsContainer`].

use std::collections::BTreeMap;

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use chrono::Utc;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::{Metadata, Timestamp};

pub const ENDING_BEFORE: &str = "ending_before";
pub const STARTING_AFTER: &str = "starting_after";

/// Options that travel as HTTP headers instead of form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub idempotency_key: Option<String>,
    pub stripe_account: Option<String>,
    pub headers: Vec<(String, String)>,
}

/// Anything the client can send: form-encodable, plus header options.
pub trait RequestParams: Serialize {
    fn options(&self) -> RequestOptions;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Params {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Raw form keys for parameters this crate does not model yet.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
    #[serde(skip)]
    pub idempotency_key: Option<String>,
    #[serde(skip)]
    pub stripe_account: Option<String>,
    #[serde(skip)]
    pub headers: Vec<(String, String)>,
}

impl Params {
    pub fn options(&self) -> RequestOptions {
        RequestOptions {
            idempotency_key: self.idempotency_key.clone(),
            stripe_account: self.stripe_account.clone(),
            headers: self.headers.clone(),
        }
    }
}

pub trait ParamsContainer {
    fn params(&self) -> &Params;
    fn params_mut(&mut self) -> &mut Params;

    /// Asks the API to expand the given (dotted) field path in the response.
    fn add_expand(&mut self, field: &str) {
        self.params_mut().expand.push(field.to_string());
    }

    /// Sets one metadata key, keeping every key added before.
    fn add_metadata(&mut self, key: &str, value: &str) {
        self.params_mut()
            .metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.to_string(), value.to_string());
    }

    fn clear_metadata(&mut self) {
        self.params_mut().metadata = None;
    }

    fn add_extra(&mut self, key: &str, value: &str) {
        self.params_mut()
            .extra
            .insert(key.to_string(), value.to_string());
    }

    fn set_idempotency_key(&mut self, key: &str) {
        self.params_mut().idempotency_key = Some(key.to_string());
    }

    fn set_stripe_account(&mut self, account: &str) {
        self.params_mut().stripe_account = Some(account.to_string());
    }

    /// Extra header; overrides any header the client sets itself.
    fn add_header(&mut self, name: &str, value: &str) {
        self.params_mut()
            .headers
            .push((name.to_string(), value.to_string()));
    }
}

impl ParamsContainer for Params {
    fn params(&self) -> &Params {
        self
    }

    fn params_mut(&mut self) -> &mut Params {
        self
    }
}

impl RequestParams for Params {
    fn options(&self) -> RequestOptions {
        Params::options(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Filter {
    key: String,
    op: String,
    value: String,
}

/// Arbitrary `key[op]=value` list filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    filters: Vec<Filter>,
}

impl Filters {
    /// An empty `op` produces a plain `key=value` pair.
    pub fn add_filter(&mut self, key: &str, op: &str, value: &str) {
        self.filters.push(Filter {
            key: key.to_string(),
            op: op.to_string(),
            value: value.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Serialize for Filters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.filters.len()))?;
        for filter in &self.filters {
            if filter.op.is_empty() {
                map.serialize_entry(&filter.key, &filter.value)?;
            } else {
                map.serialize_entry(&format!("{}[{}]", filter.key, filter.op), &filter.value)?;
            }
        }
        map.end()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(flatten)]
    pub filters: Filters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Fetch a single page instead of following `has_more`.
    #[serde(skip)]
    pub single: bool,
    #[serde(skip)]
    pub stripe_account: Option<String>,
}

impl ListParams {
    pub fn options(&self) -> RequestOptions {
        RequestOptions {
            stripe_account: self.stripe_account.clone(),
            ..Default::default()
        }
    }
}

pub trait ListParamsContainer {
    fn list_params(&self) -> &ListParams;
    fn list_params_mut(&mut self) -> &mut ListParams;

    fn add_expand(&mut self, field: &str) {
        self.list_params_mut().expand.push(field.to_string());
    }

    fn set_stripe_account(&mut self, account: &str) {
        self.list_params_mut().stripe_account = Some(account.to_string());
    }
}

impl ListParamsContainer for ListParams {
    fn list_params(&self) -> &ListParams {
        self
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        self
    }
}

impl RequestParams for ListParams {
    fn options(&self) -> RequestOptions {
        ListParams::options(self)
    }
}

/// Range filter on a timestamp, e.g. `created[gte]=..`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RangeQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<Timestamp>,
}

/// A timestamp filter: either one exact value or a range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeQuery {
    Exact(Timestamp),
    Bounds(RangeQueryParams),
}

impl From<RangeQueryParams> for RangeQuery {
    fn from(bounds: RangeQueryParams) -> Self {
        RangeQuery::Bounds(bounds)
    }
}

/// Generates a fresh idempotency key: `<unix nanos>_<6 random url-safe chars>`.
pub fn new_idempotency_key() -> String {
    let now = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let random: [u8; 4] = rand::random();
    let encoded = URL_SAFE.encode(random);
    format!("{}_{}", now, &encoded[..6])
}

/// Implements [`ParamsContainer`] and [`RequestParams`] for structs with a
/// flattened `params: Params` field.
macro_rules! impl_params {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::params::ParamsContainer for $ty {
            fn params(&self) -> &$crate::params::Params {
                &self.params
            }

            fn params_mut(&mut self) -> &mut $crate::params::Params {
                &mut self.params
            }
        }

        impl $crate::params::RequestParams for $ty {
            fn options(&self) -> $crate::params::RequestOptions {
                self.params.options()
            }
        }
    )+};
}

/// Same as [`impl_params`] for structs with a flattened `list_params: ListParams`.
macro_rules! impl_list_params {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::params::ListParamsContainer for $ty {
            fn list_params(&self) -> &$crate::params::ListParams {
                &self.list_params
            }

            fn list_params_mut(&mut self) -> &mut $crate::params::ListParams {
                &mut self.list_params
            }
        }

        impl $crate::params::RequestParams for $ty {
            fn options(&self) -> $crate::params::RequestOptions {
                self.list_params.options()
            }
        }
    )+};
}

pub(crate) use impl_list_params;
pub(crate) use impl_params;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form;

    #[test]
    fn metadata_accumulates_and_overwrites_single_keys() {
        let mut params = Params::default();
        params.add_metadata("order_id", "6735");
        params.add_metadata("channel", "web");
        params.add_metadata("order_id", "6736");

        let metadata = params.metadata.as_ref().unwrap();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata["order_id"], "6736");
        assert_eq!(metadata["channel"], "web");

        params.clear_metadata();
        assert!(params.metadata.is_none());
    }

    #[test]
    fn expand_keeps_call_order() {
        let mut params = Params::default();
        params.add_expand("customer");
        params.add_expand("latest_attempt.payment_method");
        assert_eq!(
            form::encode(&params).unwrap(),
            "expand%5B0%5D=customer&expand%5B1%5D=latest_attempt.payment_method"
        );
    }

    #[test]
    fn header_options_stay_out_of_the_body() {
        let mut params = Params::default();
        params.set_idempotency_key("key_1");
        params.set_stripe_account("acct_1");
        params.add_header("Stripe-Context", "ctx");
        params.add_extra("foo[bar]", "baz");

        assert_eq!(form::encode(&params).unwrap(), "foo%5Bbar%5D=baz");
        let options = RequestParams::options(&params);
        assert_eq!(options.idempotency_key.as_deref(), Some("key_1"));
        assert_eq!(options.stripe_account.as_deref(), Some("acct_1"));
        assert_eq!(options.headers, vec![("Stripe-Context".to_string(), "ctx".to_string())]);
    }

    #[test]
    fn list_params_encode_filters_and_cursors() {
        let mut params = ListParams {
            limit: Some(3),
            starting_after: Some("seti_9".into()),
            ..Default::default()
        };
        params.filters.add_filter("created", "gte", "1700000000");
        params.filters.add_filter("customer", "", "cus_1");
        params.set_stripe_account("acct_1");

        let pairs = form::to_pairs(&params).unwrap();
        assert!(pairs.contains(&("created[gte]".to_string(), "1700000000".to_string())));
        assert!(pairs.contains(&("customer".to_string(), "cus_1".to_string())));
        assert!(pairs.contains(&("limit".to_string(), "3".to_string())));
        assert!(pairs.contains(&("starting_after".to_string(), "seti_9".to_string())));
        assert_eq!(pairs.len(), 4);
        assert_eq!(RequestParams::options(&params).stripe_account.as_deref(), Some("acct_1"));
        assert_eq!(RequestParams::options(&params).idempotency_key, None);
    }

    #[test]
    fn created_filters_encode_as_exact_or_bounds() {
        #[derive(Serialize)]
        struct Query {
            created: RangeQuery,
        }

        let exact = Query { created: RangeQuery::Exact(1_700_000_000) };
        assert_eq!(form::encode(&exact).unwrap(), "created=1700000000");

        let bounds = Query {
            created: RangeQueryParams {
                gte: Some(1_700_000_000),
                lt: Some(1_800_000_000),
                ..Default::default()
            }
            .into(),
        };
        assert_eq!(
            form::encode(&bounds).unwrap(),
            "created%5Bgte%5D=1700000000&created%5Blt%5D=1800000000"
        );
    }

    #[test]
    fn idempotency_keys_are_unique_and_shaped() {
        let first = new_idempotency_key();
        let second = new_idempotency_key();
        assert_ne!(first, second);

        let (nanos, suffix) = first.split_once('_').unwrap();
        assert!(nanos.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 6);
    }
}
