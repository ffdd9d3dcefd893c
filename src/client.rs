use std::env as stdenv;

use dotenvy::dotenv;
use log::{debug, error, info};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::form;
use crate::params::{new_idempotency_key, ListParams, ListParamsContainer, RequestParams};
use crate::stripe::{ApiError, ErrorResponse};
use crate::types::{List, Object};

/// Stripe API version every request is pinned to.
pub const API_VERSION: &str = env!("STRIPE_API_VERSION");
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
pub const USER_AGENT_VALUE: &str = concat!("Stripe/v1 RustBindings/", env!("CARGO_PKG_VERSION"));

const MAX_IDEMPOTENCY_KEY_LEN: usize = 255;
const BODY_SAMPLE_LEN: usize = 500;

#[derive(Clone)]
pub struct StripeClient {
    pub api_key: String,
    pub api_base: String,
}

/// A request ready to hand to either reqwest client.
struct Prepared {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<String>,
}

impl StripeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Reads `STRIPE_SECRET_KEY` and the optional `STRIPE_API_BASE`, loading
    /// a `.env` file first when there is one.
    pub fn from_env() -> Result<Self, Error> {
        dotenv().ok();
        let api_key = stdenv::var("STRIPE_SECRET_KEY").map_err(|_| Error::MissingEnv("STRIPE_SECRET_KEY"))?;
        let mut client = Self::new(api_key);
        if let Ok(api_base) = stdenv::var("STRIPE_API_BASE") {
            client.api_base = api_base;
        }
        Ok(client)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sends one request and decodes the response into `T`.
    ///
    /// `GET` and `DELETE` carry `params` in the query string, anything else
    /// as a form body.
    pub fn call<T, P>(&self, method: Method, path: &str, params: &P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: RequestParams + ?Sized,
    {
        let prepared = self.prepare(method, path, params)?;
        debug!("Requesting {} {}", prepared.method, path);
        let mut request = reqwest::blocking::Client::new()
            .request(prepared.method, prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }
        let response = request.send()?;
        let status = response.status();
        let request_id = request_id(response.headers());
        let body = response.text()?;
        handle_response(status, request_id, &body)
    }

    pub async fn async_call<T, P>(&self, method: Method, path: &str, params: &P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: RequestParams + ?Sized,
    {
        let prepared = self.prepare(method, path, params)?;
        debug!("Requesting {} {}", prepared.method, path);
        let mut request = reqwest::Client::new()
            .request(prepared.method, prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }
        let response = request.send().await?;
        let status = response.status();
        let request_id = request_id(response.headers());
        let body = response.text().await?;
        handle_response(status, request_id, &body)
    }

    /// Fetches every page of a list endpoint, or just the first one when
    /// `single` is set.
    pub fn list_all<T, P>(&self, path: &str, params: &P) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned + Object,
        P: RequestParams + ListParamsContainer + Clone,
    {
        let mut params = params.clone();
        let mut objects = Vec::new();
        loop {
            let page: List<T> = self.call(Method::GET, path, &params)?;
            let cursor = next_cursor(&page, params.list_params());
            objects.extend(page.data);
            match cursor {
                Some(cursor) => advance(params.list_params_mut(), cursor),
                None => break,
            }
        }
        Ok(objects)
    }

    pub async fn async_list_all<T, P>(&self, path: &str, params: &P) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned + Object,
        P: RequestParams + ListParamsContainer + Clone,
    {
        let mut params = params.clone();
        let mut objects = Vec::new();
        loop {
            let page: List<T> = self.async_call(Method::GET, path, &params).await?;
            let cursor = next_cursor(&page, params.list_params());
            objects.extend(page.data);
            match cursor {
                Some(cursor) => advance(params.list_params_mut(), cursor),
                None => break,
            }
        }
        Ok(objects)
    }

    fn prepare<P>(&self, method: Method, path: &str, params: &P) -> Result<Prepared, Error>
    where
        P: RequestParams + ?Sized,
    {
        let options = params.options();
        let encoded = form::encode(params)?;

        let mut url = format!("{}{}", self.api_base.trim_end_matches('/'), path);
        let mut body = None;
        if method == Method::GET || method == Method::DELETE {
            if !encoded.is_empty() {
                url.push('?');
                url.push_str(&encoded);
            }
        } else {
            body = Some(encoded);
        }

        let mut headers = HeaderMap::new();
        insert_header(&mut headers, AUTHORIZATION.as_str(), &format!("Bearer {}", self.api_key))?;
        insert_header(&mut headers, "Stripe-Version", API_VERSION)?;
        insert_header(&mut headers, USER_AGENT.as_str(), USER_AGENT_VALUE)?;
        if body.is_some() {
            insert_header(&mut headers, CONTENT_TYPE.as_str(), "application/x-www-form-urlencoded")?;
        }

        let idempotency_key = match options.idempotency_key {
            Some(key) => Some(key.trim().to_string()),
            None if method == Method::POST || method == Method::DELETE => Some(new_idempotency_key()),
            None => None,
        };
        if let Some(key) = idempotency_key {
            if key.chars().count() > MAX_IDEMPOTENCY_KEY_LEN {
                return Err(Error::IdempotencyKeyTooLong(key.chars().count()));
            }
            insert_header(&mut headers, "Idempotency-Key", &key)?;
        }
        if let Some(account) = options.stripe_account {
            insert_header(&mut headers, "Stripe-Account", account.trim())?;
        }
        for (name, value) in &options.headers {
            insert_header(&mut headers, name, value)?;
        }

        Ok(Prepared { method, url, headers, body })
    }
}

/// Fills `{}` placeholders in `template` with URL-escaped `segments`.
pub fn format_url_path(template: &str, segments: &[&str]) -> String {
    let mut segments = segments.iter();
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(at) = rest.find("{}") {
        path.push_str(&rest[..at]);
        if let Some(segment) = segments.next() {
            // form encoding turns spaces into `+`; a path needs `%20`.
            let escaped: String = url::form_urlencoded::byte_serialize(segment.as_bytes()).collect();
            path.push_str(&escaped.replace('+', "%20"));
        }
        rest = &rest[at + 2..];
    }
    path.push_str(rest);
    path
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), Error> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidHeader(name.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name.to_string()))?;
    headers.insert(header_name, header_value);
    Ok(())
}

fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("Request-Id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Cursor for the next page, or `None` when pagination should stop.
fn next_cursor<T: Object>(page: &List<T>, params: &ListParams) -> Option<String> {
    if params.single || !page.has_more() {
        return None;
    }
    let id = if params.ending_before.is_some() {
        page.first_id()
    } else {
        page.last_id()
    };
    id.map(str::to_string)
}

fn advance(params: &mut ListParams, cursor: String) {
    if params.ending_before.is_some() {
        params.ending_before = Some(cursor);
    } else {
        params.starting_after = Some(cursor);
    }
}

fn handle_response<T: DeserializeOwned>(status: StatusCode, request_id: Option<String>, body: &str) -> Result<T, Error> {
    if status.is_success() {
        let mut deserializer = serde_json::Deserializer::from_str(body);
        return serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            let path = e.path().to_string();
            let source = e.into_inner();
            error!("Could not decode {} response at `{}`: {}", status.as_u16(), path, source);
            Error::Decode {
                status: status.as_u16(),
                path,
                sample: body_sample(body),
                source,
            }
        });
    }

    let mut api_error = match decode_error(body) {
        Ok(api_error) => api_error,
        Err(e) => {
            error!("Unexpected {} response without an error object: {}", status.as_u16(), e);
            return Err(Error::Unexpected {
                status: status.as_u16(),
                body: body_sample(body),
            });
        }
    };
    api_error.http_status = Some(status.as_u16());
    if request_id.is_some() {
        api_error.request_id = request_id;
    }

    if status == StatusCode::PAYMENT_REQUIRED {
        info!("Request failed with error: {}", api_error);
    } else {
        error!("Request failed with error: {}", api_error);
    }
    Err(api_error.into())
}

/// Reads `{"error": {...}}`, or the flat `{"error": "...", "error_description": ...}`
/// body the OAuth endpoints return.
fn decode_error(body: &str) -> Result<ApiError, serde_json::Error> {
    let enveloped = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => return Ok(response.error),
        Err(e) => e,
    };
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) if api_error.oauth_error.is_some() => Ok(api_error),
        _ => Err(enveloped),
    }
}

/// First characters of a body on a single line, for error messages.
fn body_sample(body: &str) -> String {
    body.chars()
        .take(BODY_SAMPLE_LEN)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
