//! Typed models for the Stripe API and a thin blocking + async backend to
//! send them.
//!
//! ```no_run
//! use stripe_models::params::ParamsContainer;
//! use stripe_models::stripe::setup_intent::{SetupIntent, SetupIntentParams};
//! use stripe_models::{Method, StripeClient};
//!
//! # fn main() -> Result<(), stripe_models::Error> {
//! let client = StripeClient::from_env()?;
//! let mut params = SetupIntentParams {
//!     customer: Some("cus_123".to_string()),
//!     ..Default::default()
//! };
//! params.add_metadata("order_id", "6735");
//! let intent: SetupIntent = client.call(Method::POST, "/v1/setup_intents", &params)?;
//! println!("{:?}", intent.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod form;
pub mod logger;
pub mod params;
pub mod stripe;
pub mod types;

pub use client::{format_url_path, StripeClient, API_VERSION};
pub use error::Error;
pub use reqwest::Method;
pub use types::{Expandable, List, ListMeta, Metadata, Object, Timestamp};
