//! Stripe resources, their enums and their request parameters.

pub mod account;
pub mod api_error;
pub mod bank_account;
pub mod card;
pub mod charge;
pub mod customer;
pub mod event;
pub mod mandate;
pub mod payment_intent;
pub mod payment_method;
pub mod payment_source;
pub mod setup_attempt;
pub mod setup_intent;
pub mod source;

pub use account::{Account, Application};
pub use api_error::{ApiError, DeclineCode, ErrorCode, ErrorKind, ErrorResponse, ErrorType};
pub use bank_account::BankAccount;
pub use card::Card;
pub use charge::Charge;
pub use customer::Customer;
pub use event::{Event, EventType};
pub use mandate::Mandate;
pub use payment_intent::PaymentIntent;
pub use payment_method::{PaymentMethod, PaymentMethodType};
pub use payment_source::PaymentSource;
pub use setup_attempt::SetupAttempt;
pub use setup_intent::SetupIntent;
pub use source::Source;
