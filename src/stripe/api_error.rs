//! The error object Stripe returns in place of a resource.

use std::borrow::Cow;
use std::fmt;

use serde_derive::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use crate::stripe::payment_intent::PaymentIntent;
use crate::stripe::payment_method::{PaymentMethod, PaymentMethodType};
use crate::stripe::payment_source::PaymentSource;
use crate::stripe::setup_intent::SetupIntent;

/// Placeholder written over client secrets before an error leaves the crate.
pub const REDACTED: &str = "REDACTED";

/// Broad category of an API error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ApiError,
    CardError,
    IdempotencyError,
    InvalidRequestError,
    #[serde(other)]
    Other(String),
}

/// Fine-grained machine-readable error code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    AcssDebitSessionIncomplete,
    ApiKeyExpired,
    AccountClosed,
    AccountCountryInvalidAddress,
    AccountErrorCountryChangeRequiresAdditionalSteps,
    AccountInformationMismatch,
    AccountInvalid,
    AccountNumberInvalid,
    AlipayUpgradeRequired,
    AmountTooLarge,
    AmountTooSmall,
    ApplicationFeesNotAllowed,
    AuthenticationRequired,
    BalanceInsufficient,
    BalanceInvalidParameter,
    BankAccountBadRoutingNumbers,
    BankAccountDeclined,
    BankAccountExists,
    BankAccountRestricted,
    BankAccountUnusable,
    BankAccountUnverified,
    BankAccountVerificationFailed,
    BillingInvalidMandate,
    BitcoinUpgradeRequired,
    CaptureChargeAuthorizationExpired,
    CaptureUnauthorizedPayment,
    CardDeclineRateLimitExceeded,
    CardDeclined,
    CardholderPhoneNumberRequired,
    ChargeAlreadyCaptured,
    ChargeAlreadyRefunded,
    ChargeDisputed,
    ChargeExceedsSourceLimit,
    ChargeExceedsTransactionLimit,
    ChargeExpiredForCapture,
    ChargeInvalidParameter,
    ChargeNotRefundable,
    ClearingCodeUnsupported,
    CountryCodeInvalid,
    CountryUnsupported,
    CouponExpired,
    CustomerMaxPaymentMethods,
    CustomerMaxSubscriptions,
    CustomerTaxLocationInvalid,
    DebitNotAuthorized,
    EmailInvalid,
    ExpiredCard,
    FinancialConnectionsAccountInactive,
    FinancialConnectionsNoSuccessfulTransactionRefresh,
    ForwardingApiInactive,
    ForwardingApiInvalidParameter,
    ForwardingApiUpstreamConnectionError,
    ForwardingApiUpstreamConnectionTimeout,
    IdempotencyKeyInUse,
    IncorrectAddress,
    IncorrectCvc,
    IncorrectNumber,
    IncorrectZip,
    InstantPayoutsConfigDisabled,
    InstantPayoutsCurrencyDisabled,
    InstantPayoutsLimitExceeded,
    InstantPayoutsUnsupported,
    InsufficientFunds,
    IntentInvalidState,
    IntentVerificationMethodMissing,
    InvalidCvc,
    InvalidCardType,
    InvalidCharacters,
    InvalidChargeAmount,
    InvalidExpiryMonth,
    InvalidExpiryYear,
    InvalidMandateReferencePrefixFormat,
    InvalidNumber,
    InvalidSourceUsage,
    InvalidTaxLocation,
    InvoiceNoCustomerLineItems,
    InvoiceNoPaymentMethodTypes,
    InvoiceNoSubscriptionLineItems,
    InvoiceNotEditable,
    InvoiceOnBehalfOfNotEditable,
    InvoicePaymentIntentRequiresAction,
    InvoiceUpcomingNone,
    LivemodeMismatch,
    LockTimeout,
    Missing,
    NoAccount,
    NotAllowedOnStandardAccount,
    OutOfInventory,
    OwnershipDeclarationNotAllowed,
    ParameterInvalidEmpty,
    ParameterInvalidInteger,
    ParameterInvalidStringBlank,
    ParameterInvalidStringEmpty,
    ParameterMissing,
    ParameterUnknown,
    ParametersExclusive,
    PaymentIntentActionRequired,
    PaymentIntentAuthenticationFailure,
    PaymentIntentIncompatiblePaymentMethod,
    PaymentIntentInvalidParameter,
    PaymentIntentKonbiniRejectedConfirmationNumber,
    PaymentIntentMandateInvalid,
    PaymentIntentPaymentAttemptExpired,
    PaymentIntentPaymentAttemptFailed,
    PaymentIntentUnexpectedState,
    PaymentMethodBankAccountAlreadyVerified,
    PaymentMethodBankAccountBlocked,
    PaymentMethodBillingDetailsAddressMissing,
    PaymentMethodConfigurationFailures,
    PaymentMethodCurrencyMismatch,
    PaymentMethodCustomerDecline,
    PaymentMethodInvalidParameter,
    PaymentMethodInvalidParameterTestmode,
    PaymentMethodMicrodepositFailed,
    PaymentMethodMicrodepositVerificationAmountsInvalid,
    PaymentMethodMicrodepositVerificationAmountsMismatch,
    PaymentMethodMicrodepositVerificationAttemptsExceeded,
    PaymentMethodMicrodepositVerificationDescriptorCodeMismatch,
    PaymentMethodMicrodepositVerificationTimeout,
    PaymentMethodNotAvailable,
    PaymentMethodProviderDecline,
    PaymentMethodProviderTimeout,
    PaymentMethodUnactivated,
    PaymentMethodUnexpectedState,
    PaymentMethodUnsupportedType,
    PayoutReconciliationNotReady,
    PayoutsLimitExceeded,
    PayoutsNotAllowed,
    PlatformApiKeyExpired,
    PlatformAccountRequired,
    PostalCodeInvalid,
    ProcessingError,
    ProductInactive,
    ProgressiveOnboardingLimitExceeded,
    RateLimit,
    ReferToCustomer,
    RefundDisputedPayment,
    ResourceAlreadyExists,
    ResourceMissing,
    ReturnIntentAlreadyProcessed,
    RoutingNumberInvalid,
    SepaUnsupportedAccount,
    SkuInactive,
    SecretKeyRequired,
    SetupAttemptFailed,
    SetupIntentAuthenticationFailure,
    SetupIntentInvalidParameter,
    SetupIntentMandateInvalid,
    SetupIntentSetupAttemptExpired,
    SetupIntentUnexpectedState,
    ShippingAddressInvalid,
    ShippingCalculationFailed,
    StateUnsupported,
    StatusTransitionInvalid,
    StripeTaxInactive,
    TlsVersionUnsupported,
    TaxIdInvalid,
    TaxesCalculationFailed,
    TerminalLocationCountryUnsupported,
    TerminalReaderBusy,
    TerminalReaderHardwareFault,
    TerminalReaderInvalidLocationForActivation,
    TerminalReaderInvalidLocationForPayment,
    TerminalReaderOffline,
    TerminalReaderTimeout,
    TestmodeChargesOnly,
    TokenAlreadyUsed,
    TokenCardNetworkInvalid,
    TokenInUse,
    TransferSourceBalanceParametersMismatch,
    TransfersNotAllowed,
    UrlInvalid,
    #[serde(other)]
    Other(String),
}

/// Card issuer's reason for a decline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "snake_case")]
pub enum DeclineCode {
    AuthenticationRequired,
    ApproveWithId,
    CallIssuer,
    CardNotSupported,
    CardVelocityExceeded,
    CurrencyNotSupported,
    DoNotHonor,
    DoNotTryAgain,
    DuplicateTransaction,
    ExpiredCard,
    Fraudulent,
    GenericDecline,
    IncorrectNumber,
    IncorrectCvc,
    IncorrectPin,
    IncorrectZip,
    InsufficientFunds,
    InvalidAccount,
    InvalidAmount,
    InvalidCvc,
    InvalidExpiryMonth,
    InvalidExpiryYear,
    InvalidNumber,
    InvalidPin,
    IssuerNotAvailable,
    LostCard,
    MerchantBlacklist,
    NewAccountInformationAvailable,
    NoActionTaken,
    NotPermitted,
    OfflinePinRequired,
    OnlineOrOfflinePinRequired,
    PickupCard,
    PinTryExceeded,
    ProcessingError,
    ReenterTransaction,
    RestrictedCard,
    RevocationOfAllAuthorizations,
    RevocationOfAuthorization,
    SecurityViolation,
    ServiceNotAllowed,
    StolenCard,
    StopPaymentOrder,
    TestmodeDecline,
    TransactionNotAllowed,
    TryAgainLater,
    WithdrawalCountLimitExceeded,
    #[serde(other)]
    Other(String),
}

/// An error returned by the API.
///
/// Can embed the PaymentIntent or SetupIntent involved, client secret
/// included. `Display` and `Debug` both redact it; use
/// [`ApiError::redact`] before serializing the error anywhere else.
#[derive(Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<DeclineCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    /// HTTP status of the response that carried the error.
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<Box<PaymentIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<Box<PaymentMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<PaymentMethodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_log_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_intent: Option<Box<SetupIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PaymentSource>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorType>,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub oauth_error: Option<String>,
    #[serde(rename = "error_description", skip_serializing_if = "Option::is_none")]
    pub oauth_error_description: Option<String>,
}

/// What a caller can do about an [`ApiError`], derived from its `type`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Something went wrong on Stripe's side.
    Api,
    /// The card can't be charged; the decline code says why.
    Card { decline_code: Option<DeclineCode> },
    /// An idempotency key was reused with different parameters.
    Idempotency,
    InvalidRequest,
    /// OAuth errors and types this crate does not know.
    Other,
}

impl ApiError {
    /// Returns the error with every embedded client secret replaced by
    /// [`REDACTED`]. Errors without an embedded intent are returned as is.
    pub fn redact(&self) -> Cow<'_, ApiError> {
        if self.payment_intent.is_none() && self.setup_intent.is_none() {
            return Cow::Borrowed(self);
        }
        let mut redacted = self.clone();
        if let Some(intent) = redacted.payment_intent.as_mut() {
            intent.client_secret = Some(REDACTED.to_string());
        }
        if let Some(intent) = redacted.setup_intent.as_mut() {
            intent.client_secret = Some(REDACTED.to_string());
        }
        Cow::Owned(redacted)
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.error_type {
            Some(ErrorType::ApiError) => ErrorKind::Api,
            Some(ErrorType::CardError) => ErrorKind::Card {
                decline_code: self.decline_code.clone(),
            },
            Some(ErrorType::IdempotencyError) => ErrorKind::Idempotency,
            Some(ErrorType::InvalidRequestError) => ErrorKind::InvalidRequest,
            Some(ErrorType::Other(_)) | None => ErrorKind::Other,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self.redact().as_ref()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.redact();
        f.debug_struct("ApiError")
            .field("charge", &error.charge)
            .field("code", &error.code)
            .field("decline_code", &error.decline_code)
            .field("doc_url", &error.doc_url)
            .field("http_status", &error.http_status)
            .field("message", &error.message)
            .field("param", &error.param)
            .field("payment_intent", &error.payment_intent)
            .field("payment_method", &error.payment_method)
            .field("payment_method_type", &error.payment_method_type)
            .field("request_id", &error.request_id)
            .field("request_log_url", &error.request_log_url)
            .field("setup_intent", &error.setup_intent)
            .field("source", &error.source)
            .field("error_type", &error.error_type)
            .field("oauth_error", &error.oauth_error)
            .field("oauth_error_description", &error.oauth_error_description)
            .finish()
    }
}

impl std::error::Error for ApiError {}

/// Body of every non-2xx response: `{"error": {...}}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}
