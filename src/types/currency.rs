use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

/// Three-letter ISO currency code, lowercase on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize_enum_str, Serialize_enum_str)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Aed,
    Aud,
    Bgn,
    Brl,
    Cad,
    Chf,
    Clp,
    Cny,
    Czk,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Idr,
    Ils,
    Inr,
    Jpy,
    Krw,
    Mxn,
    Myr,
    Nok,
    Nzd,
    Php,
    Pln,
    Ron,
    Sek,
    Sgd,
    Thb,
    Try,
    Twd,
    Usd,
    Zar,
    #[serde(other)]
    Other(String),
}

impl Currency {
    /// Currencies charged in whole units, where `amount` is not multiplied by 100.
    pub fn is_zero_decimal(&self) -> bool {
        matches!(self, Currency::Clp | Currency::Jpy | Currency::Krw)
    }
}
