use crate::prelude::*;

/// A non-negative quantity of the chain's native token, in base units.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    From,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub const fn from_base_units(base_units: u128) -> Self {
        Self(base_units)
    }

    pub const fn base_units(&self) -> u128 {
        self.0
    }

    /// Parses a decimal string such as `"0.015"` into base units, where one
    /// whole unit is `10^decimals` base units.
    pub fn parse_units(value: &str, decimals: u8) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidAmount {
            bad_value: value.to_owned(),
            reason: reason.to_owned(),
        };
        let scale = scale_for(decimals).ok_or_else(|| invalid("too many decimals"))?;

        let trimmed = value.trim();
        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("empty"));
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected decimal digits"));
        }
        if fraction.len() > usize::from(decimals) {
            return Err(invalid("more fractional digits than the token has decimals"));
        }

        let whole = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u128>()
                .map_err(|_| invalid("integer part overflows"))?
        };
        let fraction = if fraction.is_empty() {
            0
        } else {
            let padding = scale_for(decimals - fraction.len() as u8).unwrap_or(1);
            fraction
                .parse::<u128>()
                .map_err(|_| invalid("fractional part overflows"))?
                * padding
        };

        whole
            .checked_mul(scale)
            .and_then(|w| w.checked_add(fraction))
            .map(Self)
            .ok_or_else(|| invalid("overflows u128"))
    }

    /// Formats the amount as whole units, without trailing zeros.
    pub fn format_units(&self, decimals: u8) -> String {
        let Some(scale) = scale_for(decimals) else {
            return self.0.to_string();
        };
        let whole = self.0 / scale;
        let fraction = self.0 % scale;
        if fraction == 0 {
            return whole.to_string();
        }
        let fraction = format!("{fraction:0>width$}", width = usize::from(decimals));
        format!("{whole}.{}", fraction.trim_end_matches('0'))
    }
}

fn scale_for(decimals: u8) -> Option<u128> {
    10u128.checked_pow(u32::from(decimals))
}

/// How amounts are shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct Denomination {
    #[getset(get = "pub")]
    #[builder(default = DEFAULT_DECIMALS)]
    decimals: u8,

    #[getset(get = "pub")]
    #[builder(into, default = DEFAULT_SYMBOL.to_owned())]
    symbol: String,
}

pub const DEFAULT_DECIMALS: u8 = 12;
pub const DEFAULT_SYMBOL: &str = "UNIT";

impl Default for Denomination {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Denomination {
    pub fn parse(&self, value: &str) -> Result<Amount> {
        Amount::parse_units(value, self.decimals)
    }

    pub fn format(&self, amount: Amount) -> String {
        format!("{} {}", amount.format_units(self.decimals), self.symbol)
    }
}
