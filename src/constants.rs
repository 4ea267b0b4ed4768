use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Statutory VAT rate applied to Indonesian Rupiah bills that do not
/// state their own VAT amount.
pub const DEFAULT_VAT_RATE_IDR: Decimal = dec!(0.11);

/// Upper bound on discount clamp-and-redistribute passes. Each pass
/// clamps at least one person, so person count already bounds the loop;
/// this is the hard stop.
pub const MAX_CLAMP_PASSES: usize = 64;
