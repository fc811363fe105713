use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidSupplyRatio = 100,

    BatchTooLarge = 200,

    DivisionByZero = 400,
    ArithmeticOverflow = 401,
    ArithmeticUnderflow = 402,
}

impl Error {
    /// Human readable description for callers surfacing the failure
    pub fn message(&self) -> &'static str {
        match self {
            Error::InvalidSupplyRatio => "circulating supply exceeds total supply",
            Error::BatchTooLarge => "too many records in batch",
            Error::DivisionByZero => "division by zero",
            Error::ArithmeticOverflow => "arithmetic overflow",
            Error::ArithmeticUnderflow => "arithmetic underflow",
        }
    }
}
