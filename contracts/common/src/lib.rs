#![deny(warnings)]
#![no_std]

#[cfg(test)]
extern crate std;

mod fixedu128;

pub use fixedu128::*;

/// Number of fractional digits of fixed values, matches the native token scale
pub const DECIMALS: u32 = 18;
