pub mod fixed_math;
pub mod reward;
pub mod validation;
