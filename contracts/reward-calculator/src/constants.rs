/// Max number of records evaluated by a single batch call
pub const MAX_BATCH_SIZE: u32 = 64;
