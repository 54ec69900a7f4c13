//! Control rules applied to classified sensor data.

pub mod policy;
