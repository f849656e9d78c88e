//! Addresses Entity Module

pub mod address;

pub use address::Address;
