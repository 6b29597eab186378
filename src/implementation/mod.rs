//! Implementation details for transport orders

pub mod storage;
pub mod transport_orders;
