//! # Transport Orders
//!
//! Vehicle dispatch orders for the retail admin back office: each order
//! covers one or more delivery breakdowns, is validated as a unit before it
//! is committed, and is persisted as a JSON array in a single storage slot.

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod errors;
pub mod implementation;
pub mod types;

// Re-exports for public API
pub use errors::{TransportError, ValidationError};
pub use implementation::storage::{FileStore, MemoryStore, OrderStore};
pub use implementation::transport_orders::{
    DeliveryBreakdown, DeliveryEdit, DeliveryId, OrderFilter, OrderPage, PaymentFilter,
    PaymentMethod, PaymentStatus, TransportOrder, TransportOrderDraft, TransportOrderId,
    TransportOrderService, TransportOrderValidator, TransportStatus, ValidatedOrder,
};
pub use types::{TransportConfig, district_catalog};
