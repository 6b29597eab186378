//! Transport order management.
//!
//! Dispatch orders for a single vehicle, each carrying one or more delivery
//! breakdowns. The module is organized the same way as the rest of the
//! implementation tree:
//! - `types/`: identifiers, enums and the order/delivery data model
//! - `implementations/`: draft editing, validation and the order service

pub mod types {
    //! Type definitions for transport orders.

    pub mod basic_types;
    pub mod delivery_types;
    pub mod main_order_types;
    pub mod service_types;

    // Re-export commonly used types
    pub use basic_types::*;
    pub use delivery_types::*;
    pub use main_order_types::*;
    pub use service_types::*;
}

pub mod implementations {
    //! Business logic implementations.

    pub mod draft_impl;
    pub mod order_impl;
    pub mod service_impl;
    pub mod validator;

    pub use validator::TransportOrderValidator;
}


// Re-export main types for convenience
pub use implementations::TransportOrderValidator;
pub use types::*;
