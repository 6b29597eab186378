//! Main transport order types.
//!
//! `TransportOrder` is the committed record kept in the order list and the
//! storage slot. `TransportOrderDraft` is the transient form state it is
//! built from, and `ValidatedOrder` is a draft that passed validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    basic_types::{TransportOrderId, TransportStatus},
    delivery_types::DeliveryBreakdown,
};

/// Committed transport order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOrder {
    /// Order ID.
    pub id:             TransportOrderId,
    /// Display code, e.g. `TRN001`.
    pub order_id:       String,
    /// Vehicle type.
    pub vehicle_type:   String,
    /// Vehicle registration number.
    pub vehicle_number: String,
    /// Driver name.
    pub driver_name:    String,
    /// Driver phone number.
    pub driver_contact: String,
    /// Declared capacity in cartons.
    pub total_cartons:  i64,
    /// Delivery breakdowns, in display order.
    pub deliveries:     Vec<DeliveryBreakdown>,
    /// Dispatch status.
    pub status:         TransportStatus,
    /// Creation date.
    pub created_date:   NaiveDate,
    /// Sum of packages assigned, computed at submit time.
    pub total_packages: i64,
}

/// Transient form state for creating or editing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOrderDraft {
    /// Vehicle type.
    pub vehicle_type:   String,
    /// Vehicle registration number.
    pub vehicle_number: String,
    /// Driver name.
    pub driver_name:    String,
    /// Driver phone number.
    pub driver_contact: String,
    /// Declared capacity in cartons.
    pub total_cartons:  i64,
    /// Delivery breakdowns.
    pub deliveries:     Vec<DeliveryBreakdown>,
}

/// Draft accepted by the validator, with derived fields computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    /// The accepted draft.
    pub draft:          TransportOrderDraft,
    /// Sum of packages assigned.
    pub total_packages: i64,
}

impl ValidatedOrder {
    /// Builds the committed order; identity and lifecycle fields are the
    /// caller's.
    #[must_use]
    pub fn into_order(
        self, id: TransportOrderId, order_id: impl Into<String>, status: TransportStatus,
        created_date: NaiveDate,
    ) -> TransportOrder {
        let draft = self.draft;
        TransportOrder {
            id,
            order_id: order_id.into(),
            vehicle_type: draft.vehicle_type,
            vehicle_number: draft.vehicle_number,
            driver_name: draft.driver_name,
            driver_contact: draft.driver_contact,
            total_cartons: draft.total_cartons,
            deliveries: draft.deliveries,
            status,
            created_date,
            total_packages: self.total_packages,
        }
    }
}
