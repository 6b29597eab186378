//! # Transport Order Types - Delivery Breakdown
//!
//! One customer-bound shipment within a transport order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::basic_types::{DeliveryId, PaymentMethod, PaymentStatus};

/// Delivery breakdown within a transport order.
///
/// Serialized with camelCase keys; this is the storage slot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryBreakdown {
    /// Delivery ID.
    pub id:                DeliveryId,
    /// Destination label.
    #[serde(default)]
    pub destination:       String,
    /// Route name.
    pub route_name:        String,
    /// Packages carried for this delivery.
    pub packages_assigned: i64,
    /// Receiving customer.
    pub customer_name:     String,
    /// District, a key of the district catalog.
    pub district:          String,
    /// Collection point within the district.
    pub pickup_point:      String,
    /// Hand-off point within the district.
    pub drop_point:        String,
    /// Delivery charges.
    #[serde(default)]
    pub charges_amount:    u64,
    /// Payment method.
    #[serde(default)]
    pub payment_method:    PaymentMethod,
    /// Payment status.
    #[serde(default)]
    pub payment_status:    PaymentStatus,
}

/// Delivery fields that must not be blank on submit, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryField {
    /// Customer name.
    CustomerName,
    /// District.
    District,
    /// Pickup point.
    PickupPoint,
    /// Drop point.
    DropPoint,
    /// Route name.
    RouteName,
}

impl DeliveryField {
    /// Required fields in the order they are checked.
    pub const REQUIRED: [Self; 5] = [
        Self::CustomerName,
        Self::District,
        Self::PickupPoint,
        Self::DropPoint,
        Self::RouteName,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::CustomerName => "customer name",
            Self::District => "district",
            Self::PickupPoint => "pickup point",
            Self::DropPoint => "drop point",
            Self::RouteName => "route name",
        }
    }
}

impl fmt::Display for DeliveryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        let mut chars = label.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

/// Single-field edit applied to a delivery while building a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryEdit {
    /// Sets the destination.
    Destination(String),
    /// Sets the route name.
    RouteName(String),
    /// Sets the customer name.
    CustomerName(String),
    /// Sets the district; clears pickup and drop points.
    District(String),
    /// Sets the pickup point.
    PickupPoint(String),
    /// Sets the drop point.
    DropPoint(String),
    /// Sets the packages assigned.
    PackagesAssigned(i64),
    /// Sets the charges.
    ChargesAmount(u64),
    /// Sets the payment method.
    PaymentMethod(PaymentMethod),
    /// Sets the payment status.
    PaymentStatus(PaymentStatus),
}
