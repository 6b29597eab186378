//! Error types for transport orders

use thiserror::Error;

use crate::implementation::transport_orders::{DeliveryField, DeliveryId};

/// Rejection reasons for a transport order draft.
///
/// Every variant is recoverable: the draft is left untouched and the user
/// edits the form and resubmits. `Display` renders the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Vehicle type, vehicle number, driver name or driver contact is blank.
    #[error("Please fill all vehicle and driver details")]
    MissingVehicleOrDriverField,
    /// Driver contact is not exactly ten ASCII digits.
    #[error("Driver contact must be a 10-digit number")]
    InvalidDriverContact,
    /// The draft has no delivery breakdowns.
    #[error("Please add at least one delivery breakdown")]
    NoDeliveriesAdded,
    /// Declared total cartons is zero or negative.
    #[error("Total cartons must be greater than 0")]
    InvalidTotalCartons,
    /// A delivery has one or more required fields left blank.
    #[error(
        "Please fill all delivery details including customer name, district, pickup point, \
         drop point, and route name (delivery {}: missing {})",
        .index + 1,
        join_fields(.missing)
    )]
    IncompleteDeliveryFields {
        /// Position of the delivery in the draft.
        index:       usize,
        /// Delivery ID.
        delivery_id: DeliveryId,
        /// Blank fields, in form order.
        missing:     Vec<DeliveryField>,
    },
    /// A delivery assigns zero or negative packages.
    #[error("Packages assigned must be greater than 0 for all deliveries (delivery {})", .index + 1)]
    InvalidPackagesAssigned {
        /// Position of the delivery in the draft.
        index:       usize,
        /// Delivery ID.
        delivery_id: DeliveryId,
    },
    /// Packages across all deliveries exceed the declared cartons.
    #[error("Total packages ({total_packages}) cannot exceed total cartons ({total_cartons})")]
    PackagesExceedCartons {
        /// Sum of packages assigned, which may exceed `i64::MAX`.
        total_packages: i128,
        /// Declared total cartons.
        total_cartons:  i64,
    },
    /// District is not in the catalog (only with catalog enforcement).
    #[error("Unknown district '{district}' (delivery {})", .index + 1)]
    UnknownDistrict {
        /// Position of the delivery in the draft.
        index:       usize,
        /// Delivery ID.
        delivery_id: DeliveryId,
        /// District as entered.
        district:    String,
    },
    /// Pickup or drop point is not listed for the district (only with
    /// catalog enforcement).
    #[error("{field} '{point}' is not served in {district} (delivery {})", .index + 1)]
    PointNotInDistrict {
        /// Position of the delivery in the draft.
        index:       usize,
        /// Delivery ID.
        delivery_id: DeliveryId,
        /// Either `PickupPoint` or `DropPoint`.
        field:       DeliveryField,
        /// Point as entered.
        point:       String,
        /// Selected district.
        district:    String,
    },
}

impl ValidationError {
    /// Index of the offending delivery, for per-delivery rejections.
    #[must_use]
    pub fn delivery_index(&self) -> Option<usize> {
        match self {
            Self::IncompleteDeliveryFields { index, .. }
            | Self::InvalidPackagesAssigned { index, .. }
            | Self::UnknownDistrict { index, .. }
            | Self::PointNotInDistrict { index, .. } => Some(*index),
            _ => None,
        }
    }
}

fn join_fields(fields: &[DeliveryField]) -> String {
    fields.iter().map(DeliveryField::label).collect::<Vec<_>>().join(", ")
}

/// Transport service errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Lock acquisition failed.
    #[error("Failed to acquire lock")]
    LockError,
    /// Order not found.
    #[error("Transport order not found: {0}")]
    OrderNotFound(String),
    /// Delivery not found.
    #[error("Delivery {delivery_id} not found in {scope}")]
    DeliveryNotFound {
        /// Order ID, or `draft` while editing.
        scope:       String,
        /// Delivery ID.
        delivery_id: String,
    },
    /// Draft rejected by the validator.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Storage slot could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    /// Orders could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Configuration key unknown or value unparsable.
    #[error("Invalid config value for '{key}': {reason}")]
    InvalidConfig {
        /// Setting key.
        key:    String,
        /// Why it was rejected.
        reason: String,
    },
}

impl TransportError {
    /// Returns the validation rejection, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
