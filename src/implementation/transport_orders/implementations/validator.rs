//! Transport order validation.
//!
//! Checks run in a fixed order and the first failure wins, so the same draft
//! always produces the same message. Validation is pure: it never touches the
//! order list or the storage slot.

use super::super::types::{
    delivery_types::{DeliveryBreakdown, DeliveryField},
    main_order_types::{TransportOrderDraft, ValidatedOrder},
};
use crate::{errors::ValidationError, types::district_catalog};

/// Driver contact length in digits.
pub const DRIVER_CONTACT_DIGITS: usize = 10;

/// Validator for transport order drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportOrderValidator {
    /// Also require pickup/drop points to belong to the district's catalog.
    enforce_district_catalog: bool,
}

impl TransportOrderValidator {
    /// Creates a validator that only checks required fields and totals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator that also checks the district catalog.
    #[must_use]
    pub fn with_district_catalog(enforce: bool) -> Self {
        Self { enforce_district_catalog: enforce }
    }

    /// Validates a draft and computes its total packages.
    pub fn validate(&self, draft: &TransportOrderDraft) -> Result<ValidatedOrder, ValidationError> {
        if [
            &draft.vehicle_type,
            &draft.vehicle_number,
            &draft.driver_name,
            &draft.driver_contact,
        ]
        .into_iter()
        .any(|field| is_blank(field))
        {
            return Err(ValidationError::MissingVehicleOrDriverField);
        }

        if !is_valid_driver_contact(&draft.driver_contact) {
            return Err(ValidationError::InvalidDriverContact);
        }

        if draft.deliveries.is_empty() {
            return Err(ValidationError::NoDeliveriesAdded);
        }

        if draft.total_cartons <= 0 {
            return Err(ValidationError::InvalidTotalCartons);
        }

        for (index, delivery) in draft.deliveries.iter().enumerate() {
            self.validate_delivery(index, delivery)?;
        }

        // Summed wide so a total past i64::MAX is still compared, not clamped.
        let sum: i128 = draft.deliveries.iter().map(|d| i128::from(d.packages_assigned)).sum();
        let total_packages = match i64::try_from(sum) {
            Ok(total) if total <= draft.total_cartons => total,
            _ => {
                return Err(ValidationError::PackagesExceedCartons {
                    total_packages: sum,
                    total_cartons:  draft.total_cartons,
                });
            },
        };

        Ok(ValidatedOrder { draft: draft.clone(), total_packages })
    }

    fn validate_delivery(
        &self, index: usize, delivery: &DeliveryBreakdown,
    ) -> Result<(), ValidationError> {
        let missing = missing_fields(delivery);
        if !missing.is_empty() {
            return Err(ValidationError::IncompleteDeliveryFields {
                index,
                delivery_id: delivery.id.clone(),
                missing,
            });
        }

        if delivery.packages_assigned <= 0 {
            return Err(ValidationError::InvalidPackagesAssigned {
                index,
                delivery_id: delivery.id.clone(),
            });
        }

        if self.enforce_district_catalog {
            check_catalog(index, delivery)?;
        }

        Ok(())
    }
}

/// Whether a field is empty after trimming.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whether the contact is exactly ten ASCII digits once trimmed.
#[must_use]
pub fn is_valid_driver_contact(contact: &str) -> bool {
    let contact = contact.trim();
    contact.len() == DRIVER_CONTACT_DIGITS && contact.bytes().all(|b| b.is_ascii_digit())
}

/// Required delivery fields left blank, in form order.
#[must_use]
pub fn missing_fields(delivery: &DeliveryBreakdown) -> Vec<DeliveryField> {
    DeliveryField::REQUIRED
        .into_iter()
        .filter(|field| {
            let value = match field {
                DeliveryField::CustomerName => &delivery.customer_name,
                DeliveryField::District => &delivery.district,
                DeliveryField::PickupPoint => &delivery.pickup_point,
                DeliveryField::DropPoint => &delivery.drop_point,
                DeliveryField::RouteName => &delivery.route_name,
            };
            is_blank(value)
        })
        .collect()
}

fn check_catalog(index: usize, delivery: &DeliveryBreakdown) -> Result<(), ValidationError> {
    let district = delivery.district.trim();
    if !district_catalog::contains_district(district) {
        return Err(ValidationError::UnknownDistrict {
            index,
            delivery_id: delivery.id.clone(),
            district: delivery.district.clone(),
        });
    }

    let pickup = delivery.pickup_point.trim();
    if !district_catalog::is_pickup_point(district, pickup) {
        return Err(point_error(index, delivery, DeliveryField::PickupPoint, district));
    }

    let drop_point = delivery.drop_point.trim();
    if !district_catalog::is_drop_point(district, drop_point) {
        return Err(point_error(index, delivery, DeliveryField::DropPoint, district));
    }

    Ok(())
}

fn point_error(
    index: usize, delivery: &DeliveryBreakdown, field: DeliveryField, district: &str,
) -> ValidationError {
    let point = match field {
        DeliveryField::PickupPoint => &delivery.pickup_point,
        _ => &delivery.drop_point,
    };
    ValidationError::PointNotInDistrict {
        index,
        delivery_id: delivery.id.clone(),
        field,
        point: point.clone(),
        district: district.to_string(),
    }
}
