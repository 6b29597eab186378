//! Draft implementation.
//!
//! Editing rules for the transient order form and its delivery rows.

use super::super::types::{
    basic_types::{DeliveryId, PaymentMethod, PaymentStatus},
    delivery_types::{DeliveryBreakdown, DeliveryEdit},
    main_order_types::{TransportOrder, TransportOrderDraft},
};
use crate::errors::TransportError;

impl DeliveryBreakdown {
    /// Creates an empty delivery row with cash/unpaid payment terms.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id:                DeliveryId::generate(),
            destination:       String::new(),
            route_name:        String::new(),
            packages_assigned: 0,
            customer_name:     String::new(),
            district:          String::new(),
            pickup_point:      String::new(),
            drop_point:        String::new(),
            charges_amount:    0,
            payment_method:    PaymentMethod::Cash,
            payment_status:    PaymentStatus::Unpaid,
        }
    }

    /// Applies a single-field edit.
    ///
    /// Changing the district invalidates the pickup and drop points, which
    /// are only meaningful within a district.
    pub fn apply(&mut self, edit: DeliveryEdit) {
        match edit {
            DeliveryEdit::Destination(value) => self.destination = value,
            DeliveryEdit::RouteName(value) => self.route_name = value,
            DeliveryEdit::CustomerName(value) => self.customer_name = value,
            DeliveryEdit::District(value) => {
                self.district = value;
                self.pickup_point.clear();
                self.drop_point.clear();
            },
            DeliveryEdit::PickupPoint(value) => self.pickup_point = value,
            DeliveryEdit::DropPoint(value) => self.drop_point = value,
            DeliveryEdit::PackagesAssigned(value) => self.packages_assigned = value,
            DeliveryEdit::ChargesAmount(value) => self.charges_amount = value,
            DeliveryEdit::PaymentMethod(value) => self.payment_method = value,
            DeliveryEdit::PaymentStatus(value) => self.payment_status = value,
        }
    }
}

impl TransportOrderDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an existing order into a draft for editing.
    #[must_use]
    pub fn from_order(order: &TransportOrder) -> Self {
        Self {
            vehicle_type:   order.vehicle_type.clone(),
            vehicle_number: order.vehicle_number.clone(),
            driver_name:    order.driver_name.clone(),
            driver_contact: order.driver_contact.clone(),
            total_cartons:  order.total_cartons,
            deliveries:     order.deliveries.clone(),
        }
    }

    /// Sets the vehicle fields.
    #[must_use]
    pub fn with_vehicle(
        mut self, vehicle_type: impl Into<String>, vehicle_number: impl Into<String>,
    ) -> Self {
        self.vehicle_type = vehicle_type.into();
        self.vehicle_number = vehicle_number.into();
        self
    }

    /// Sets the driver fields.
    #[must_use]
    pub fn with_driver(mut self, name: impl Into<String>, contact: impl Into<String>) -> Self {
        self.driver_name = name.into();
        self.driver_contact = contact.into();
        self
    }

    /// Sets the declared total cartons.
    #[must_use]
    pub fn with_total_cartons(mut self, total_cartons: i64) -> Self {
        self.total_cartons = total_cartons;
        self
    }

    /// Appends a delivery row.
    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryBreakdown) -> Self {
        self.deliveries.push(delivery);
        self
    }

    /// Appends a blank delivery row and returns its ID.
    pub fn add_delivery(&mut self) -> DeliveryId {
        let delivery = DeliveryBreakdown::blank();
        let id = delivery.id.clone();
        self.deliveries.push(delivery);
        id
    }

    /// Applies an edit to the delivery with the given ID.
    pub fn update_delivery(&mut self, id: &DeliveryId, edit: DeliveryEdit) -> Result<(), TransportError> {
        let delivery = self.deliveries.iter_mut().find(|d| &d.id == id).ok_or_else(|| {
            TransportError::DeliveryNotFound {
                scope:       "draft".to_string(),
                delivery_id: id.0.clone(),
            }
        })?;
        delivery.apply(edit);
        Ok(())
    }

    /// Removes a delivery row, returning it if present.
    pub fn remove_delivery(&mut self, id: &DeliveryId) -> Option<DeliveryBreakdown> {
        let idx = self.deliveries.iter().position(|d| &d.id == id)?;
        Some(self.deliveries.remove(idx))
    }

    /// Sum of packages assigned across all deliveries; `None` on overflow.
    #[must_use]
    pub fn total_packages(&self) -> Option<i64> {
        self.deliveries.iter().try_fold(0i64, |acc, d| acc.checked_add(d.packages_assigned))
    }
}
