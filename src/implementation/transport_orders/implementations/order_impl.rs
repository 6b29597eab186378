//! Order implementation.
//!
//! Read-side helpers for the TransportOrder type, used by the order table.

use chrono::NaiveDate;

use super::super::types::{
    basic_types::{DeliveryId, PaymentMethod, PaymentStatus, TransportOrderId, TransportStatus},
    delivery_types::DeliveryBreakdown,
    main_order_types::TransportOrder,
};

impl TransportOrder {
    /// Whether every delivery has been paid.
    #[must_use]
    pub fn is_fully_paid(&self) -> bool {
        self.deliveries.iter().all(|d| d.payment_status == PaymentStatus::Paid)
    }

    /// Whether any delivery is still unpaid.
    #[must_use]
    pub fn has_unpaid_delivery(&self) -> bool {
        self.deliveries.iter().any(|d| d.payment_status == PaymentStatus::Unpaid)
    }

    /// Order-level payment label.
    #[must_use]
    pub fn payment_label(&self) -> PaymentStatus {
        if self.is_fully_paid() { PaymentStatus::Paid } else { PaymentStatus::Unpaid }
    }

    /// Route shown in the order table: the first delivery's route.
    #[must_use]
    pub fn route_label(&self) -> &str {
        self.deliveries
            .first()
            .map(|d| d.route_name.as_str())
            .filter(|route| !route.is_empty())
            .unwrap_or("Multiple Routes")
    }

    /// Sum of delivery charges.
    #[must_use]
    pub fn total_charges(&self) -> u64 {
        self.deliveries.iter().fold(0u64, |acc, d| acc.saturating_add(d.charges_amount))
    }

    /// Finds a delivery by ID.
    #[must_use]
    pub fn delivery(&self, id: &DeliveryId) -> Option<&DeliveryBreakdown> {
        self.deliveries.iter().find(|d| &d.id == id)
    }

    /// Case-insensitive match on the order code or driver name.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.order_id.to_lowercase().contains(&term)
            || self.driver_name.to_lowercase().contains(&term)
    }

    /// The order seeded into an empty storage slot when configured to.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            id:             TransportOrderId::new("1"),
            order_id:       "TRN001".to_string(),
            vehicle_type:   "Mini Truck".to_string(),
            vehicle_number: "TN01AB1234".to_string(),
            driver_name:    "Rajesh Kumar".to_string(),
            driver_contact: "9876543210".to_string(),
            total_cartons:  50,
            deliveries:     vec![DeliveryBreakdown {
                id:                DeliveryId::new("1"),
                destination:       "Chennai".to_string(),
                route_name:        "Chennai Route".to_string(),
                packages_assigned: 25,
                customer_name:     "Priya Sharma".to_string(),
                district:          "Chennai".to_string(),
                pickup_point:      "Koyambedu".to_string(),
                drop_point:        "T. Nagar".to_string(),
                charges_amount:    1500,
                payment_method:    PaymentMethod::Card,
                payment_status:    PaymentStatus::Paid,
            }],
            status:         TransportStatus::InTransit,
            created_date:   NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            total_packages: 25,
        }
    }
}
