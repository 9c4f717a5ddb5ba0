use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::value_objects::OrderItem;

/// Structural rules for an incoming order: at least one item, and every
/// item names a product and carries a non-negative quantity.
pub struct WellFormedOrderSpec<'a> {
    items: &'a [OrderItem],
}

impl<'a> WellFormedOrderSpec<'a> {
    pub fn new(items: &'a [OrderItem]) -> Self {
        Self { items }
    }

    /// Every violated rule, in item order.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.items.is_empty() {
            violations.push("at least one item is required".to_string());
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.product_id.is_empty() {
                violations.push(format!("item[{index}] productId is required"));
            }
            if item.quantity < 0 {
                violations.push(format!("item[{index}] quantity cannot be less than zero"));
            }
        }
        violations
    }

    pub fn is_satisfied(&self) -> bool {
        self.violations().is_empty()
    }

    /// Fails with a single `DomainError::Constraint` listing all violations, one per line.
    pub fn check(&self) -> DomainResult<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Constraint(violations.join("\n")))
        }
    }
}
