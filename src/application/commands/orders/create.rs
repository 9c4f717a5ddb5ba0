// src/application/commands/orders/create.rs
use super::OrderCommandService;
use crate::{
    application::{
        dto::OrderDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        order::{NewOrder, OrderItem, WellFormedOrderSpec},
        product::Product,
    },
};

pub struct CreateOrderCommand {
    pub coupon_code: Option<String>,
    pub items: Vec<OrderItem>,
}

impl CreateOrderCommand {
    pub fn builder() -> CreateOrderCommandBuilder {
        CreateOrderCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateOrderCommandBuilder {
    coupon_code: Option<String>,
    items: Vec<OrderItem>,
}

impl CreateOrderCommandBuilder {
    pub fn coupon_code(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }

    pub fn item(mut self, product_id: impl Into<String>, quantity: i64) -> Self {
        self.items.push(OrderItem::new(product_id, quantity));
        self
    }

    pub fn build(self) -> CreateOrderCommand {
        CreateOrderCommand {
            coupon_code: self.coupon_code,
            items: self.items,
        }
    }
}

impl OrderCommandService {
    /// Validates, resolves and persists an order. Nothing is written unless
    /// every item resolves.
    pub async fn create_order(&self, command: CreateOrderCommand) -> ApplicationResult<OrderDto> {
        WellFormedOrderSpec::new(&command.items).check()?;
        self.ensure_coupon(command.coupon_code.as_deref()).await?;

        let products = self.resolve_products(&command.items).await?;
        let new_order = NewOrder {
            items: command.items,
            products,
        };

        let created = self.order_repo.create(new_order).await.map_err(|err| {
            ApplicationError::infrastructure(format!("failed to persist order: {err}"))
        })?;
        Ok(created.into())
    }

    async fn ensure_coupon(&self, code: Option<&str>) -> ApplicationResult<()> {
        match code {
            Some(code) if !code.is_empty() => {
                if self.coupon_repo.has(code).await {
                    Ok(())
                } else {
                    Err(ApplicationError::constraint("invalid couponCode specified"))
                }
            }
            _ => Ok(()),
        }
    }

    /// A product missing from the catalog makes the order itself invalid, so
    /// `NotFound` is reported as a constraint failure here.
    async fn resolve_products(&self, items: &[OrderItem]) -> ApplicationResult<Vec<Product>> {
        let mut products = Vec::with_capacity(items.len());
        for item in items {
            match self.product_repo.get(&item.product_id).await {
                Ok(product) => products.push(product),
                Err(err @ DomainError::NotFound(_)) => {
                    return Err(
                        ApplicationError::constraint("invalid product specified").with_detail(err)
                    );
                }
                Err(err) => {
                    return Err(ApplicationError::infrastructure(format!(
                        "failed to fill products: {err}"
                    )));
                }
            }
        }
        Ok(products)
    }
}
