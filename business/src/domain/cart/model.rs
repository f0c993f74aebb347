use super::errors::CartError;
use crate::domain::product::model::ProductId;

pub type CartId = u64;

/// One product reference and its quantity inside a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: ProductId,
    pub quantity: u32,
}

/// A cart holds at most one line per product and never stores a line with
/// a zero quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: CartId,
    pub products: Vec<CartLine>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            products: Vec::new(),
        }
    }

    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.products.iter().find(|l| l.product == product)
    }

    /// Adds `quantity` units of a product, accumulating on an existing line.
    /// A total that no longer fits a `u32` leaves the cart unchanged.
    pub fn add_product(&mut self, product: ProductId, quantity: u32) -> Result<(), CartError> {
        match self.products.iter_mut().find(|l| l.product == product) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity)?;
            }
            None => self.products.push(CartLine { product, quantity }),
        }
        Ok(())
    }

    /// Sets the quantity of an existing line. Zero or less removes the line.
    pub fn set_quantity(&mut self, product: ProductId, quantity: i64) -> Result<(), CartError> {
        let index = self.position(product)?;
        if quantity <= 0 {
            self.products.remove(index);
            return Ok(());
        }
        self.products[index].quantity =
            u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity)?;
        Ok(())
    }

    pub fn remove_product(&mut self, product: ProductId) -> Result<CartLine, CartError> {
        let index = self.position(product)?;
        Ok(self.products.remove(index))
    }

    fn position(&self, product: ProductId) -> Result<usize, CartError> {
        self.products
            .iter()
            .position(|l| l.product == product)
            .ok_or(CartError::LineNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_start_empty() {
        let cart = Cart::new(1);

        assert_eq!(cart.id, 1);
        assert!(cart.products.is_empty());
    }

    #[test]
    fn should_accumulate_quantity_on_same_product() {
        let mut cart = Cart::new(1);

        cart.add_product(1, 2).unwrap();
        cart.add_product(1, 3).unwrap();

        assert_eq!(cart.products, vec![CartLine { product: 1, quantity: 5 }]);
    }

    #[test]
    fn should_keep_insertion_order_of_lines() {
        let mut cart = Cart::new(1);

        cart.add_product(9, 1).unwrap();
        cart.add_product(4, 1).unwrap();
        cart.add_product(9, 1).unwrap();

        let order: Vec<ProductId> = cart.products.iter().map(|l| l.product).collect();
        assert_eq!(order, vec![9, 4]);
    }

    #[test]
    fn should_remove_line_when_quantity_set_to_zero() {
        let mut cart = Cart::new(1);
        cart.add_product(2, 4).unwrap();

        cart.set_quantity(2, 0).unwrap();

        assert!(cart.line(2).is_none());
    }

    #[test]
    fn should_overwrite_quantity_when_positive() {
        let mut cart = Cart::new(1);
        cart.add_product(2, 4).unwrap();

        cart.set_quantity(2, 11).unwrap();

        assert_eq!(cart.line(2).unwrap().quantity, 11);
    }

    #[test]
    fn should_refuse_accumulation_past_u32_max() {
        let mut cart = Cart::new(1);
        cart.add_product(3, u32::MAX - 1).unwrap();

        let result = cart.add_product(3, 2);

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
        assert_eq!(cart.line(3).unwrap().quantity, u32::MAX - 1);
    }

    #[test]
    fn should_fail_when_setting_quantity_of_absent_line() {
        let mut cart = Cart::new(1);

        let result = cart.set_quantity(5, 3);

        assert!(matches!(result.unwrap_err(), CartError::LineNotFound));
    }

    #[test]
    fn should_fail_when_removing_absent_line() {
        let mut cart = Cart::new(1);
        cart.add_product(1, 1).unwrap();

        let result = cart.remove_product(2);

        assert!(matches!(result.unwrap_err(), CartError::LineNotFound));
        assert_eq!(cart.products.len(), 1);
    }

    proptest! {
        #[test]
        fn lines_stay_unique_and_quantities_add_up(
            adds in proptest::collection::vec((0u64..5, 1u32..100), 0..40)
        ) {
            let mut cart = Cart::new(1);
            for (product, quantity) in &adds {
                cart.add_product(*product, *quantity).unwrap();
            }

            let mut seen = std::collections::HashSet::new();
            for line in &cart.products {
                prop_assert!(seen.insert(line.product));
                prop_assert!(line.quantity > 0);
                let expected: u32 = adds
                    .iter()
                    .filter(|(p, _)| *p == line.product)
                    .map(|(_, q)| *q)
                    .sum();
                prop_assert_eq!(line.quantity, expected);
            }
        }
    }
}
