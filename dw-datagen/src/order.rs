use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use log::info;
use rand::Rng;
use rust_decimal::prelude::*;
use serde::Serialize;

use crate::context::GenContext;
use crate::date::date_id;
use crate::error::GenError;
use crate::report::GenerationReport;
use crate::sink::{CsvSink, Record};

pub const MONEY_DECIMAL_PLACES: u32 = 2;
pub const PERCENT_DECIMAL_PLACES: u32 = 4;

/// First and last day an order may fall on
#[must_use]
pub fn order_date_range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2014, 1, 1).unwrap_or(NaiveDate::MIN),
        NaiveDate::from_ymd_opt(2024, 7, 28).unwrap_or(NaiveDate::MAX),
    )
}

/// A fact row. The id columns are drawn independently and are not checked
/// against any generated dimension file.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderRecord {
    #[serde(rename = "DateID")]
    pub date_id: u32,
    #[serde(rename = "ProductID")]
    pub product_id: u16,
    #[serde(rename = "StoreID")]
    pub store_id: u16,
    #[serde(rename = "CustomerID")]
    pub customer_id: u16,
    pub quantity_ordered: u8,
    pub order_amount: Decimal,
    pub discount_amount: Decimal,
    pub shipping_cost: Decimal,
    pub total_amount: Decimal,
}

impl Record for OrderRecord {
    const HEADERS: &'static [&'static str] = &[
        "DateID",
        "ProductID",
        "StoreID",
        "CustomerID",
        "QuantityOrdered",
        "OrderAmount",
        "DiscountAmount",
        "ShippingCost",
        "TotalAmount",
    ];
}

/// The monetary columns of an order, derived from the amount and two rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAmounts {
    pub order_amount: Decimal,
    pub discount_amount: Decimal,
    pub shipping_cost: Decimal,
    pub total_amount: Decimal,
}

impl OrderAmounts {
    /// Rounds to cents half-to-even after each step
    #[must_use]
    pub fn derive(order_amount: Decimal, discount_rate: Decimal, shipping_rate: Decimal) -> Self {
        let order_amount = order_amount.round_dp(MONEY_DECIMAL_PLACES);
        let discount_amount = (order_amount * discount_rate).round_dp(MONEY_DECIMAL_PLACES);
        let shipping_cost = (order_amount * shipping_rate).round_dp(MONEY_DECIMAL_PLACES);
        let total_amount =
            (order_amount - (discount_amount + shipping_cost)).round_dp(MONEY_DECIMAL_PLACES);
        OrderAmounts {
            order_amount,
            discount_amount,
            shipping_cost,
            total_amount,
        }
    }

    /// Amount in [100.00, 1000.00], discount rate in [0.0200, 0.1500] and
    /// shipping rate in [0.0500, 0.1500], each drawn at its output precision
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let order_amount = Decimal::new(rng.gen_range(10_000..=100_000), MONEY_DECIMAL_PLACES);
        let discount_rate = Decimal::new(rng.gen_range(200..=1_500), PERCENT_DECIMAL_PLACES);
        let shipping_rate = Decimal::new(rng.gen_range(500..=1_500), PERCENT_DECIMAL_PLACES);
        OrderAmounts::derive(order_amount, discount_rate, shipping_rate)
    }
}

impl OrderRecord {
    pub fn generate(ctx: &mut GenContext) -> Self {
        let (first_day, last_day) = order_date_range();
        let date = ctx.date_between(first_day, last_day);
        let rng = ctx.rng();
        let product_id = rng.gen_range(1..=1000);
        let store_id = rng.gen_range(1..=100);
        let customer_id = rng.gen_range(1..=1000);
        let quantity_ordered = rng.gen_range(1..=20);
        let amounts = OrderAmounts::random(rng);

        OrderRecord {
            date_id: date_id(date),
            product_id,
            store_id,
            customer_id,
            quantity_ordered,
            order_amount: amounts.order_amount,
            discount_amount: amounts.discount_amount,
            shipping_cost: amounts.shipping_cost,
            total_amount: amounts.total_amount,
        }
    }
}

/// Writes `num_rows` random orders to `output_file`
///
/// # Errors
/// Errors when the file cannot be written
pub fn generate_orders(
    ctx: &mut GenContext,
    num_rows: usize,
    output_file: impl AsRef<Path>,
) -> Result<GenerationReport, GenError> {
    let started = Instant::now();
    let output_file = output_file.as_ref();

    let mut sink = CsvSink::create(output_file)?;
    for _ in 0..num_rows {
        sink.write(&OrderRecord::generate(ctx))?;
    }
    let (rows, _) = sink.finish()?;

    info!("Wrote {} orders to {}", rows, output_file.display());
    Ok(GenerationReport::new("FactOrders", rows, output_file, started))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_derive_amounts() {
        let amounts = OrderAmounts::derive(dec("500.00"), dec("0.1000"), dec("0.0500"));
        assert_eq!(amounts.discount_amount, dec("50.00"));
        assert_eq!(amounts.shipping_cost, dec("25.00"));
        assert_eq!(amounts.total_amount, dec("425.00"));

        // 123.45 * 0.0333 = 4.110885, 123.45 * 0.1234 = 15.23373
        let amounts = OrderAmounts::derive(dec("123.45"), dec("0.0333"), dec("0.1234"));
        assert_eq!(amounts.discount_amount, dec("4.11"));
        assert_eq!(amounts.shipping_cost, dec("15.23"));
        assert_eq!(amounts.total_amount, dec("104.11"));
    }

    #[test]
    fn test_derive_rounds_half_to_even() {
        // 100.50 * 0.0500 = 5.025, 100.50 * 0.1500 = 15.075
        let amounts = OrderAmounts::derive(dec("100.50"), dec("0.0500"), dec("0.1500"));
        assert_eq!(amounts.discount_amount, dec("5.02"));
        assert_eq!(amounts.shipping_cost, dec("15.08"));
        assert_eq!(amounts.total_amount, dec("80.40"));
    }

    #[test]
    fn test_random_amounts_are_consistent() {
        let mut ctx = GenContext::seeded(11);
        for _ in 0..1000 {
            let amounts = OrderAmounts::random(ctx.rng());
            assert!(amounts.order_amount >= dec("100") && amounts.order_amount <= dec("1000"));
            assert!(amounts.order_amount.scale() <= MONEY_DECIMAL_PLACES);
            assert_eq!(
                amounts.total_amount,
                (amounts.order_amount - amounts.discount_amount - amounts.shipping_cost)
                    .round_dp(MONEY_DECIMAL_PLACES)
            );
            let discount_rate = amounts.discount_amount / amounts.order_amount;
            assert!(discount_rate >= dec("0.0199") && discount_rate <= dec("0.1501"));
            let shipping_rate = amounts.shipping_cost / amounts.order_amount;
            assert!(shipping_rate >= dec("0.0499") && shipping_rate <= dec("0.1501"));
        }
    }

    #[test]
    fn test_generate_order_ranges() {
        let mut ctx = GenContext::seeded(12);
        for _ in 0..1000 {
            let order = OrderRecord::generate(&mut ctx);
            assert!((20_140_101..=20_240_728).contains(&order.date_id));
            assert!((1..=1000).contains(&order.product_id));
            assert!((1..=100).contains(&order.store_id));
            assert!((1..=1000).contains(&order.customer_id));
            assert!((1..=20).contains(&order.quantity_ordered));
        }
    }
}
