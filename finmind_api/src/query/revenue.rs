use super::{
    common::{Dataset, QueryCommon},
    Query,
};

/// Query for the `TaiwanStockMonthRevenue` dataset.
#[derive(Clone, Debug, Default)]
pub struct MonthRevenueQuery {
    pub common: QueryCommon,
}

impl Query for MonthRevenueQuery {
    fn dataset(&self) -> Dataset {
        Dataset::TaiwanStockMonthRevenue
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl MonthRevenueQuery {
    /// Shorthand for a revenue query on one ticker.
    pub fn for_stock(stock_id: &str) -> Self {
        Self::default().with_data_id(stock_id)
    }
}
