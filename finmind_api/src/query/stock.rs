use super::{
    common::{Dataset, QueryCommon},
    Query,
};

/// Query for the `TaiwanStockInfo` directory. Without a `data_id` the whole
/// directory is returned.
#[derive(Clone, Debug, Default)]
pub struct StockInfoQuery {
    pub common: QueryCommon,
}

impl Query for StockInfoQuery {
    fn dataset(&self) -> Dataset {
        Dataset::TaiwanStockInfo
    }
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
