mod common;
pub use self::common::{Dataset, Query, QueryCommon};

mod revenue;
pub use self::revenue::MonthRevenueQuery;

mod stock;
pub use self::stock::StockInfoQuery;
