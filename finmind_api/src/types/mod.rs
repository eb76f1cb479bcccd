mod meta;
pub use self::meta::ApiResponse;

mod revenue;
pub use self::revenue::MonthRevenue;

mod stock;
pub use self::stock::{StockID, StockInfo};
