pub mod demo_banner;
pub mod page_tabs;
pub mod retry_panel;
pub mod stat_card;
pub mod transaction_table;

pub use page_tabs::PageTabs;
pub use retry_panel::RetryPanel;
pub use stat_card::{StatCard, ValueFormat};
pub use transaction_table::TransactionTable;
