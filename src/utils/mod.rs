pub mod address_format;

// 重新导出常用函数
pub use address_format::{delegate_wallet_name, eth_checksum_address, format_address, ss58_encode};
