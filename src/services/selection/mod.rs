// 対象選択機能
// globによるファイル絞り込みと変数エイリアスの解決

pub mod aliases;
pub mod filter;

// 公開API
pub use aliases::{parse_alias_flag, resolve_aliases};
pub use filter::FileFilter;
