// 進捗監視機能
// 処理開始・エンジン出力・エラー・完了の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
