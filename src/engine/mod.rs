// エンジン層 - 拡張子ごとのリファクタリングエンジン

pub mod external;
pub mod java;

pub use external::ExternalEngine;
pub use java::{JavaEngine, JavaEngineBackend};

use crate::core::EngineBackend;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 外部エンジンの配置ディレクトリを上書きする環境変数
pub const ENGINE_LIB_ENV: &str = "FLAG_CLEANUP_ENGINE_LIB";

/// インストール先から見たエンジンの相対位置
const ENGINE_LIB_DIR: &str = "lib/refactor";

/// 外部エンジンの既定配置ディレクトリ
///
/// 環境変数が無ければ実行ファイルの位置から解決する（カレントディレクトリには依存しない）。
pub fn default_engine_lib() -> PathBuf {
    let exe = std::env::current_exe().ok();
    resolve_engine_lib(std::env::var_os(ENGINE_LIB_ENV), exe.as_deref())
}

/// `<prefix>/bin/flag_cleanup` なら `<prefix>/bin/lib/refactor`、`<prefix>/lib/refactor` の順に探す
pub fn resolve_engine_lib(override_dir: Option<OsString>, exe: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    let Some(bin_dir) = exe.and_then(Path::parent) else {
        return PathBuf::from(ENGINE_LIB_DIR);
    };

    let beside = bin_dir.join(ENGINE_LIB_DIR);
    let prefix = bin_dir.parent().map(|prefix| prefix.join(ENGINE_LIB_DIR));

    [Some(beside.clone()), prefix.clone()]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_dir())
        .or(prefix)
        .unwrap_or(beside)
}

/// 拡張子 → エンジン一覧の対応表
#[derive(Clone, Default)]
pub struct EngineRegistry {
    engines: HashMap<String, Vec<Arc<dyn EngineBackend>>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 標準構成: JavaScript/TypeScript と Python は外部エンジン、Java はプロセス内
    pub fn standard(lib_dir: impl AsRef<Path>) -> Self {
        let lib_dir = lib_dir.as_ref();
        let javascript: Arc<dyn EngineBackend> = Arc::new(ExternalEngine::new(
            "javascript",
            "node",
            lib_dir.join("javascript").join("main.js"),
        ));
        let python: Arc<dyn EngineBackend> = Arc::new(ExternalEngine::new(
            "python",
            "python3",
            lib_dir.join("python").join("main.py"),
        ));
        let java: Arc<dyn EngineBackend> = Arc::new(JavaEngineBackend::new());

        let mut registry = Self::new();
        for ext in ["js", "jsx", "ts", "tsx"] {
            registry.register(ext, Arc::clone(&javascript));
        }
        registry.register("py", python);
        registry.register("java", java);
        registry
    }

    pub fn register(&mut self, extension: impl Into<String>, engine: Arc<dyn EngineBackend>) {
        self.engines
            .entry(extension.into())
            .or_default()
            .push(engine);
    }

    /// 拡張子に対応するエンジン（大文字小文字は区別する）
    pub fn engines_for_extension(&self, extension: &str) -> &[Arc<dyn EngineBackend>] {
        self.engines
            .get(extension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn engines_for_file(&self, file: &Path) -> &[Arc<dyn EngineBackend>] {
        file.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.engines_for_extension(ext))
            .unwrap_or(&[])
    }

    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.engines.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }
}
