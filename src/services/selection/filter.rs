use crate::core::{RefactorError, RefactorResult};
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

#[derive(Debug, Clone)]
struct FilePattern {
    pattern: Pattern,
    // `/` を含まないパターンはファイル名のみと照合する
    match_base: bool,
}

impl FilePattern {
    fn parse(raw: &str) -> RefactorResult<Self> {
        let pattern = Pattern::new(raw).map_err(|e| {
            RefactorError::validation("glob", format!("{raw} は不正なパターンです: {e}"))
        })?;
        Ok(Self {
            pattern,
            match_base: !raw.contains('/'),
        })
    }

    fn matches(&self, path: &Path) -> bool {
        if self.match_base {
            path.file_name()
                .map(|name| {
                    self.pattern
                        .matches_with(&name.to_string_lossy(), MATCH_OPTIONS)
                })
                .unwrap_or(false)
        } else {
            self.pattern.matches_path_with(path, MATCH_OPTIONS)
        }
    }
}

/// include / exclude globによるファイル絞り込み
///
/// includeが空なら全ファイルが対象。excludeに一致したファイルは常に除外。
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include: Vec<FilePattern>,
    exclude: Vec<FilePattern>,
}

impl FileFilter {
    pub fn new<I, E>(include: I, exclude: E) -> RefactorResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self {
            include: include
                .into_iter()
                .map(|p| FilePattern::parse(p.as_ref()))
                .collect::<RefactorResult<_>>()?,
            exclude: exclude
                .into_iter()
                .map(|p| FilePattern::parse(p.as_ref()))
                .collect::<RefactorResult<_>>()?,
        })
    }

    /// CLI指定があればそれを、無ければ設定ファイルの値を使う
    pub fn from_sources(
        flag_include: &[String],
        flag_exclude: &[String],
        config_include: Option<&[String]>,
        config_exclude: Option<&[String]>,
    ) -> RefactorResult<Self> {
        let include = if flag_include.is_empty() {
            config_include.unwrap_or_default()
        } else {
            flag_include
        };
        let exclude = if flag_exclude.is_empty() {
            config_exclude.unwrap_or_default()
        } else {
            flag_exclude
        };
        Self::new(include, exclude)
    }

    pub fn is_included(&self, path: &Path) -> bool {
        self.include.is_empty() || self.include.iter().any(|p| p.matches(path))
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.iter().any(|p| p.matches(path))
    }

    pub fn accepts(&self, path: &Path) -> bool {
        self.is_included(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = FileFilter::default();
        assert!(filter.accepts(Path::new("src/app.js")));
        assert!(filter.accepts(Path::new("README.md")));
    }

    #[test]
    fn test_match_base_for_patterns_without_slash() {
        let filter = FileFilter::new(["*.py"], Vec::<String>::new()).unwrap();

        assert!(filter.accepts(Path::new("main.py")));
        assert!(filter.accepts(Path::new("deep/nested/dir/main.py")));
        assert!(!filter.accepts(Path::new("src/app.js")));
    }

    #[test]
    fn test_path_patterns() {
        let filter = FileFilter::new(["src/*.js"], Vec::<String>::new()).unwrap();

        assert!(filter.accepts(Path::new("src/app.js")));
        // `*` は `/` をまたがない
        assert!(!filter.accepts(Path::new("src/nested/app.js")));

        let filter = FileFilter::new(["src/**/*.js"], Vec::<String>::new()).unwrap();
        assert!(filter.accepts(Path::new("src/nested/app.js")));
        assert!(!filter.accepts(Path::new("lib/app.js")));
    }

    #[test]
    fn test_exclude_wins() {
        let filter = FileFilter::new(["*.js"], ["*.test.js", "dist/**"]).unwrap();

        assert!(filter.accepts(Path::new("src/app.js")));
        assert!(!filter.accepts(Path::new("src/app.test.js")));
        assert!(!filter.accepts(Path::new("dist/bundle.js")));
    }

    #[test]
    fn test_from_sources_precedence() {
        let config_include = strings(&["*.py"]);
        let config_exclude = strings(&["*.java"]);

        let filter = FileFilter::from_sources(
            &[],
            &[],
            Some(&config_include),
            Some(&config_exclude),
        )
        .unwrap();
        assert!(filter.accepts(Path::new("a.py")));
        assert!(!filter.accepts(Path::new("a.js")));

        let flag_include = strings(&["*.js"]);
        let filter = FileFilter::from_sources(
            &flag_include,
            &[],
            Some(&config_include),
            Some(&config_exclude),
        )
        .unwrap();
        assert!(filter.accepts(Path::new("a.js")));
        assert!(!filter.accepts(Path::new("a.py")));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = FileFilter::new(["src/[unclosed"], Vec::<String>::new()).unwrap_err();
        assert!(matches!(error, RefactorError::ValidationError { .. }));
    }
}
