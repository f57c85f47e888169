use crate::core::{RefactorError, RefactorResult};
use std::collections::BTreeMap;

/// `ALIAS=variable-key` 形式のフラグを分解する
pub fn parse_alias_flag(raw: &str) -> RefactorResult<(String, String)> {
    let (alias, key) = raw.split_once('=').ok_or_else(|| {
        RefactorError::validation("var-alias", format!("{raw} は ALIAS=key 形式ではありません"))
    })?;
    let (alias, key) = (alias.trim(), key.trim());
    if alias.is_empty() || key.is_empty() {
        return Err(RefactorError::validation(
            "var-alias",
            format!("{raw} のエイリアスまたはキーが空です"),
        ));
    }
    Ok((alias.to_string(), key.to_string()))
}

/// 指定キーを指すエイリアスを列挙する
///
/// 設定ファイルのエイリアスにCLIフラグを上書きで重ね、結果はソート済み。
pub fn resolve_aliases(
    config_aliases: &BTreeMap<String, String>,
    flag_aliases: &[String],
    key: &str,
) -> RefactorResult<Vec<String>> {
    let mut merged = config_aliases.clone();
    for raw in flag_aliases {
        let (alias, target) = parse_alias_flag(raw)?;
        merged.insert(alias, target);
    }

    Ok(merged
        .into_iter()
        .filter(|(_, target)| target == key)
        .map(|(alias, _)| alias)
        .collect())
}
