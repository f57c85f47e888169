// 対話入力 - 不足している変数情報を標準入力から補う

use crate::core::{RefactorError, RefactorResult, Variable, VariableType};
use std::io::{BufRead, Write};

/// 1行入力を求める。入力が空ならNone
pub fn prompt_line<R, W>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> RefactorResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "? {message}: ")?;
    writer.flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    let input = input.trim();

    Ok((!input.is_empty()).then(|| input.to_string()))
}

/// 型を選択させる。不正な入力は再入力を求め、入力終了時はエラー
pub fn prompt_variable_type<R, W>(
    reader: &mut R,
    writer: &mut W,
) -> RefactorResult<VariableType>
where
    R: BufRead,
    W: Write,
{
    let choices = VariableType::ALL
        .iter()
        .map(VariableType::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    loop {
        let mut input = String::new();
        write!(writer, "? The type of the value ({choices}): ")?;
        writer.flush()?;

        if reader.read_line(&mut input)? == 0 {
            return Err(RefactorError::missing_argument("type"));
        }
        match input.trim().parse::<VariableType>() {
            Ok(variable_type) => return Ok(variable_type),
            Err(_) => writeln!(writer, "  {} is not a valid type", input.trim())?,
        }
    }
}

/// 変数のキー・型・値の不足分を補う
///
/// 空文字のキー・値は未指定として扱う。`interactive` が偽の場合は不足をエラーにする。
pub fn complete_variable<R, W>(
    mut variable: Variable,
    interactive: bool,
    reader: &mut R,
    writer: &mut W,
) -> RefactorResult<Variable>
where
    R: BufRead,
    W: Write,
{
    if variable.key.trim().is_empty() {
        if !interactive {
            return Err(RefactorError::missing_argument("key"));
        }
        variable.key = prompt_line(reader, writer, "Variable key")?
            .ok_or_else(|| RefactorError::missing_argument("key"))?;
    }

    if variable.variable_type.is_none() {
        if !interactive {
            return Err(RefactorError::missing_argument("type"));
        }
        variable.variable_type = Some(prompt_variable_type(reader, writer)?);
    }

    if variable.value.as_deref().map_or(true, str::is_empty) {
        if !interactive {
            return Err(RefactorError::missing_argument("value"));
        }
        variable.value = Some(
            prompt_line(reader, writer, "Value to use in place of variable")?
                .ok_or_else(|| RefactorError::missing_argument("value"))?,
        );
    }

    variable.validate()?;
    Ok(variable)
}
