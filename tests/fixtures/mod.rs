// 統合テスト用のフィクスチャ
#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Java SDKの利用例（cleanup対象となる典型的なソース）
pub const JAVA_SDK_SAMPLE: &str = r#"import com.devcycle.sdk.server.cloud.api.DVCCloudClient;
import com.devcycle.sdk.server.common.model.User;
import com.devcycle.sdk.server.common.model.Variable;

public class MyClass {
    private DVCCloudClient dvcClient;

    public void useFeature() throws Exception {
        User user = User.builder().userId("SOME_USER_ID").build();
        Variable<Boolean> variable = dvcClient.variable(user, "show-discord-button", false);
        if (variable.getValue()) {
            // feature code
        }
    }
}
"#;

/// Python SDKの利用例
pub const PYTHON_SDK_SAMPLE: &str = r#"MY_VARIABLE = 'show-discord-button'
variable = dvc.variable(user, 'show-discord-button', False)
if variable.value:
    print('enabled')
"#;

pub const BOOLEAN_VARIABLE_JSON: &str =
    r#"{"key":"show-discord-button","value":"true","type":"Boolean"}"#;

pub const CONSOLE_OPTIONS_JSON: &str = r#"{"output":"console","aliases":[]}"#;

/// Java・Python・その他のファイルを含むリポジトリを作成
pub fn setup_repository(root: &Path) {
    fs::create_dir_all(root.join("src/main/java")).unwrap();
    fs::create_dir_all(root.join("scripts")).unwrap();

    fs::write(root.join("src/main/java/MyClass.java"), JAVA_SDK_SAMPLE).unwrap();
    fs::write(root.join("src/main/java/Other.java"), JAVA_SDK_SAMPLE).unwrap();
    fs::write(root.join("scripts/app.py"), PYTHON_SDK_SAMPLE).unwrap();
    fs::write(root.join("README.md"), "# sample").unwrap();
}
