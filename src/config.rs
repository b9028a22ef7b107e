//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `NOTEGEN__*` 覆盖（双下划线表示嵌套，如 `NOTEGEN__LLM__PROVIDER=mock`）。

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// 没有指定 --profile 时使用的 profile 名
pub const DEFAULT_PROFILE: &str = "default";

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmSection,
    /// [profiles.<name>]：每个 profile 是一条独立的「队列 → 笔记目录」流程
    #[serde(default)]
    pub profiles: HashMap<String, ProfileSection>,
}

impl AppConfig {
    /// 按名取 profile；配置中没有 `default` 时用内置默认值
    pub fn profile(&self, name: &str) -> Option<ProfileSection> {
        match self.profiles.get(name) {
            Some(p) => Some(p.clone()),
            None if name == DEFAULT_PROFILE => Some(ProfileSection::default()),
            None => None,
        }
    }
}

/// [llm] 段：后端选择与模型
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSection {
    /// 后端：openai / deepseek / mock
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// 仅 openai 后端：自定义兼容端点
    pub base_url: Option<String>,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: None,
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

/// [profiles.<name>] 段：队列文件、输出目录、Prompt 模板、token 上限
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSection {
    #[serde(default = "default_queue_file")]
    pub queue_file: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// 填入模板 `{subject}` 的主题领域
    #[serde(default = "default_subject")]
    pub subject: String,
    /// 支持 `{topic}`（必须）、`{subject}`、`{max_tokens}`
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// 覆盖 [llm].model
    pub model: Option<String>,
    /// 设置后作为 system 消息放在 prompt 之前
    pub system_prompt: Option<String>,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            queue_file: default_queue_file(),
            output_dir: default_output_dir(),
            subject: default_subject(),
            prompt_template: default_prompt_template(),
            max_tokens: default_max_tokens(),
            model: None,
            system_prompt: None,
        }
    }
}

fn default_queue_file() -> PathBuf {
    PathBuf::from("react_topics.md")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("topics")
}

fn default_subject() -> String {
    "React".to_string()
}

fn default_prompt_template() -> String {
    "Resume this {subject} topic in under {max_tokens} tokens, show me the problem it solves, \
     and show me an example in code: {topic}"
        .to_string()
}

fn default_max_tokens() -> u32 {
    500
}

/// 从 config 目录加载配置，环境变量 NOTEGEN__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 NOTEGEN__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        } else {
            tracing::warn!("Config file {} not found, ignoring", path.display());
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("NOTEGEN")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
