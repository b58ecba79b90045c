use crate::config::{Config, LLMProvider};
use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// content-ideas - 由Rust与AI驱动的内容创意生成器
#[derive(Parser, Debug)]
#[command(name = "content-ideas")]
#[command(
    about = "AI-powered content idea generator. Builds a prompt from a niche, content type, platform and tone, asks an LLM for ideas and renders them as cards."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// LLM Provider (openai, groq, deepseek, anthropic, ollama)
    #[arg(long, global = true)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long, global = true)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long, global = true)]
    pub llm_api_base_url: Option<String>,

    /// 模型名称
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long, global = true)]
    pub temperature: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 调用模型生成创意并输出卡片
    Generate(GenerateArgs),
    /// 解析已有的模型返回文本（文件或标准输入）
    Parse(ParseArgs),
    /// 启动HTTP服务
    Serve(ServeArgs),
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// 主题或细分领域
    #[arg(short, long)]
    pub niche: String,

    /// 内容类型
    #[arg(long, default_value = "Blog Post")]
    pub content_type: String,

    /// 发布平台
    #[arg(short, long, default_value = "Blog")]
    pub platform: String,

    /// 语气
    #[arg(short, long, default_value = "Professional")]
    pub tone: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct ParseArgs {
    /// 输入文件，省略时读取标准输入
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// 以JSON格式输出
    #[arg(long)]
    pub json: bool,

    /// 将指定id的创意复制到剪贴板
    #[arg(long, value_name = "ID")]
    pub copy: Option<u32>,

    /// 随机种子，用于得到可复现的难度与耗时
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    /// 监听地址
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口
    #[arg(long)]
    pub port: Option<u16>,

    /// 页面静态资源目录
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// 启动前先检查模型连接，失败则不启动服务
    #[arg(long)]
    pub check_connection: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn to_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        // 覆盖LLM配置
        if let Some(provider_str) = &self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = &self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url.clone();
        }
        if let Some(llm_api_key) = &self.llm_api_key {
            config.llm.api_key = llm_api_key.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 服务配置
        if let Command::Serve(serve) = &self.command {
            if let Some(host) = &serve.host {
                config.server.host = host.clone();
            }
            if let Some(port) = serve.port {
                config.server.port = port;
            }
            if let Some(static_dir) = &serve.static_dir {
                config.server.static_dir = Some(static_dir.clone());
            }
        }

        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}

// Include tests
#[cfg(test)]
mod tests;
