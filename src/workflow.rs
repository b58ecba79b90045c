use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{Args, Command, GenerateArgs, OutputArgs, ParseArgs, ServeArgs};
use crate::config::{Config, LLMProvider};
use crate::generator::{GenerationRequest, IdeaGenerator};
use crate::llm::LLMClient;
use crate::outlet::{
    IdeaPresenter, JsonPresenter, SystemClipboard, TerminalPresenter, copy_idea,
};
use crate::parser::parse_ideas_with;
use crate::server::{AppState, start_server};
use crate::types::IdeaRecord;

/// 根据子命令执行对应流程
pub async fn launch(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        Command::Generate(generate) => run_generate(generate, config).await,
        Command::Parse(parse) => run_parse(parse),
        Command::Serve(serve) => run_serve(serve, config).await,
    }
}

fn build_client(config: &Config) -> Result<LLMClient> {
    if config.llm.api_key.trim().is_empty() && config.llm.provider != LLMProvider::Ollama {
        bail!(
            "未配置 LLM API KEY，请设置环境变量 GROQ_API_KEY、在配置文件 [llm] 中填写 api_key 或使用 --llm-api-key"
        );
    }

    LLMClient::new(config.llm.clone())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

async fn run_generate(args: &GenerateArgs, config: &Config) -> Result<()> {
    let generator = IdeaGenerator::new(Arc::new(build_client(config)?));
    let request = GenerationRequest {
        niche: args.niche.clone(),
        content_type: args.content_type.clone(),
        platform: args.platform.clone(),
        tone: args.tone.clone(),
    };

    if !args.output.json {
        println!("🔄 正在生成创意...");
    }
    let started = Instant::now();
    let mut rng = make_rng(args.output.seed);
    let ideas = generator.generate_ideas(&request, &mut rng).await?;
    tracing::info!(
        ideas = ideas.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generation finished"
    );

    emit(&ideas, &args.output)
}

fn run_parse(args: &ParseArgs) -> Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("Failed to read input file: {:?}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let mut rng = make_rng(args.output.seed);
    let ideas = parse_ideas_with(&raw, &mut rng);
    emit(&ideas, &args.output)
}

async fn run_serve(args: &ServeArgs, config: &Config) -> Result<()> {
    let client = build_client(config)?;
    if args.check_connection {
        client.check_connection().await?;
    }

    let generator = IdeaGenerator::new(Arc::new(client));
    start_server(&config.server, AppState::new(generator)).await
}

/// 输出创意，并按需复制其中一条
fn emit(ideas: &[IdeaRecord], output: &OutputArgs) -> Result<()> {
    let stdout = std::io::stdout().lock();
    if output.json {
        JsonPresenter::new(stdout).present(ideas)?;
    } else {
        TerminalPresenter::new(stdout).present(ideas)?;
    }

    if let Some(id) = output.copy {
        let mut clipboard = SystemClipboard::new()?;
        if copy_idea(ideas, id, &mut clipboard)? {
            eprintln!("📋 已将创意 #{} 复制到剪贴板", id);
        } else {
            eprintln!("⚠️ 未找到 id 为 {} 的创意", id);
        }
    }

    Ok(())
}
