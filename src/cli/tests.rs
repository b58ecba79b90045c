#[cfg(test)]
mod tests {
    use crate::cli::{Args, Command};
    use crate::config::LLMProvider;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from(["content-ideas", "generate", "--niche", "coffee"]).unwrap();

        assert!(!args.verbose);
        match args.command {
            Command::Generate(generate) => {
                assert_eq!(generate.niche, "coffee");
                assert_eq!(generate.content_type, "Blog Post");
                assert_eq!(generate.platform, "Blog");
                assert_eq!(generate.tone, "Professional");
                assert!(!generate.output.json);
                assert!(generate.output.copy.is_none());
                assert!(generate.output.seed.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_short_options() {
        let args = Args::try_parse_from([
            "content-ideas",
            "generate",
            "-n", "fitness",
            "-p", "TikTok",
            "-t", "Humorous",
            "--json",
            "--copy", "2",
            "--seed", "9",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        let Command::Generate(generate) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(generate.platform, "TikTok");
        assert_eq!(generate.tone, "Humorous");
        assert!(generate.output.json);
        assert_eq!(generate.output.copy, Some(2));
        assert_eq!(generate.output.seed, Some(9));
    }

    #[test]
    fn test_generate_requires_niche() {
        assert!(Args::try_parse_from(["content-ideas", "generate"]).is_err());
    }

    #[test]
    fn test_parse_file_argument() {
        let args = Args::try_parse_from(["content-ideas", "parse", "reply.txt"]).unwrap();
        let Command::Parse(parse) = args.command else {
            panic!("expected parse");
        };
        assert_eq!(parse.file, Some(PathBuf::from("reply.txt")));
    }

    #[test]
    fn test_llm_overrides_applied() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ideas.toml");
        fs::write(&path, "[llm]\nmodel = \"from-file\"\n").unwrap();

        let args = Args::try_parse_from([
            "content-ideas",
            "--config", path.to_str().unwrap(),
            "--llm-provider", "deepseek",
            "--llm-api-key", "test-key",
            "--temperature", "0.3",
            "--max-tokens", "512",
            "parse",
        ])
        .unwrap();
        let config = args.to_config().unwrap();

        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.api_key, "test-key");
        assert_eq!(config.llm.model, "from-file");
        assert_eq!(config.llm.temperature, 0.3);
        assert_eq!(config.llm.max_tokens, 512);
    }

    #[test]
    fn test_unknown_provider_keeps_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ideas.toml");
        fs::write(&path, "").unwrap();

        let args = Args::try_parse_from([
            "content-ideas",
            "-c", path.to_str().unwrap(),
            "--llm-provider", "nope",
            "parse",
        ])
        .unwrap();

        assert_eq!(args.to_config().unwrap().llm.provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_serve_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ideas.toml");
        fs::write(&path, "[server]\nport = 7000\n").unwrap();

        let args = Args::try_parse_from([
            "content-ideas",
            "serve",
            "--config", path.to_str().unwrap(),
            "--host", "0.0.0.0",
            "--static-dir", "public",
        ])
        .unwrap();
        let config = args.to_config().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.static_dir, Some(PathBuf::from("public")));

        let Command::Serve(serve) = args.command else {
            panic!("expected serve");
        };
        assert!(!serve.check_connection);
    }

    #[test]
    fn test_serve_check_connection_flag() {
        let args =
            Args::try_parse_from(["content-ideas", "serve", "--check-connection"]).unwrap();

        let Command::Serve(serve) = args.command else {
            panic!("expected serve");
        };
        assert!(serve.check_connection);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = Args::try_parse_from([
            "content-ideas",
            "--config", "/definitely/not/here.toml",
            "parse",
        ])
        .unwrap();

        assert!(args.to_config().is_err());
    }
}
