//! Tests for CLI argument parsing.

use chrono::{TimeZone, Utc};
use clap::Parser;

use super::cli::{Cli, Command, EmbedArgs, WebhookCommand};
use crate::embed::EmbedBuilder;

fn embed_args(args: &[&str]) -> EmbedArgs {
    let mut full_args = vec!["chathook", "embed"];
    full_args.extend(args);
    match Cli::parse_from_iter(full_args).command {
        Command::Webhook(WebhookCommand::Embed(args)) => args,
        other => panic!("expected embed command, got {other:?}"),
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parse_send_with_global_options() {
        let cli = Cli::parse_from_iter([
            "chathook",
            "--url",
            "https://chat.example.com/api/webhooks/1/t",
            "send",
            "hello world",
            "--username",
            "bot",
        ]);

        assert_eq!(
            cli.url.as_deref(),
            Some("https://chat.example.com/api/webhooks/1/t")
        );
        assert_eq!(cli.username.as_deref(), Some("bot"));
        assert!(matches!(
            cli.command,
            Command::Webhook(WebhookCommand::Send { ref content }) if content == "hello world"
        ));
    }

    #[test]
    fn parse_file_and_delete() {
        let file = Cli::parse_from_iter(["chathook", "file", "logs/app.log"]);
        assert!(matches!(
            file.command,
            Command::Webhook(WebhookCommand::File { ref path }) if path.as_os_str() == "logs/app.log"
        ));

        let delete = Cli::parse_from_iter(["chathook", "delete"]);
        assert!(matches!(delete.command, Command::Webhook(WebhookCommand::Delete)));
    }

    #[test]
    fn parse_init_default_output() {
        let cli = Cli::parse_from_iter(["chathook", "init"]);

        assert!(
            matches!(cli.command, Command::Init { ref output } if output.as_os_str() == "chathook.toml")
        );
    }

    #[test]
    fn parse_init_custom_output() {
        let cli = Cli::parse_from_iter(["chathook", "init", "-o", "custom.toml"]);

        assert!(
            matches!(cli.command, Command::Init { ref output } if output.as_os_str() == "custom.toml")
        );
    }

    #[test]
    fn parse_timeout_config_and_verbose() {
        let cli = Cli::parse_from_iter([
            "chathook",
            "-c",
            "hook.toml",
            "-v",
            "--timeout",
            "5",
            "delete",
        ]);

        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("hook.toml")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Webhook(_)));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        let result = Cli::try_parse_from(["chathook", "--url", "https://example.com"]);

        assert!(result.is_err());
    }
}

mod embed_options {
    use super::*;

    #[test]
    fn fields_keep_command_line_order() {
        let args = embed_args(&["--field", "B=2", "--field", "A=1", "--field", "C=3"]);

        assert_eq!(
            args.fields,
            vec![
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "1".to_string()),
                ("C".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn field_value_may_contain_equals_sign() {
        let args = embed_args(&["--field", "query=a=b"]);

        assert_eq!(args.fields, vec![("query".to_string(), "a=b".to_string())]);
    }

    #[test]
    fn field_without_separator_is_rejected() {
        let result = Cli::try_parse_from(["chathook", "embed", "--field", "novalue"]);

        assert!(result.is_err());
    }

    #[test]
    fn color_accepts_hex_and_decimal() {
        assert_eq!(embed_args(&["--color", "#2ECC71"]).color, Some(0x2E_CC_71));
        assert_eq!(embed_args(&["--color", "0xff0000"]).color, Some(0xFF_00_00));
        assert_eq!(embed_args(&["--color", "255"]).color, Some(255));
    }

    #[test]
    fn bad_color_is_rejected() {
        let result = Cli::try_parse_from(["chathook", "embed", "--color", "#GGGGGG"]);

        assert!(result.is_err());
    }

    #[test]
    fn timestamp_accepts_rfc3339_and_now() {
        let fixed = embed_args(&["--timestamp", "2024-05-01T14:30:00+02:00"]);
        assert_eq!(
            fixed.timestamp.map(|t| t.to_rfc3339()),
            Some("2024-05-01T14:30:00+02:00".to_string())
        );

        let now = embed_args(&["--timestamp", "now"]);
        assert!(now.timestamp.is_some());
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let result = Cli::try_parse_from(["chathook", "embed", "--timestamp", "yesterday"]);

        assert!(result.is_err());
    }
}

mod embed_conversion {
    use super::*;

    #[test]
    fn empty_args_build_empty_embed() {
        let builder = EmbedBuilder::from(&EmbedArgs::default());

        assert_eq!(builder, EmbedBuilder::new());
    }

    #[test]
    fn all_options_map_onto_builder() {
        let args = embed_args(&[
            "--title",
            "Deploy",
            "--description",
            "Finished",
            "--embed-url",
            "https://ci.example.com/1",
            "--color",
            "#00FF00",
            "--author-name",
            "ci",
            "--footer-text",
            "build 7",
            "--image",
            "https://cdn.example.com/i.png",
            "--thumbnail",
            "https://cdn.example.com/t.png",
            "--field",
            "Env=prod",
            "--inline",
            "--timestamp",
            "2024-05-01T12:00:00Z",
        ]);

        let embed = EmbedBuilder::from(&args).build();

        assert_eq!(embed.title, "Deploy");
        assert_eq!(embed.description, "Finished");
        assert_eq!(embed.url, "https://ci.example.com/1");
        assert_eq!(embed.color, 0x00_FF_00);
        assert_eq!(embed.author.name, "ci");
        assert_eq!(embed.author.url, "");
        assert_eq!(embed.footer.text, "build 7");
        assert_eq!(embed.image.url, "https://cdn.example.com/i.png");
        assert_eq!(embed.thumbnail.url, "https://cdn.example.com/t.png");
        assert_eq!(embed.fields.len(), 1);
        assert!(embed.fields[0].inline);
        assert_eq!(embed.timestamp, "2024-05-01T12:00:00Z");
    }

    #[test]
    fn timestamp_matches_builder_rendering() {
        let args = embed_args(&["--timestamp", "2024-05-01T12:00:00+00:00"]);
        let expected = EmbedBuilder::new()
            .timestamp(&Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
            .build();

        assert_eq!(
            EmbedBuilder::from(&args).build().timestamp,
            expected.timestamp
        );
    }
}
