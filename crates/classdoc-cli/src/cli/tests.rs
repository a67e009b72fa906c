#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_inject_defaults() {
        let cli = Cli::try_parse_from(["classdoc", "inject"]).unwrap();
        let Command::Inject(args) = cli.command else {
            panic!("expected inject");
        };
        assert!(args.input.is_empty());
        assert!(args.out_dir.is_none());
        assert!(!args.in_place);

        let overrides = args.overrides();
        assert!(overrides.input.is_empty());
        assert_eq!(overrides.in_place, None);
        assert_eq!(overrides.skip_empty, None);
    }

    #[test]
    fn test_inject_with_flags() {
        let cli = Cli::try_parse_from([
            "classdoc",
            "--verbose",
            "inject",
            "src/models",
            "lib/**/*.js",
            "--out-dir",
            "docs",
            "--skip-empty",
            "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Command::Inject(args) = cli.command else {
            panic!("expected inject");
        };
        assert_eq!(args.input, vec!["src/models", "lib/**/*.js"]);
        assert!(args.json);

        let overrides = args.overrides();
        assert_eq!(overrides.out_dir, Some(PathBuf::from("docs")));
        assert_eq!(overrides.in_place, Some(false));
        assert_eq!(overrides.skip_empty, Some(true));
    }

    #[test]
    fn test_out_dir_conflicts_with_in_place() {
        let result =
            Cli::try_parse_from(["classdoc", "inject", "--in-place", "--out-dir", "docs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["classdoc", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["classdoc", "check", "src", "--no-color", "-q"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.quiet);
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.overrides().input, vec!["src"]);
        assert_eq!(args.overrides().out_dir, None);
    }

    #[test]
    fn test_print_requires_file() {
        assert!(Cli::try_parse_from(["classdoc", "print"]).is_err());

        let cli = Cli::try_parse_from(["classdoc", "print", "src/App.js"]).unwrap();
        let Command::Print(args) = cli.command else {
            panic!("expected print");
        };
        assert_eq!(args.file, PathBuf::from("src/App.js"));
        assert!(!args.json);
    }
}
