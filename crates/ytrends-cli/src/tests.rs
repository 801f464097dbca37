use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["ytrends"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn query_without_keywords_uses_defaults() {
    let cli = Cli::try_parse_from(["ytrends", "query"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Query { ref keywords, json: false }) if keywords == DEFAULT_KEYWORDS
    ));
}

#[test]
fn query_with_keywords_and_json() {
    let cli = Cli::try_parse_from(["ytrends", "query", "kucing, anjing", "--json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Query { ref keywords, json: true }) if keywords == "kucing, anjing"
    ));
}

#[test]
fn query_keeps_raw_text_for_validation() {
    // Too many keywords is a query outcome, not a parse error.
    let cli = Cli::try_parse_from(["ytrends", "query", "a,b,c,d,e,f"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Query { ref keywords, .. }) if keywords == "a,b,c,d,e,f"
    ));
}

#[test]
fn parses_interactive_command() {
    let cli = Cli::try_parse_from(["ytrends", "interactive"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Interactive)));
}

#[test]
fn unknown_subcommand_is_error() {
    assert!(Cli::try_parse_from(["ytrends", "serve"]).is_err());
}
