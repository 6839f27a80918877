use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use icon_variants_core::config::Config;
use icon_variants_core::{IconCollection, IconVariantsError, Result, VariantMap, VariantRule};

mod args;
use args::{Cli, Commands, ConfigAction, RulesAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let base_dir = resolve_base_dir(cli.base_dir);
    log::debug!("base dir: {}", base_dir.display());

    let result = match cli.command {
        Some(Commands::Classify {
            files,
            collection,
            names,
            json,
        }) => handle_classify(&base_dir, &files, collection.as_deref(), &names, json, cli.quiet),
        Some(Commands::Rules { action }) => handle_rules(action, &base_dir),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "icon-variants", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("ICON_VARIANTS_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".icon-variants"))
        .unwrap_or_else(|| PathBuf::from(".icon-variants"))
}

/// One classified input: where it came from, collection id, display label, grouping
struct Classified {
    source: String,
    id: String,
    label: String,
    variants: Option<VariantMap>,
}

/// Source label for icon names given with `--names`
const NAMES_SOURCE: &str = "--names";

fn handle_classify(
    base_dir: &Path,
    files: &[PathBuf],
    collection: Option<&str>,
    names: &[String],
    json: bool,
    quiet: bool,
) -> Result<()> {
    let results = classify_inputs(base_dir, files, collection, names)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&render_json(&results)?)?);
    } else {
        print!("{}", render_text(&results, quiet));
    }
    Ok(())
}

fn classify_inputs(
    base_dir: &Path,
    files: &[PathBuf],
    collection: Option<&str>,
    names: &[String],
) -> Result<Vec<Classified>> {
    let classifier = Config::load(base_dir)?.classifier()?;

    let mut results = Vec::new();
    if !names.is_empty() {
        // clap enforces --collection together with --names
        let id = collection.unwrap_or_default().to_string();
        let variants = classifier.classify_names(&id, names.iter().map(String::as_str));
        results.push(Classified {
            source: NAMES_SOURCE.to_string(),
            label: id.clone(),
            id,
            variants,
        });
    }

    for file in files {
        let icons = IconCollection::load(file)?;
        let id = collection.unwrap_or(icons.prefix.as_str()).to_string();
        log::debug!("{}: {} icon(s) as '{}'", file.display(), icons.icon_names().len(), id);
        results.push(Classified {
            source: file.display().to_string(),
            label: icons.display_name().to_string(),
            variants: icons.variants(&classifier, Some(&id)),
            id,
        });
    }

    Ok(results)
}

/// One entry per input, so inputs sharing a collection id stay separate
fn render_json(results: &[Classified]) -> Result<serde_json::Value> {
    let mut entries = Vec::with_capacity(results.len());
    for result in results {
        let variants = serde_json::to_value(&result.variants)?;
        entries.push(serde_json::json!({
            "source": result.source,
            "collection": result.id,
            "variants": variants,
        }));
    }
    Ok(serde_json::Value::Array(entries))
}

fn render_text(results: &[Classified], quiet: bool) -> String {
    let mut out = String::new();
    for result in results {
        if quiet {
            out.push_str(&format!("{} ({})\n", result.source, result.id));
        } else {
            out.push('\n');
            if result.label == result.id {
                out.push_str(&format!("{}", result.id.bold()));
            } else {
                out.push_str(&format!("{} ({})", result.label.bold(), result.id.dimmed()));
            }
            out.push_str(&format!(" {}\n", result.source.dimmed()));
        }

        match &result.variants {
            Some(variants) => {
                for (group, icons) in variants {
                    out.push_str(&format!(
                        "  {} {} {}\n",
                        group.cyan(),
                        format!("({})", icons.len()).dimmed(),
                        icons.join(", ")
                    ));
                }
            }
            None => {
                if !quiet {
                    out.push_str(&format!("  {} no variants\n", "[WARN]".yellow().bold()));
                }
            }
        }
    }

    if !quiet {
        out.push('\n');
    }
    out
}

fn handle_rules(action: RulesAction, base_dir: &Path) -> Result<()> {
    let store = Config::load(base_dir)?.rule_store()?;

    match action {
        RulesAction::List { collection } => {
            let (title, rules) = match collection.as_deref() {
                Some(id) => match store.explicit(id) {
                    Some(rules) => (format!("{} (explicit)", id), rules),
                    None => (format!("{} (fallback)", id), store.fallback()),
                },
                None => ("fallback".to_string(), store.fallback()),
            };
            println!();
            println!("{}", title.bold());
            print_rules(rules);
            println!();
        }
        RulesAction::Collections => {
            println!();
            for id in store.collections() {
                let count = store.explicit(id).map_or(0, |rules| rules.len());
                println!("  {} {}", id.cyan(), format!("({} rules)", count).dimmed());
            }
            println!();
        }
    }

    Ok(())
}

fn print_rules(rules: &[VariantRule]) {
    if rules.is_empty() {
        println!("  {} no rules", "[WARN]".yellow().bold());
        return;
    }

    let width = rules.iter().map(|r| r.group.len()).max().unwrap_or(0);
    for (i, rule) in rules.iter().enumerate() {
        println!(
            "  {:>2}. {:<width$}  {:<6} {}",
            i + 1,
            rule.group.cyan(),
            rule.pattern.kind(),
            rule.pattern.as_str(),
            width = width
        );
    }
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(IconVariantsError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            // reject configs that would not load next time
            config.rule_store()?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_classify_names() {
        let cli = Cli::try_parse_from([
            "icon-variants",
            "classify",
            "--collection",
            "mdi",
            "--names",
            "sun-outline,moon",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Classify {
                names, collection, ..
            }) => {
                assert_eq!(names, vec!["sun-outline", "moon"]);
                assert_eq!(collection.as_deref(), Some("mdi"));
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_cli_names_require_collection() {
        assert!(Cli::try_parse_from(["icon-variants", "classify", "--names", "a,b"]).is_err());
    }

    #[test]
    fn test_cli_classify_requires_input() {
        assert!(Cli::try_parse_from(["icon-variants", "classify"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_base_dir_prefers_flag() {
        let base = resolve_base_dir(Some(PathBuf::from("/tmp/iv")));
        assert_eq!(base, PathBuf::from("/tmp/iv"));
    }

    #[test]
    fn test_handle_classify_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = handle_classify(
            dir.path(),
            &[dir.path().join("missing.json")],
            None,
            &[],
            false,
            true,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    fn write_collection(dir: &Path, file: &str, json: &str) -> PathBuf {
        let path = dir.join(file);
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_handle_classify_file() {
        let dir = TempDir::new().unwrap();
        let file = write_collection(
            dir.path(),
            "lobe.json",
            r#"{ "prefix": "lobe", "icons": { "openai": {}, "gemini-color": {} } }"#,
        );

        let result = handle_classify(
            dir.path(),
            &[file],
            Some("@proj-airi/lobe-icons"),
            &[],
            true,
            false,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_json_keeps_inputs_sharing_a_collection() {
        let dir = TempDir::new().unwrap();
        let a = write_collection(
            dir.path(),
            "a.json",
            r#"{ "prefix": "mdi", "icons": { "sun-outline": {}, "moon": {} } }"#,
        );
        let b = write_collection(
            dir.path(),
            "b.json",
            r#"{ "prefix": "mdi", "icons": { "star-bold": {}, "x": {} } }"#,
        );

        let results = classify_inputs(dir.path(), &[a.clone(), b.clone()], None, &[]).unwrap();
        let json = render_json(&results).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0]["source"], a.display().to_string());
        assert_eq!(entries[0]["collection"], "mdi");
        assert_eq!(entries[0]["variants"]["Outline"], serde_json::json!(["sun-outline"]));
        assert_eq!(entries[0]["variants"]["Default"], serde_json::json!(["moon"]));

        assert_eq!(entries[1]["source"], b.display().to_string());
        assert_eq!(entries[1]["collection"], "mdi");
        assert_eq!(entries[1]["variants"]["Bold"], serde_json::json!(["star-bold"]));
    }

    #[test]
    fn test_json_reports_missing_variants_as_null() {
        let dir = TempDir::new().unwrap();
        let names = vec!["foo".to_string(), "bar".to_string()];
        let results = classify_inputs(dir.path(), &[], Some("mdi"), &names).unwrap();
        let json = render_json(&results).unwrap();

        assert_eq!(json[0]["source"], NAMES_SOURCE);
        assert!(json[0]["variants"].is_null());
    }

    #[test]
    fn test_quiet_text_labels_every_input() {
        colored::control::set_override(false);

        let dir = TempDir::new().unwrap();
        let a = write_collection(
            dir.path(),
            "a.json",
            r#"{ "prefix": "mdi", "icons": { "sun-outline": {}, "moon": {} } }"#,
        );
        let b = write_collection(
            dir.path(),
            "b.json",
            r#"{ "prefix": "mdi", "icons": { "star-bold": {}, "x": {} } }"#,
        );

        let results = classify_inputs(dir.path(), &[a.clone(), b.clone()], None, &[]).unwrap();
        let text = render_text(&results, true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], format!("{} (mdi)", a.display()));
        assert!(lines[1].contains("Outline"));
        let b_label = format!("{} (mdi)", b.display());
        let b_at = lines.iter().position(|l| *l == b_label).unwrap();
        assert!(lines[b_at + 1].contains("Bold"));
    }

    #[test]
    fn test_handle_classify_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            Config::path(dir.path()),
            "[variants.fallback]\nrules = [{ group = \"Bad\", regex = \"-(x$\" }]\n",
        )
        .unwrap();

        let err = handle_classify(
            dir.path(),
            &[],
            Some("mdi"),
            &["a-x".to_string()],
            false,
            true,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
