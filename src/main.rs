use clap::{Args, Parser, Subcommand};
use name_format::{
    format, format_list, Component, Config, FormatOptions, ListOptions, MarkupStyle,
    NameComponents, TokenCache, TOKEN_LEGEND,
};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Format human names from their components.
///
/// With `-` in place of component flags, reads newline-delimited JSON objects
/// (e.g. {"given": "John", "family": "Smith"}) from stdin and prints one
/// formatted name per line.
#[derive(Parser)]
#[command(name = "name_format", version)]
struct Cli {
    /// JSON config with named formats, separators, markup and list settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format with an explicit pattern
    Format {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        #[command(flatten)]
        input: Input,
    },
    /// Format with a named (built-in or configured) pattern
    Named {
        name: String,
        #[command(flatten)]
        input: Input,
    },
    /// Join the names read from stdin (JSON, one per line) into one list
    List {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        #[command(flatten)]
        style: Style,
    },
    /// List the pattern characters and what they do
    Tokens,
    /// List the named formats
    Formats,
}

#[derive(Args)]
struct Input {
    /// Read JSON components from stdin, one object per line
    #[arg(value_name = "-", value_parser = ["-"])]
    stdin: Option<String>,

    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    given: String,
    #[arg(long, default_value = "")]
    middle: String,
    #[arg(long, default_value = "")]
    family: String,
    #[arg(long, default_value = "")]
    credentials: String,
    #[arg(long, default_value = "")]
    generational: String,
    #[arg(long, default_value = "")]
    preferred: String,
    #[arg(long, default_value = "")]
    alternative: String,

    #[command(flatten)]
    style: Style,
}

#[derive(Args)]
struct Style {
    /// none, raw, simple, microdata or rdfa
    #[arg(long)]
    markup: Option<MarkupStyle>,
    #[arg(long)]
    sep1: Option<String>,
    #[arg(long)]
    sep2: Option<String>,
    #[arg(long)]
    sep3: Option<String>,
}

impl Input {
    fn components(&self) -> NameComponents {
        NameComponents::new()
            .with(Component::Title, &self.title)
            .with(Component::Given, &self.given)
            .with(Component::Middle, &self.middle)
            .with(Component::Family, &self.family)
            .with(Component::Credentials, &self.credentials)
            .with(Component::Generational, &self.generational)
            .with(Component::Preferred, &self.preferred)
            .with(Component::Alternative, &self.alternative)
    }
}

impl Style {
    fn options(&self, configured: &FormatOptions) -> FormatOptions {
        let mut options = configured.clone();
        if let Some(markup) = self.markup {
            options.markup = markup;
        }
        if let Some(ref sep) = self.sep1 {
            options.sep1 = sep.as_str().into();
        }
        if let Some(ref sep) = self.sep2 {
            options.sep2 = sep.as_str().into();
        }
        if let Some(ref sep) = self.sep3 {
            options.sep3 = sep.as_str().into();
        }
        options
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> name_format::Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    let registry = config.registry();

    match cli.command {
        Command::Format { pattern, input } => format_mode(&pattern, &input, &config),
        Command::Named { name, input } => {
            let pattern = registry
                .pattern(&name)
                .ok_or_else(|| name_format::Error::UnknownFormat(name.clone()))?;
            format_mode(pattern, &input, &config)
        }
        Command::List { pattern, style } => list_mode(&pattern, &style, &config),
        Command::Tokens => {
            let mut stdout = io::stdout().lock();
            for (token, description) in TOKEN_LEGEND {
                writeln!(stdout, "{:>3}  {}", token, description)?;
            }
            Ok(())
        }
        Command::Formats => {
            let mut stdout = io::stdout().lock();
            for name in registry.names() {
                writeln!(stdout, "{:<14}{}", name, registry.pattern(name).unwrap_or(""))?;
            }
            Ok(())
        }
    }
}

fn read_names<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Option<NameComponents>>> {
    reader.lines().map(|line| {
        let line = line?;
        match NameComponents::from_json(&line) {
            Ok(components) => Ok(Some(components)),
            Err(e) => {
                warn!(line = %line, error = %e, "skipping unreadable name");
                Ok(None)
            }
        }
    })
}

fn format_mode(pattern: &str, input: &Input, config: &Config) -> name_format::Result<()> {
    let options = input.style.options(&config.options);
    let mut stdout = io::stdout().lock();

    if input.stdin.is_none() {
        writeln!(stdout, "{}", format(&input.components(), pattern, &options))?;
        return Ok(());
    }

    format_lines(BufReader::new(io::stdin()), &mut stdout, pattern, &options)
}

fn format_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    pattern: &str,
    options: &FormatOptions,
) -> name_format::Result<()> {
    for name in read_names(reader) {
        let output = match name? {
            Some(components) => format(&components, pattern, options),
            None => String::new(),
        };

        if writeln!(writer, "{}", output).is_err() {
            break;
        }
    }

    Ok(())
}

fn list_mode(pattern: &str, style: &Style, config: &Config) -> name_format::Result<()> {
    let options = style.options(&config.options);
    let joined = format_names_as_list(
        BufReader::new(io::stdin()),
        pattern,
        &options,
        &config.list,
    )?;
    writeln!(io::stdout().lock(), "{}", joined)?;
    Ok(())
}

fn format_names_as_list<R: BufRead>(
    reader: R,
    pattern: &str,
    options: &FormatOptions,
    list: &ListOptions,
) -> name_format::Result<String> {
    let mut names = Vec::new();
    for name in read_names(reader) {
        names.extend(name?);
    }

    let mut cache = TokenCache::new();
    Ok(format_list(&names, pattern, options, list, &mut cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const NAMES: &str = concat!(
        r#"{"given": "Ada", "family": "Lovelace"}"#,
        "\n",
        "not json\n",
        r#"{"given": "Grace", "family": "Hopper", "title": "RADM"}"#,
        "\n",
    );

    #[test]
    fn one_line_per_name() {
        let options = FormatOptions::default();
        let mut out = Vec::new();
        format_lines(Cursor::new(NAMES), &mut out, "(t+ig)+if", &options).unwrap();
        assert_eq!("Ada Lovelace\n\nRADM Grace Hopper\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn names_as_one_list() {
        let options = FormatOptions::default();
        let list = ListOptions::default();
        let joined = format_names_as_list(Cursor::new(NAMES), "f", &options, &list).unwrap();
        assert_eq!("Lovelace and Hopper", joined);
    }

    #[test]
    fn flags_override_config() {
        let style = Style {
            markup: Some(MarkupStyle::Raw),
            sep1: Some(", ".to_string()),
            sep2: None,
            sep3: None,
        };
        let configured = FormatOptions {
            sep2: "-".into(),
            ..FormatOptions::default()
        };
        let options = style.options(&configured);
        assert_eq!(MarkupStyle::Raw, options.markup);
        assert_eq!(", ", options.sep1.as_str());
        assert_eq!("-", options.sep2.as_str());
    }
}
