//! Argument parsing for the burnish binary.
//!
//! A hand-rolled flag loop: value flags take the next argument or an
//! `=`-joined value, boolean short flags cluster (`-dd`, `-il`), `--`
//! ends flag parsing and `-` names stdin. Later flags win, so presets
//! like `--json` can be partially overridden by what follows them.

use burnish_fmt::{BomMode, Options, PropertyQuoting, QuoteStyle, SuppressSpaceAfter};

/// Everything one invocation of the formatter needs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub options: Options,
    /// Input names in argument order; `-` means stdin. No names at all
    /// also means stdin.
    pub files: Vec<String>,
    /// Rewrite each file instead of printing to stdout.
    pub in_place: bool,
    /// Print each processed filename to stderr.
    pub verbose: bool,
    /// Debug verbosity from repeated `-d`.
    pub debug: u8,
}

/// What the arguments asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Format with this configuration.
    Run(RunConfig),
    /// Print the help text and exit successfully.
    Help,
}

pub fn parse(args: &[String]) -> Result<Command, String> {
    let mut config = RunConfig::default();
    let mut literal = false;
    let mut help = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if literal || arg == "-" || !arg.starts_with('-') {
            config.files.push(arg.clone());
        } else if arg == "--" {
            literal = true;
        } else if let Some(long) = arg.strip_prefix("--") {
            parse_long(long, arg, &mut iter, &mut config, &mut help)?;
        } else {
            parse_cluster(&arg[1..], arg, &mut iter, &mut config, &mut help)?;
        }
    }

    if help {
        return Ok(Command::Help);
    }

    Ok(Command::Run(config))
}

fn parse_long(
    long: &str,
    arg: &str,
    iter: &mut std::slice::Iter<'_, String>,
    config: &mut RunConfig,
    help: &mut bool,
) -> Result<(), String> {
    if let Some((flag, value)) = long.split_once('=') {
        return apply_value(flag, value, config);
    }

    match long {
        "help" => *help = true,
        "debug" => config.debug = config.debug.saturating_add(1),
        "else-newline" => config.options.else_newline = true,
        "in-place" => config.in_place = true,
        "jslint" => config.options.strict = true,
        "json" => apply_json_preset(&mut config.options),
        "no-space-with-inc-dec" => config.options.suppress_space_with_inc_dec = true,
        "trailing-newline" => config.options.trailing_newline = true,
        "verbose" => config.verbose = true,

        "bom" | "comment-space" | "convert-strings" | "indent" | "newline"
        | "no-space-after" | "quote-properties" => {
            let value = next_value(arg, iter)?;
            apply_value(long, value, config)?;
        }

        _ => return Err(format!("Unknown option: {arg}")),
    }

    Ok(())
}

/// One `-abc` argument: booleans in any combination, a value flag alone,
/// taking the next argument (`-n crlf`) or an `=`-joined value (`-n=crlf`).
fn parse_cluster(
    cluster: &str,
    arg: &str,
    iter: &mut std::slice::Iter<'_, String>,
    config: &mut RunConfig,
    help: &mut bool,
) -> Result<(), String> {
    if let Some((head, value)) = cluster.split_once('=') {
        let mut shorts = head.chars();

        if let (Some(short), None) = (shorts.next(), shorts.next()) {
            if let Some(flag) = value_flag(short) {
                return apply_value(flag, value, config);
            }
        }

        return Err(format!("Unknown option: {arg}"));
    }

    for short in cluster.chars() {
        match short {
            'h' => *help = true,
            'd' => config.debug = config.debug.saturating_add(1),
            'e' => config.options.else_newline = true,
            'i' => config.in_place = true,
            'l' => config.options.strict = true,
            'j' => apply_json_preset(&mut config.options),
            'f' => config.options.trailing_newline = true,
            'v' => config.verbose = true,

            _ => {
                let Some(flag) = value_flag(short) else {
                    return Err(format!("Unknown option: -{short}"));
                };

                if cluster.len() != 1 {
                    return Err(format!("Option -{short} takes a value and cannot be grouped"));
                }

                let value = next_value(arg, iter)?;
                apply_value(flag, value, config)?;
            }
        }
    }

    Ok(())
}

/// Long name of a short flag that takes a value.
fn value_flag(short: char) -> Option<&'static str> {
    match short {
        'b' => Some("bom"),
        's' => Some("comment-space"),
        'c' => Some("convert-strings"),
        't' => Some("indent"),
        'n' => Some("newline"),
        'q' => Some("quote-properties"),
        _ => None,
    }
}

fn next_value<'a>(
    flag: &str,
    iter: &mut std::slice::Iter<'a, String>,
) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("Option {flag} requires a value"))
}

fn apply_value(flag: &str, value: &str, config: &mut RunConfig) -> Result<(), String> {
    match flag {
        "bom" => config.options.bom = parse_bom(value)?,
        "comment-space" => config.options.comment_gutter = value.to_string(),
        "convert-strings" => config.options.quote_style = parse_quote_style(value)?,
        "indent" => config.options.indent = value.to_string(),
        "newline" => config.options.newline = parse_newline(value)?,
        "no-space-after" => config.options.suppress_space_after |= parse_suppressed_keyword(value)?,
        "quote-properties" => config.options.property_quoting = parse_property_quoting(value)?,
        _ => return Err(format!("Unknown option: --{flag}")),
    }

    Ok(())
}

/// `--json`: the option combination that yields valid JSON output.
fn apply_json_preset(options: &mut Options) {
    options.bom = BomMode::Remove;
    options.quote_style = QuoteStyle::Double;
    options.strict = false;
    options.property_quoting = PropertyQuoting::Add;
}

fn parse_bom(value: &str) -> Result<BomMode, String> {
    match value.to_lowercase().as_str() {
        "add" => Ok(BomMode::Add),
        "remove" => Ok(BomMode::Remove),
        "preserve" => Ok(BomMode::Preserve),
        _ => Err("BOM action must be add, remove, or preserve.".to_string()),
    }
}

fn parse_quote_style(value: &str) -> Result<QuoteStyle, String> {
    match value.to_lowercase().as_str() {
        "double" => Ok(QuoteStyle::Double),
        "single" => Ok(QuoteStyle::Single),
        "preserve" => Ok(QuoteStyle::Preserve),
        _ => Err("Convert strings must be double, single or preserve.".to_string()),
    }
}

fn parse_newline(value: &str) -> Result<String, String> {
    match value.to_lowercase().as_str() {
        "cr" => Ok("\r".to_string()),
        "lf" => Ok("\n".to_string()),
        "crlf" => Ok("\r\n".to_string()),
        _ => Err("Must use cr, lf or crlf for the newlines".to_string()),
    }
}

fn parse_suppressed_keyword(value: &str) -> Result<SuppressSpaceAfter, String> {
    match value.to_lowercase().as_str() {
        "if" => Ok(SuppressSpaceAfter::IF),
        "for" => Ok(SuppressSpaceAfter::FOR),
        "function" => Ok(SuppressSpaceAfter::FUNCTION),
        "switch" => Ok(SuppressSpaceAfter::SWITCH),
        _ => Err("Must choose if, for, function or switch.".to_string()),
    }
}

fn parse_property_quoting(value: &str) -> Result<PropertyQuoting, String> {
    match value.to_lowercase().as_str() {
        "add" => Ok(PropertyQuoting::Add),
        "remove" => Ok(PropertyQuoting::Remove),
        "preserve" => Ok(PropertyQuoting::Preserve),
        _ => Err("The quoting of properties must be set to add, remove, or preserve.".to_string()),
    }
}

pub fn print_help() {
    println!("Reformat JavaScript to a consistent, diff-friendly layout");
    println!();
    println!("Usage: burnish [options] [file...]");
    println!();
    println!("Arguments:");
    println!("  file    Files to format; '-' or no files reads stdin");
    println!();
    println!("Options:");
    println!("  -b, --bom ACTION           'add' always adds a byte order mark, 'remove'");
    println!("                             strips one, 'preserve' keeps what was there");
    println!("                             (default remove)");
    println!("  -s, --comment-space STR    Text between code and a trailing comment on the");
    println!("                             same line (default two spaces)");
    println!("  -c, --convert-strings VAL  Quote style for strings: 'double', 'single' or");
    println!("                             'preserve' (default double)");
    println!("  -d, --debug                Debug logging; give it twice for per-file timing");
    println!("  -e, --else-newline         Put else, catch and finally on their own line");
    println!("  -h, --help                 This help message");
    println!("  -i, --in-place             Write results over the original files");
    println!("  -t, --indent STR           One indentation level (default four spaces)");
    println!("  -l, --jslint               Stricter, lint-friendly layout");
    println!("  -j, --json                 Preset for JSON output: no BOM, double quotes,");
    println!("                             quoted property names");
    println!("  -n, --newline CODE         Line endings: 'cr', 'lf' or 'crlf' (default lf)");
    println!("      --no-space-after KW    Drop the space after 'if', 'for', 'function' or");
    println!("                             'switch'; repeatable");
    println!("      --no-space-with-inc-dec");
    println!("                             Attach ++ and -- to their operand");
    println!("  -q, --quote-properties ACT");
    println!("                             'add' quotes every property name, 'remove' drops");
    println!("                             needless quotes, 'preserve' keeps them as-is");
    println!("                             (default remove)");
    println!("  -f, --trailing-newline     End the output with a newline");
    println!("  -v, --verbose              Print each processed filename to stderr");
    println!();
    println!("Examples:");
    println!("  burnish script.js                # format to stdout");
    println!("  burnish -i src/a.js src/b.js     # rewrite files in place");
    println!("  cat minified.js | burnish        # stdin to stdout");
    println!("  burnish -j data.json             # normalize JSON");
}
