//! Single-dash flag support.
//!
//! The utility accepts `-host example.com` as well as `--host example.com`.
//! clap only understands the double-dash spelling for long names, so the raw
//! argument list is rewritten first.

use std::ffi::OsString;

use crate::config::constants::FLAG_NAMES;

/// Rewrites `-name` and `-name=value` arguments to `--name` form.
///
/// Only names listed in [`FLAG_NAMES`] are rewritten. The program name (the
/// first item) and every other argument pass through untouched, so option
/// values that happen to start with a dash are left alone. Arguments that are
/// not valid UTF-8 are passed on as well, for clap to report.
///
/// # Examples
///
/// ```
/// use flagreq::config::normalize_args;
///
/// let args = normalize_args(["flagreq", "-method=get", "-host", "localhost", "-x"]);
/// assert_eq!(args, ["flagreq", "--method=get", "--host", "localhost", "-x"]);
/// ```
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expecting_value = false;

    while let Some(arg) = args.next() {
        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }
        match single_dash_flag(text) {
            Some((name, has_value)) => {
                expecting_value = !has_value && takes_value(name);
                normalized.push(format!("-{text}").into());
            }
            None => {
                if let Some(name) = text.strip_prefix("--") {
                    expecting_value = !name.contains('=') && takes_value(name);
                }
                normalized.push(arg);
            }
        }
    }

    normalized
}

/// Returns the flag name of a recognized `-name[=value]` argument and whether
/// the value was given inline.
fn single_dash_flag(arg: &str) -> Option<(&str, bool)> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let (name, has_value) = match rest.split_once('=') {
        Some((name, _)) => (name, true),
        None => (rest, false),
    };
    FLAG_NAMES
        .contains(&name)
        .then_some((name, has_value))
}

/// Flags that consume the following argument when no `=value` is attached.
fn takes_value(name: &str) -> bool {
    !matches!(name, "skip-ssl-verify" | "help" | "version")
}
