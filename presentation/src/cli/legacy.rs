//! Single-dash long option support.
//!
//! `xbacklight` spells its options `-set`, `-ctrl`, ... which clap would read
//! as bundles of short flags. Known names are rewritten to `--name` before
//! parsing; everything else (short flags, numbers like `-10`, values) is left
//! untouched.

use std::ffi::OsString;

const LONG_OPTIONS: &[&str] = &[
    "list",
    "get",
    "getf",
    "set",
    "inc",
    "dec",
    "ctrl",
    "time",
    "steps",
    "fps",
    "display",
    "verbose",
    "config",
    "no-config",
    "show-config",
    "help",
    "version",
];

/// Rewrite `-name` and `-name=value` into their double-dash form.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    after_separator = true;
                    None
                }
                Some(text) => rewrite(text),
                None => None,
            };
            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

fn rewrite(arg: &str) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    LONG_OPTIONS
        .contains(&name)
        .then(|| format!("-{arg}"))
}
