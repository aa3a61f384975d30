//! zypper command-line construction
//!
//! Rendering a command line is a pure function of the operation, its
//! arguments and the configured filesystem root. Every user-supplied value
//! passes through [`escape`] or [`quote`] before it is interpolated.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use crate::config::defaults::ZYPPER_BINARY;

/// Escape a value for the shell, leaving shell-safe values untouched
///
/// `:` counts as safe on top of shell-escape's set so plain URLs stay
/// unquoted.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        return Cow::Borrowed(value);
    }
    shell_escape::unix::escape(Cow::Borrowed(value))
}

fn is_shell_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "-_=/,.+:".contains(ch)
}

/// Escape a value for the shell and always present it single-quoted
pub fn quote(value: &str) -> String {
    let escaped = escape(value);
    if escaped.starts_with('\'') {
        escaped.into_owned()
    } else {
        format!("'{escaped}'")
    }
}

/// One zypper invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZypperOperation<'a> {
    /// `products -i`
    InstalledProducts,
    /// `modifyrepo -e <alias>`
    EnableRepository(&'a str),
    /// `modifyrepo -d <alias>`
    DisableRepository(&'a str),
    /// `repos -d`
    Repositories,
    /// `services -d`
    Services,
    /// `addservice -t ris <url> '<name>'`
    AddService { url: &'a str, name: &'a str },
    /// `removeservice '<name>'`
    RemoveService(&'a str),
    /// `modifyservice -r '<name>'`
    EnableServiceAutorefresh(&'a str),
    /// `refresh`
    Refresh,
    /// `refresh-services -r`
    RefreshServices,
    /// `targetos`
    DistroTarget,
}

impl ZypperOperation<'_> {
    /// Global flags placed between the binary (and `--root`) and the subcommand
    fn global_flags(&self) -> &'static [&'static str] {
        match self {
            Self::InstalledProducts => &["--no-refresh", "--xmlout", "--non-interactive"],
            Self::Repositories | Self::Services => &["--xmlout", "--non-interactive"],
            Self::DistroTarget => &[],
            _ => &["--non-interactive"],
        }
    }

    fn subcommand(&self) -> Vec<Cow<'_, str>> {
        match *self {
            Self::InstalledProducts => vec!["products".into(), "-i".into()],
            Self::EnableRepository(alias) => {
                vec!["modifyrepo".into(), "-e".into(), escape(alias)]
            }
            Self::DisableRepository(alias) => {
                vec!["modifyrepo".into(), "-d".into(), escape(alias)]
            }
            Self::Repositories => vec!["repos".into(), "-d".into()],
            Self::Services => vec!["services".into(), "-d".into()],
            Self::AddService { url, name } => vec![
                "addservice".into(),
                "-t".into(),
                "ris".into(),
                escape(url),
                quote(name).into(),
            ],
            Self::RemoveService(name) => vec!["removeservice".into(), quote(name).into()],
            Self::EnableServiceAutorefresh(name) => {
                vec!["modifyservice".into(), "-r".into(), quote(name).into()]
            }
            Self::Refresh => vec!["refresh".into()],
            Self::RefreshServices => vec!["refresh-services".into(), "-r".into()],
            Self::DistroTarget => vec!["targetos".into()],
        }
    }

    /// Render the full command line
    ///
    /// With a root override, `--root '<path>'` directly follows the binary.
    pub fn render(&self, root: Option<&Path>) -> String {
        let mut parts: Vec<Cow<'_, str>> = vec![ZYPPER_BINARY.into()];

        if let Some(root) = root {
            parts.push("--root".into());
            parts.push(quote(&root.to_string_lossy()).into());
        }

        parts.extend(self.global_flags().iter().map(|flag| Cow::Borrowed(*flag)));
        parts.extend(self.subcommand());
        parts.join(" ")
    }
}

impl fmt::Display for ZypperOperation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
