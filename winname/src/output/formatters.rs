//! Output formatter implementations.

use crate::window::WindowName;
use crate::{Error, Result};

use super::OutputFormatter;

/// Quote `value` for a double-quoted tmux command argument.
///
/// Control characters are dropped: a newline would end the command.
fn tmux_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars().filter(|c| !c.is_control()) {
        if matches!(c, '\\' | '"' | '$') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Escape `#` so tmux shows `value` literally when expanding a format.
fn tmux_format_literal(value: &str) -> String {
    value.replace('#', "##")
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, names: &[WindowName]) -> Result<String> {
        Ok(names
            .iter()
            .map(|n| format!("{}\t{}", n.id, n.name))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, names: &[WindowName]) -> Result<String> {
        serde_json::to_string_pretty(names).map_err(|e| Error::Validation {
            field: "json".to_string(),
            message: format!("failed to serialize names: {e}"),
        })
    }
}

/// Formatter emitting tmux commands that rename each window and keep the
/// name when tmux renames it automatically.
///
/// Three commands are written per window:
///
/// ```text
/// rename-window -t "@1" "api/src"
/// set-option -wq -t "@1" automatic-rename-format "api/src"
/// set-option -wq -t "@1" automatic-rename on
/// ```
pub struct TmuxFormatter;

impl OutputFormatter for TmuxFormatter {
    fn format(&self, names: &[WindowName]) -> Result<String> {
        let mut lines = Vec::with_capacity(names.len() * 3);
        for n in names {
            let target = tmux_quote(&n.id);
            lines.push(format!("rename-window -t {target} {}", tmux_quote(&n.name)));
            lines.push(format!(
                "set-option -wq -t {target} automatic-rename-format {}",
                tmux_quote(&tmux_format_literal(&n.name))
            ));
            lines.push(format!("set-option -wq -t {target} automatic-rename on"));
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<WindowName> {
        vec![
            WindowName {
                id: "@1".into(),
                name: "api/src".into(),
            },
            WindowName {
                id: "@2".into(),
                name: "nvim:src".into(),
            },
        ]
    }

    #[test]
    fn test_human_format() {
        let output = HumanFormatter.format(&names()).unwrap();
        assert_eq!(output, "@1\tapi/src\n@2\tnvim:src");
    }

    #[test]
    fn test_human_format_empty() {
        assert_eq!(HumanFormatter.format(&[]).unwrap(), "");
    }

    #[test]
    fn test_json_format() {
        let output = JsonFormatter.format(&names()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], "@1");
        assert_eq!(parsed[1]["name"], "nvim:src");
    }

    #[test]
    fn test_tmux_format() {
        let output = TmuxFormatter.format(&names()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                r#"rename-window -t "@1" "api/src""#,
                r#"set-option -wq -t "@1" automatic-rename-format "api/src""#,
                r#"set-option -wq -t "@1" automatic-rename on"#,
                r#"rename-window -t "@2" "nvim:src""#,
                r#"set-option -wq -t "@2" automatic-rename-format "nvim:src""#,
                r#"set-option -wq -t "@2" automatic-rename on"#,
            ]
        );
    }

    #[test]
    fn test_tmux_format_empty() {
        assert_eq!(TmuxFormatter.format(&[]).unwrap(), "");
    }

    #[test]
    fn test_tmux_quoting() {
        assert_eq!(tmux_quote(r#"a"b$c\d"#), r#""a\"b\$c\\d""#);
    }

    #[test]
    fn test_tmux_id_with_separator_stays_one_argument() {
        let names = vec![WindowName {
            id: "@1; kill-server;".into(),
            name: "src".into(),
        }];
        let output = TmuxFormatter.format(&names).unwrap();
        assert!(output.starts_with(r#"rename-window -t "@1; kill-server;" "src""#));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_tmux_control_characters_dropped() {
        assert_eq!(tmux_quote("a\nkill-server\r\t"), r#""akill-server""#);

        let names = vec![WindowName {
            id: "@1".into(),
            name: "a\nkill-server".into(),
        }];
        let output = TmuxFormatter.format(&names).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.lines().all(|line| !line.starts_with("kill-server")));
    }

    #[test]
    fn test_tmux_format_string_escapes_hash() {
        let names = vec![WindowName {
            id: "@1".into(),
            name: "#(reboot)".into(),
        }];
        let output = TmuxFormatter.format(&names).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], r##"rename-window -t "@1" "#(reboot)""##);
        assert_eq!(
            lines[1],
            r###"set-option -wq -t "@1" automatic-rename-format "##(reboot)""###
        );
    }
}
