//! Action scripts: one JSON-encoded `Action` per line.
//!
//! Blank lines and lines starting with `#` are skipped.

use dockhand_common::{Action, DockhandError};

pub fn parse_actions(source: &str) -> Result<Vec<Action>, DockhandError> {
    let mut actions = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action: Action = serde_json::from_str(line)
            .map_err(|e| DockhandError::Other(format!("script line {}: {e}", index + 1)))?;
        actions.push(action);
    }
    Ok(actions)
}

/// Split registrations from the rest so they can run before the saved
/// layout is restored over them.
pub fn partition(actions: Vec<Action>) -> (Vec<Action>, Vec<Action>) {
    actions
        .into_iter()
        .partition(|action| matches!(action, Action::RegisterPanel { .. }))
}

#[cfg(test)]
mod tests {
    use dockhand_common::{PanelId, Point};

    use super::*;

    const SCRIPT: &str = r#"
# register and float the notes panel
{"RegisterPanel":{"id":"notes","title":"Notes","dock":"right","content":"Scratch"}}
{"FlyOut":{"panel":"notes","position":{"x":300.0,"y":200.0}}}

{"Dock":"notes"}
"SaveAll"
"#;

    #[test]
    fn parses_lines_and_skips_comments() {
        let actions = parse_actions(SCRIPT).unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(
            actions[1],
            Action::FlyOut {
                panel: PanelId::from("notes"),
                position: Some(Point::new(300.0, 200.0)),
                size: None,
            }
        );
        assert_eq!(actions[2], Action::Dock(PanelId::from("notes")));
        assert_eq!(actions[3], Action::SaveAll);
    }

    #[test]
    fn reports_bad_line_number() {
        let err = parse_actions("\"SaveAll\"\n{\"Nope\":1}\n").unwrap_err();
        assert!(err.to_string().contains("script line 2"));
    }

    #[test]
    fn registrations_are_split_out() {
        let (registrations, rest) = partition(parse_actions(SCRIPT).unwrap());
        assert_eq!(registrations.len(), 1);
        assert!(matches!(
            &registrations[0],
            Action::RegisterPanel { content: Some(body), .. } if body == "Scratch"
        ));
        assert_eq!(rest.len(), 3);
    }
}
