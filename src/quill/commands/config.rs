use crate::commands::CmdResult;
use crate::config::QuillConfig;
use crate::error::Result;
use crate::model::Alias;

/// Lists the configured aliases in name order.
pub fn list_aliases(config: &QuillConfig) -> Result<CmdResult> {
    let aliases = config
        .aliases
        .iter()
        .map(|(name, command)| Alias {
            name: name.clone(),
            command: command.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_aliases(aliases))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_aliases_sorted() {
        let mut config = QuillConfig::default();
        config.aliases.insert("weekly".into(), "quill new journal/weekly".into());
        config.aliases.insert("daily".into(), "quill new journal/daily".into());

        let result = list_aliases(&config).unwrap();
        let names: Vec<_> = result.aliases.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["daily", "weekly"]);
        assert_eq!(result.aliases[0].command, "quill new journal/daily");
    }

    #[test]
    fn test_list_aliases_empty() {
        let result = list_aliases(&QuillConfig::default()).unwrap();
        assert!(result.aliases.is_empty());
        assert!(result.messages.is_empty());
    }
}
