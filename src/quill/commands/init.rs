use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook;
use std::path::Path;

pub fn run(root: &Path) -> Result<CmdResult> {
    let config_dir = notebook::init(root)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized notebook at {}",
        config_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn test_init_reports_location() {
        let temp = tempfile::tempdir().unwrap();
        let result = run(temp.path()).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains(".quill"));
    }
}
