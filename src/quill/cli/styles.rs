use console::Style;
use once_cell::sync::Lazy;

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());

pub static ALIAS_NAME: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static ALIAS_COMMAND: Lazy<Style> = Lazy::new(|| Style::new().dim());
