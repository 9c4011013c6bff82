//! # Template Seams
//!
//! Note creation talks to templates through three small traits so that the
//! pipeline can be exercised without a template engine or a notebook on disk:
//!
//! - [`Renderer`]: turns a [`RenderContext`] into text
//! - [`TemplateLoader`]: compiles inline sources and template files
//! - [`TemplateLocator`]: maps a configured template path to a file
//!
//! [`StencilLoader`] is the production loader. [`ContentRenderer`] is the body
//! renderer used when a directory has no body template: it passes the
//! request's content through untouched.

use crate::note::RenderContext;
use std::path::{Path, PathBuf};

pub trait Renderer {
    fn render(&self, context: &RenderContext) -> Result<String, stencil::Error>;
}

impl Renderer for stencil::Template {
    fn render(&self, context: &RenderContext) -> Result<String, stencil::Error> {
        stencil::Template::render(self, context)
    }
}

/// Body renderer for directories without a body template.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentRenderer;

impl Renderer for ContentRenderer {
    fn render(&self, context: &RenderContext) -> Result<String, stencil::Error> {
        Ok(context.content.clone())
    }
}

pub trait TemplateLoader {
    /// Compiles an inline template source.
    fn load(&self, source: &str) -> Result<Box<dyn Renderer>, stencil::Error>;

    /// Reads and compiles a template file.
    fn load_file(&self, path: &Path) -> Result<Box<dyn Renderer>, stencil::Error>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StencilLoader;

impl TemplateLoader for StencilLoader {
    fn load(&self, source: &str) -> Result<Box<dyn Renderer>, stencil::Error> {
        Ok(Box::new(stencil::Template::parse(source)?))
    }

    fn load_file(&self, path: &Path) -> Result<Box<dyn Renderer>, stencil::Error> {
        Ok(Box::new(stencil::Template::from_file(path)?))
    }
}

pub trait TemplateLocator {
    /// Resolves a configured template path to an existing file.
    fn locate_template(&self, path: &str) -> Option<PathBuf>;
}

/// Searches a list of template directories in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDirs(pub Vec<PathBuf>);

impl TemplateLocator for TemplateDirs {
    fn locate_template(&self, path: &str) -> Option<PathBuf> {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }
        self.0
            .iter()
            .map(|dir| dir.join(candidate))
            .find(|full| full.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CreationRequest;
    use crate::test_utils::{fixed_now, root_dir};
    use std::collections::HashMap;
    use std::fs;

    fn context() -> RenderContext {
        let request = CreationRequest::new(root_dir("/notes"))
            .with_title("Groceries")
            .with_content("milk");
        RenderContext::build(&request, fixed_now(), HashMap::new())
    }

    #[test]
    fn test_content_renderer_passes_content_through() {
        assert_eq!(ContentRenderer.render(&context()).unwrap(), "milk");
    }

    #[test]
    fn test_content_renderer_empty_content() {
        let request = CreationRequest::new(root_dir("/notes"));
        let context = RenderContext::build(&request, fixed_now(), HashMap::new());
        assert_eq!(ContentRenderer.render(&context).unwrap(), "");
    }

    #[test]
    fn test_stencil_loader_inline() {
        let renderer = StencilLoader.load("# {{ title }}").unwrap();
        assert_eq!(renderer.render(&context()).unwrap(), "# Groceries");
    }

    #[test]
    fn test_stencil_loader_reports_syntax_errors() {
        assert!(matches!(
            StencilLoader.load("{% if %}"),
            Err(stencil::Error::Syntax(_))
        ));
    }

    #[test]
    fn test_stencil_loader_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("body.md");
        fs::write(&path, "{{ title }}: {{ content }}\n").unwrap();

        let renderer = StencilLoader.load_file(&path).unwrap();
        assert_eq!(renderer.render(&context()).unwrap(), "Groceries: milk\n");
    }

    #[test]
    fn test_locate_template_searches_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("daily.md"), "").unwrap();
        fs::write(second.path().join("shared.md"), "").unwrap();
        fs::write(first.path().join("shared.md"), "").unwrap();

        let dirs = TemplateDirs(vec![first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(
            dirs.locate_template("daily.md"),
            Some(second.path().join("daily.md"))
        );
        assert_eq!(
            dirs.locate_template("shared.md"),
            Some(first.path().join("shared.md"))
        );
        assert_eq!(dirs.locate_template("missing.md"), None);
    }

    #[test]
    fn test_locate_template_absolute_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("abs.md");
        fs::write(&path, "").unwrap();

        let dirs = TemplateDirs::default();
        assert_eq!(dirs.locate_template(path.to_str().unwrap()), Some(path.clone()));

        let missing = temp_dir.path().join("nope.md");
        assert_eq!(dirs.locate_template(missing.to_str().unwrap()), None);
    }
}
