// Mon Oct 19 2026 - Alex

use super::engine::{Rendered, TemplateEngine, TokenSyntax};
use super::substitutions::Substitutions;
use crate::error::{GeneratorError, GeneratorResult};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A single template on disk and the substitutions used to render it.
///
/// The template text is read once in the constructor. The filename is kept
/// relative to the template directory and doubles as the output filename
/// pattern, so `include/datametric___metric_type__.h` renders into
/// `<output_dir>/include/datametric_<metric_type>.h`.
#[derive(Debug, Clone)]
pub struct TemplatedFile {
    directory: PathBuf,
    filename: String,
    template: String,
    data: Arc<Substitutions>,
    strict_tokens: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub filename: Rendered,
    pub content: Rendered,
}

impl RenderedFile {
    pub fn unresolved(&self) -> Vec<String> {
        let mut tokens = self.filename.unresolved.clone();
        for key in &self.content.unresolved {
            if !tokens.contains(key) {
                tokens.push(key.clone());
            }
        }
        tokens
    }
}

impl TemplatedFile {
    pub fn new(
        directory: impl AsRef<Path>,
        filename: &str,
        data: Arc<Substitutions>,
    ) -> GeneratorResult<Self> {
        let directory = directory.as_ref().to_path_buf();
        let path = directory.join(filename);

        let template = fs::read_to_string(&path)
            .map_err(|source| GeneratorError::TemplateLoad { path: path.clone(), source })?;

        info!("Loaded template {} ({} bytes)", path.display(), template.len());

        Ok(Self {
            directory,
            filename: filename.to_string(),
            template,
            data,
            strict_tokens: true,
        })
    }

    /// Loads a template with no substitutions yet.
    pub fn open(directory: impl AsRef<Path>, filename: &str) -> GeneratorResult<Self> {
        Self::new(directory, filename, Arc::new(Substitutions::new()))
    }

    /// When disabled, unknown placeholders are logged and written through verbatim.
    pub fn with_strict_tokens(mut self, strict: bool) -> Self {
        self.strict_tokens = strict;
        self
    }

    pub fn set_data(&mut self, data: Arc<Substitutions>) {
        self.data = data;
    }

    pub fn data(&self) -> &Substitutions {
        &self.data
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn template_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    pub fn render(&self) -> GeneratorResult<RenderedFile> {
        let filename = TemplateEngine::new(TokenSyntax::Filename, &self.data)?
            .render_string(&self.filename);
        let content = TemplateEngine::new(TokenSyntax::Content, &self.data)?
            .render_string(&self.template);

        debug!("Rendered {} -> {}", self.filename, filename.text);

        Ok(RenderedFile { filename, content })
    }

    /// Renders the template and writes it under `output_dir`, returning the path written.
    pub fn write_to_file(&self, output_dir: &Path) -> GeneratorResult<PathBuf> {
        if output_dir.as_os_str().is_empty() {
            return Err(GeneratorError::Contract(
                "must specify an output directory".to_string(),
            ));
        }

        let rendered = self.render()?;
        let unresolved = rendered.unresolved();

        if !unresolved.is_empty() {
            if self.strict_tokens {
                return Err(GeneratorError::UnresolvedTokens {
                    file: self.template_path(),
                    tokens: unresolved,
                });
            }
            warn!(
                "Leaving unresolved tokens in {}: {}",
                self.template_path().display(),
                unresolved.join(", ")
            );
        }

        let path = output_dir.join(&rendered.filename.text);

        fs::write(&path, rendered.content.text.as_bytes())
            .map_err(|source| GeneratorError::Write { path: path.clone(), source })?;

        info!("Wrote {} ({} bytes)", path.display(), rendered.content.text.len());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER_NAME: &str = "datametric___metric_type__.h";

    fn oil_pressure() -> Arc<Substitutions> {
        Arc::new(
            Substitutions::new()
                .with("metric_type", "oil_pressure")
                .with("metric_class", "OILPRESSUREMETRIC"),
        )
    }

    fn template_dir(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(HEADER_NAME), content).unwrap();
        dir
    }

    #[test]
    fn test_missing_template_is_load_error() {
        let dir = TempDir::new().unwrap();
        let err = TemplatedFile::open(dir.path(), "nope.h").unwrap_err();
        match err {
            GeneratorError::TemplateLoad { path, .. } => assert_eq!(path, dir.path().join("nope.h")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_open_starts_with_empty_data() {
        let dir = template_dir("x");
        let file = TemplatedFile::open(dir.path(), HEADER_NAME).unwrap();
        assert!(file.data().is_empty());
        assert_eq!(file.template(), "x");
    }

    #[test]
    fn test_write_substitutes_name_and_content() {
        let templates = template_dir("class /*$metric_class*/ {}; // /*$metric_type*/\n");
        let out = TempDir::new().unwrap();

        let file = TemplatedFile::new(templates.path(), HEADER_NAME, oil_pressure()).unwrap();
        let written = file.write_to_file(out.path()).unwrap();

        assert_eq!(written, out.path().join("datametric_oil_pressure.h"));
        assert_eq!(
            fs::read_to_string(&written).unwrap(),
            "class OILPRESSUREMETRIC {}; // oil_pressure\n"
        );
    }

    #[test]
    fn test_write_twice_is_identical() {
        let templates = template_dir("/*$metric_class*/ /*$metric_type*/");
        let out = TempDir::new().unwrap();
        let file = TemplatedFile::new(templates.path(), HEADER_NAME, oil_pressure()).unwrap();

        let first_path = file.write_to_file(out.path()).unwrap();
        let first = fs::read(&first_path).unwrap();
        let second_path = file.write_to_file(out.path()).unwrap();
        let second = fs::read(&second_path).unwrap();

        assert_eq!(first_path, second_path);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_output_dir_is_contract_violation() {
        let templates = template_dir("/*$metric_type*/");
        let file = TemplatedFile::new(templates.path(), HEADER_NAME, oil_pressure()).unwrap();

        let err = file.write_to_file(Path::new("")).unwrap_err();
        assert!(matches!(err, GeneratorError::Contract(_)));
    }

    #[test]
    fn test_missing_output_dir_is_write_error() {
        let templates = template_dir("/*$metric_type*/");
        let out = TempDir::new().unwrap();
        let missing = out.path().join("does-not-exist");
        let file = TemplatedFile::new(templates.path(), HEADER_NAME, oil_pressure()).unwrap();

        let err = file.write_to_file(&missing).unwrap_err();
        match err {
            GeneratorError::Write { path, .. } => {
                assert_eq!(path, missing.join("datametric_oil_pressure.h"))
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!missing.exists());
    }

    #[test]
    fn test_set_data_replaces_wholesale() {
        let templates = template_dir("/*$metric_class*/|/*$metric_type*/");
        let out = TempDir::new().unwrap();
        let mut file = TemplatedFile::new(templates.path(), HEADER_NAME, oil_pressure())
            .unwrap()
            .with_strict_tokens(false);

        file.set_data(Arc::new(Substitutions::new().with("metric_type", "speed")));
        assert!(!file.data().contains_key("metric_class"));

        let written = file.write_to_file(out.path()).unwrap();
        assert_eq!(written, out.path().join("datametric_speed.h"));
        assert_eq!(fs::read_to_string(written).unwrap(), "/*$metric_class*/|speed");
    }

    #[test]
    fn test_strict_tokens_refuse_unknown_placeholder() {
        let templates = template_dir("/*$metric_type*/ /*$metric_unit*/");
        let out = TempDir::new().unwrap();
        let file = TemplatedFile::new(templates.path(), HEADER_NAME, oil_pressure()).unwrap();

        let err = file.write_to_file(out.path()).unwrap_err();
        match err {
            GeneratorError::UnresolvedTokens { tokens, .. } => {
                assert_eq!(tokens, vec!["metric_unit".to_string()])
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.path().join("datametric_oil_pressure.h").exists());
    }

    #[test]
    fn test_shared_data_between_files() {
        let templates = template_dir("/*$metric_type*/");
        fs::write(templates.path().join("datametric___metric_type__.cpp"), "/*$metric_class*/").unwrap();
        let data = oil_pressure();

        let header = TemplatedFile::new(templates.path(), HEADER_NAME, Arc::clone(&data)).unwrap();
        let source =
            TemplatedFile::new(templates.path(), "datametric___metric_type__.cpp", Arc::clone(&data))
                .unwrap();

        assert_eq!(header.render().unwrap().content.text, "oil_pressure");
        let rendered = source.render().unwrap();
        assert_eq!(rendered.content.text, "OILPRESSUREMETRIC");
        assert_eq!(rendered.filename.text, "datametric_oil_pressure.cpp");
    }

    #[test]
    fn test_unknown_filename_token_is_refused() {
        let templates = TempDir::new().unwrap();
        fs::write(templates.path().join("datametric___metric_unit__.h"), "x").unwrap();
        let out = TempDir::new().unwrap();
        let file =
            TemplatedFile::new(templates.path(), "datametric___metric_unit__.h", oil_pressure()).unwrap();

        let err = file.write_to_file(out.path()).unwrap_err();
        match err {
            GeneratorError::UnresolvedTokens { tokens, .. } => {
                assert_eq!(tokens, vec!["metric_unit".to_string()])
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
