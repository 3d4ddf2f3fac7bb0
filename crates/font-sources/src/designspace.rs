//! Designspace documents backed by norad.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use norad::designspace::DesignSpaceDocument;
use opsz_core::{DesignDocument, OpszRule};

use crate::{
    error::{Error, Result},
    rules_xml,
    ufo::UfoGlyphStore,
};

/// A designspace document loaded from disk, remembering where it came from.
///
/// norad parses the document for its sources. Saving rewrites only the
/// `<rules>` element of the original text, so elements norad drops on
/// serialization (axis labels, variable fonts) survive.
#[derive(Debug)]
pub struct DesignspaceFile {
    path: PathBuf,
    /// Directory source filenames are relative to.
    dir: PathBuf,
    document: DesignSpaceDocument,
    xml: String,
    rules: Option<Vec<OpszRule>>,
}

impl DesignspaceFile {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = DesignSpaceDocument::load(&path)
            .map_err(|source| Error::LoadDesignspace { path: path.clone(), source })?;
        let xml = fs::read_to_string(&path)
            .map_err(|source| Error::Io { path: path.clone(), source })?;
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!(
            "{}: {} sources, {} rules",
            path.display(),
            document.sources.len(),
            document.rules.rules.len()
        );
        Ok(Self { path, dir, document, xml, rules: None })
    }

    pub fn document(&self) -> &DesignSpaceDocument {
        &self.document
    }

    fn write(&self) -> Result<()> {
        let xml = match &self.rules {
            Some(rules) => rules_xml::replace_rules(&self.xml, rules)?,
            None => self.xml.clone(),
        };
        fs::write(&self.path, xml).map_err(|source| Error::Io { path: self.path.clone(), source })
    }
}

impl DesignDocument for DesignspaceFile {
    type Store = UfoGlyphStore;

    fn path(&self) -> &Path {
        &self.path
    }

    fn source_paths(&self) -> Vec<PathBuf> {
        self.document.sources.iter().map(|source| self.dir.join(&source.filename)).collect()
    }

    fn open_source(&self, path: &Path) -> anyhow::Result<UfoGlyphStore> {
        Ok(UfoGlyphStore::open(path)?)
    }

    fn replace_rules(&mut self, rules: &[OpszRule]) -> anyhow::Result<()> {
        debug!(
            "{}: replacing {} existing rules",
            self.path.display(),
            self.document.rules.rules.len()
        );
        self.rules = Some(rules.to_vec());
        Ok(())
    }

    fn save(&self) -> anyhow::Result<()> {
        Ok(self.write()?)
    }
}

#[cfg(test)]
mod tests {
    use opsz_core::GenerationConfig;

    use super::*;

    const DESIGNSPACE: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<designspace format="5.0">
  <axes>
    <axis tag="opsz" name="opsz" minimum="8" maximum="144" default="8"/>
  </axes>
  <sources>
    <source filename="masters/Light.ufo" name="Light">
      <location>
        <dimension name="opsz" xvalue="8"/>
      </location>
    </source>
  </sources>
</designspace>
"#;

    #[test]
    fn test_source_paths_relative_to_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Family.designspace");
        fs::write(&path, DESIGNSPACE).unwrap();

        let file = DesignspaceFile::load(&path).unwrap();
        assert_eq!(file.source_paths(), vec![dir.path().join("masters/Light.ufo")]);
    }

    #[test]
    fn test_save_without_rules_keeps_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Family.designspace");
        fs::write(&path, DESIGNSPACE).unwrap();

        DesignspaceFile::load(&path).unwrap().save().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DESIGNSPACE);
    }

    #[test]
    fn test_saved_rules_read_back_by_norad() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Family.designspace");
        fs::write(&path, DESIGNSPACE).unwrap();

        let mut file = DesignspaceFile::load(&path).unwrap();
        file.replace_rules(&[OpszRule::new(&GenerationConfig::default(), 9, 5)]).unwrap();
        file.save().unwrap();

        let document = DesignSpaceDocument::load(&path).unwrap();
        let rule = &document.rules.rules[0];
        assert_eq!(rule.name.as_deref(), Some("opsz9_5"));

        let condition = &rule.condition_sets[0].conditions[0];
        assert_eq!(condition.name, "opsz");
        assert_eq!(condition.minimum, Some(9.5));
        assert!((condition.maximum.unwrap() - 9.599).abs() < 1e-4);

        let sub = &rule.substitutions[0];
        assert_eq!(sub.name.to_string(), "underscore");
        assert_eq!(sub.with.to_string(), "opsz.9_5");
    }
}
