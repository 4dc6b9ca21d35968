//! Simulated report download
//!
//! Produces the plain-text stand-in for the declaration report. No real
//! document generation happens.

use crate::declaration::summary::DeclarationSummary;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const FILE_PREFIX: &str = "Declaracion_Conjunta_SAG_Aduanas_";
const HEADING: &str = "--- REPORTE DE DECLARACIÓN JURADA CONJUNTA SAG Y ADUANAS ---";

/// Exported report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    file_name: String,
    content: String,
}

impl ExportDocument {
    pub fn from_summary(summary: &DeclarationSummary) -> Self {
        let mut content = format!(
            "{HEADING}\nID de Formulario: {}\n(contenido simulado para descarga)\n\n",
            summary.form_id
        );
        content.push_str(&summary.render());

        Self {
            file_name: format!("{FILE_PREFIX}{}.txt", summary.form_id),
            content,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the report into `dir`, returning the full path
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)?;
        info!(path = %path.display(), "Exported declaration report");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::form::DeclarationForm;
    use crate::declaration::id::DeclarationId;

    fn summary() -> DeclarationSummary {
        let id = DeclarationId::parse("DEC-ADU-SAG-251018-Z9Y8X7").unwrap();
        DeclarationSummary::compose(&DeclarationForm::new(), &id)
    }

    #[test]
    fn test_file_name() {
        let doc = ExportDocument::from_summary(&summary());
        assert_eq!(
            doc.file_name(),
            "Declaracion_Conjunta_SAG_Aduanas_DEC-ADU-SAG-251018-Z9Y8X7.txt"
        );
    }

    #[test]
    fn test_content_has_heading_and_rows() {
        let doc = ExportDocument::from_summary(&summary());
        assert!(doc.content().starts_with(HEADING));
        assert!(doc.content().contains("ID de Formulario: DEC-ADU-SAG-251018-Z9Y8X7"));
        assert!(doc.content().contains("Detalle SAG: No aplica / No especificado"));
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let doc = ExportDocument::from_summary(&summary());
        let path = doc.write_to(&dir.path().join("out")).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), doc.content());
    }
}
