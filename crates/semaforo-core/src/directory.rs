use crate::error::SemaforoError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One supplier row from the directory feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_region: Option<String>,
    pub active: bool,
}

/// The supplier directory, loaded once from its XML feed and searchable
/// by code or name.
#[derive(Debug, Clone, Default)]
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
}

impl SupplierDirectory {
    /// Load the directory from an XML file.
    pub fn load(path: &Path) -> Result<Self, SemaforoError> {
        let xml = std::fs::read_to_string(path).map_err(|e| SemaforoError::DirectoryLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_xml_str(&xml).map_err(|e| match e {
            SemaforoError::DirectoryInvalid(reason) => SemaforoError::DirectoryLoad {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parse the attribute-based `<Details .../>` rows of the feed.
    ///
    /// Rows without a usable code (empty, or the "." placeholder the feed
    /// uses for retired entries) are skipped. The result is sorted by code.
    pub fn from_xml_str(xml: &str) -> Result<Self, SemaforoError> {
        let mut reader = Reader::from_str(xml);

        let mut suppliers: Vec<Supplier> = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Details" =>
                {
                    if let Some(supplier) = supplier_from_row(e)? {
                        suppliers.push(supplier);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(SemaforoError::DirectoryInvalid(format!(
                        "XML error at position {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
        }

        suppliers.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(Self { suppliers })
    }

    /// All suppliers, sorted by code.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Exact lookup by supplier code.
    pub fn find_by_code(&self, code: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.code == code)
    }

    /// Case-insensitive substring search over supplier names.
    pub fn search_by_name(&self, query: &str) -> Vec<&Supplier> {
        let q = query.to_lowercase();
        self.suppliers
            .iter()
            .filter(|s| {
                s.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&q))
            })
            .collect()
    }
}

fn supplier_from_row(e: &BytesStart<'_>) -> Result<Option<Supplier>, SemaforoError> {
    let mut code = None;
    let mut name = None;
    let mut origin = None;
    let mut status = None;

    for attr in e.attributes() {
        let attr = attr
            .map_err(|err| SemaforoError::DirectoryInvalid(format!("bad attribute: {err}")))?;
        let value = attr
            .unescape_value()
            .map_err(|err| {
                SemaforoError::DirectoryInvalid(format!("bad attribute value: {err}"))
            })?
            .trim()
            .to_string();
        match attr.key.as_ref() {
            b"Cve_Prov" => code = Some(value),
            b"Nom_Prov" => name = non_empty(value),
            b"Edo_Origen" => origin = non_empty(value),
            b"Estatus" => status = Some(value),
            _ => {}
        }
    }

    let code = match code {
        Some(c) if !c.is_empty() && c != "." => c,
        _ => return Ok(None),
    };

    Ok(Some(Supplier {
        code,
        name,
        origin_region: origin,
        active: status.as_deref() == Some("Activo"),
    }))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Proveedores>
  <Details Cve_Prov="F002" Nom_Prov="Frutas El Campo" Edo_Origen="Michoacan" Estatus="Activo"/>
  <Details Cve_Prov="F001" Nom_Prov="Agroindustrias del Valle" Edo_Origen="Jalisco" Estatus="Activo"/>
  <Details Cve_Prov="F003" Nom_Prov="Empacadora San Luis" Edo_Origen="Sonora" Estatus="Inactivo"/>
  <Details Cve_Prov="." Nom_Prov="(retirado)" Edo_Origen="" Estatus="Inactivo"/>
  <Details Cve_Prov="" Nom_Prov="Sin clave" Estatus="Activo"/>
</Proveedores>"#;

    #[test]
    fn parses_rows_and_skips_placeholder_codes() {
        let dir = SupplierDirectory::from_xml_str(SAMPLE).unwrap();
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn sorted_by_code() {
        let dir = SupplierDirectory::from_xml_str(SAMPLE).unwrap();
        let codes: Vec<&str> = dir.suppliers().iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["F001", "F002", "F003"]);
    }

    #[test]
    fn find_by_code_hits_and_misses() {
        let dir = SupplierDirectory::from_xml_str(SAMPLE).unwrap();
        let supplier = dir.find_by_code("F001").unwrap();
        assert_eq!(supplier.name.as_deref(), Some("Agroindustrias del Valle"));
        assert_eq!(supplier.origin_region.as_deref(), Some("Jalisco"));
        assert!(supplier.active);
        assert!(dir.find_by_code("F999").is_none());
    }

    #[test]
    fn inactive_status_parsed() {
        let dir = SupplierDirectory::from_xml_str(SAMPLE).unwrap();
        assert!(!dir.find_by_code("F003").unwrap().active);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let dir = SupplierDirectory::from_xml_str(SAMPLE).unwrap();
        let hits = dir.search_by_name("EMPACADORA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "F003");
        assert!(dir.search_by_name("zzz").is_empty());
    }

    #[test]
    fn malformed_xml_is_an_error_not_an_empty_directory() {
        let result = SupplierDirectory::from_xml_str("<Proveedores><Details");
        assert!(matches!(result, Err(SemaforoError::DirectoryInvalid(_))));
    }

    #[test]
    fn missing_optional_attributes_become_none() {
        let dir =
            SupplierDirectory::from_xml_str(r#"<r><Details Cve_Prov="X1" Estatus="Activo"/></r>"#)
                .unwrap();
        let supplier = dir.find_by_code("X1").unwrap();
        assert!(supplier.name.is_none());
        assert!(supplier.origin_region.is_none());
    }
}
