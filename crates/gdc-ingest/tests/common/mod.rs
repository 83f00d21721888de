//! Shared fixtures for ingestion tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Builds a TCGA-style clinical document with the given patient elements
/// and follow-up sections.
pub fn clinical_xml(patient: &[(&str, &str)], follow_ups: &[&[(&str, &str)]]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<brca:tcga_bcr xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:brca="http://tcga.nci/bcr/xml/clinical/brca/2.7" xmlns:admin="http://tcga.nci/bcr/xml/administration/2.7" xmlns:shared="http://tcga.nci/bcr/xml/shared/2.7" xmlns:clin_shared="http://tcga.nci/bcr/xml/clinical/shared/2.7" xmlns:follow_up_v1.5="http://tcga.nci/bcr/xml/clinical/brca/followup/2.7/1.5" schemaVersion="2.7">
    <admin:admin>
        <admin:bcr xsi:type="xs:string">Nationwide Children's Hospital</admin:bcr>
        <admin:file_uuid>0aef5a4f-4c3a-4b1f-9c5c-9a8f0f0c1d2e</admin:file_uuid>
        <admin:disease_code xsi:type="xs:string">BRCA</admin:disease_code>
    </admin:admin>
    <brca:patient>
"#,
    );
    for (tag, value) in patient {
        xml.push_str(&element("clin_shared", tag, value));
    }
    xml.push_str("        <brca:follow_ups>\n");
    for follow_up in follow_ups {
        xml.push_str("            <follow_up_v1.5:follow_up version=\"1.5\">\n");
        for (tag, value) in *follow_up {
            xml.push_str(&element("clin_shared", tag, value));
        }
        xml.push_str("            </follow_up_v1.5:follow_up>\n");
    }
    xml.push_str("        </brca:follow_ups>\n    </brca:patient>\n</brca:tcga_bcr>\n");
    xml
}

fn element(prefix: &str, tag: &str, value: &str) -> String {
    if value.is_empty() {
        format!("        <{prefix}:{tag} procurement_status=\"Not Available\" />\n")
    } else {
        format!(
            "        <{prefix}:{tag} procurement_status=\"Completed\">{value}</{prefix}:{tag}>\n"
        )
    }
}

/// Every allow-listed field except the file UUID and disease code, which the
/// admin section already provides.
pub fn complete_alive_patient() -> Vec<(&'static str, &'static str)> {
    vec![
        ("age_at_initial_pathologic_diagnosis", "61"),
        ("bcr_patient_uuid", "6E7D5EC6-A469-467C-B748-237353C23416"),
        ("days_to_birth", "-22429"),
        ("days_to_death", ""),
        ("days_to_initial_pathologic_diagnosis", "0"),
        ("days_to_last_followup", "365"),
        ("diagnosis", "Breast invasive carcinoma"),
        ("gender", "FEMALE"),
        ("histological_type", "Infiltrating Ductal Carcinoma"),
        ("pathologic_M", "M0"),
        ("pathologic_N", "N1a"),
        ("pathologic_T", "T2"),
        ("pathologic_stage", "Stage IIB"),
        ("patient_id", "A1A0"),
        ("vital_status", "Alive"),
    ]
}

pub fn write(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}
