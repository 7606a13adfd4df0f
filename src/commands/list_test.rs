use super::*;
use crate::catalog::Example;

fn sections() -> Vec<Section> {
    let example = |name: &str, language| Example::new(name, "", name, language);
    vec![
        Section::new(
            "Basic",
            "",
            vec![
                example("DefaultExample", ExampleLanguage::Kotlin),
                example("ExternalDocumentExample", ExampleLanguage::Java),
            ],
        ),
        Section::new(
            "Digital Signatures",
            "",
            vec![example("DigitalSignatureExample", ExampleLanguage::Kotlin)],
        ),
        Section::new(
            "Electronic Signatures",
            "",
            vec![example("ElectronicSignatureExample", ExampleLanguage::Kotlin)],
        ),
    ]
}

fn names(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn no_filter_keeps_every_section() {
    let sections = sections();
    assert_eq!(filter_sections(&sections, None, None), sections);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let sections = sections();
    let filtered = filter_sections(&sections, Some("SIGNATURES"), None);
    assert_eq!(
        names(&filtered),
        vec!["Digital Signatures", "Electronic Signatures"]
    );
}

#[test]
fn unknown_section_yields_nothing() {
    let sections = sections();
    assert!(filter_sections(&sections, Some("Compose"), None).is_empty());
}

#[test]
fn language_filter_drops_empty_sections() {
    let sections = sections();
    let filtered = filter_sections(&sections, None, Some(ExampleLanguage::Java));

    assert_eq!(names(&filtered), vec!["Basic"]);
    assert_eq!(filtered[0].examples.len(), 1);
    assert_eq!(filtered[0].examples[0].name, "ExternalDocumentExample");
}
