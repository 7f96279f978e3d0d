//! Textual substitution of field values into datasets XML
//!
//! The datasets packet is treated as plain text. A field is written by
//! replacing an existing `<tag>...</tag>` element, or failing that an empty
//! `<tag\n/>` element, with a freshly built element carrying the value.

use crate::{Result, XfaError};
use regex::{NoExpand, Regex};

/// Outcome of substituting a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Existing open/close elements were replaced (count)
    Replaced(usize),
    /// Empty self-closing elements were filled (count)
    Filled(usize),
    /// Neither form of the element exists in the text
    Dropped,
}

/// Per-field outcome of a datasets patch, by tag name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Tags whose existing elements were overwritten
    pub replaced: Vec<String>,
    /// Tags whose empty elements were filled
    pub filled: Vec<String>,
    /// Tags with a value but no matching element
    pub dropped: Vec<String>,
    /// Tags skipped because their value was empty
    pub skipped: Vec<String>,
}

impl PatchReport {
    /// Number of fields written into the datasets text
    pub fn written(&self) -> usize {
        self.replaced.len() + self.filled.len()
    }

    /// Fail with [`XfaError::MissingFields`] if any field was dropped
    pub fn ensure_complete(&self) -> Result<()> {
        if self.dropped.is_empty() {
            Ok(())
        } else {
            Err(XfaError::MissingFields(self.dropped.clone()))
        }
    }
}

/// Escape the three XML characters that may not appear raw in element text
///
/// Only `&`, `<` and `>` are replaced; quotes pass through unchanged.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Substitute one field value into the datasets XML
///
/// # Arguments
/// * `xml` - Datasets XML text
/// * `tag` - Element name (the template field name)
/// * `value` - Raw value; escaped before insertion
///
/// # Returns
/// The new text and how the substitution was applied. When the outcome is
/// [`Substitution::Dropped`] the text is returned unchanged.
pub fn substitute_field(xml: &str, tag: &str, value: &str) -> Result<(String, Substitution)> {
    let filled = format!("<{tag}>{}</{tag}>", escape_xml(value));

    // The template breaks lines right before `>` on some elements
    let escaped_tag = regex::escape(tag);
    let existing = Regex::new(&format!(r"(?s)<{escaped_tag}\n?>.*?</{escaped_tag}\n?>"))?;

    let count = existing.find_iter(xml).count();
    if count > 0 {
        let patched = existing.replace_all(xml, NoExpand(&filled)).into_owned();
        return Ok((patched, Substitution::Replaced(count)));
    }

    let empty = format!("<{tag}\n/>");
    let count = xml.matches(empty.as_str()).count();
    if count > 0 {
        return Ok((xml.replace(&empty, &filled), Substitution::Filled(count)));
    }

    Ok((xml.to_string(), Substitution::Dropped))
}

/// Apply every field to the datasets XML in iteration order
///
/// Fields with an empty value are skipped and leave the template's default
/// in place. Fields that match no element are dropped without error; they
/// are listed in the returned report.
pub fn patch_datasets<I, K, V>(xml: &str, fields: I) -> Result<(String, PatchReport)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut text = xml.to_string();
    let mut report = PatchReport::default();

    for (tag, value) in fields {
        let (tag, value) = (tag.as_ref(), value.as_ref());
        if value.is_empty() {
            report.skipped.push(tag.to_string());
            continue;
        }

        let (patched, outcome) = substitute_field(&text, tag, value)?;
        text = patched;

        match outcome {
            Substitution::Replaced(count) => {
                tracing::debug!(tag, count, "replaced existing element");
                report.replaced.push(tag.to_string());
            }
            Substitution::Filled(count) => {
                tracing::debug!(tag, count, "filled empty element");
                report.filled.push(tag.to_string());
            }
            Substitution::Dropped => {
                tracing::debug!(tag, "no element in datasets, value dropped");
                report.dropped.push(tag.to_string());
            }
        }
    }

    Ok((text, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DATASETS: &str = "<xfa:datasets><xfa:data><form1>\
<_1_Name_Last__First_MI_Suffix\n/>\
<_2_GradeRate>ENS</_2_GradeRate>\
<_41_Comments_on_Perf\n>old\nline</_41_Comments_on_Perf\n>\
</form1></xfa:data></xfa:datasets>";

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A & B <c>"), "A &amp; B &lt;c&gt;");
        assert_eq!(escape_xml(r#"say "hi" 'x'"#), r#"say "hi" 'x'"#);
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_fill_empty_element() {
        let (xml, outcome) =
            substitute_field(DATASETS, "_1_Name_Last__First_MI_Suffix", "Doe, Jane").unwrap();
        assert_eq!(outcome, Substitution::Filled(1));
        assert!(xml.contains(
            "<_1_Name_Last__First_MI_Suffix>Doe, Jane</_1_Name_Last__First_MI_Suffix>"
        ));
        assert!(!xml.contains("<_1_Name_Last__First_MI_Suffix\n/>"));
    }

    #[test]
    fn test_replace_existing_element() {
        let (xml, outcome) = substitute_field(DATASETS, "_2_GradeRate", "LTJG").unwrap();
        assert_eq!(outcome, Substitution::Replaced(1));
        assert!(xml.contains("<_2_GradeRate>LTJG</_2_GradeRate>"));
        assert!(!xml.contains("ENS"));
    }

    #[test]
    fn test_replace_element_with_newline_before_close() {
        let (xml, outcome) =
            substitute_field(DATASETS, "_41_Comments_on_Perf", "Excellent").unwrap();
        assert_eq!(outcome, Substitution::Replaced(1));
        assert!(xml.contains("<_41_Comments_on_Perf>Excellent</_41_Comments_on_Perf>"));
        assert!(!xml.contains("old\nline"));
    }

    #[test]
    fn test_missing_element_is_dropped() {
        let (xml, outcome) = substitute_field(DATASETS, "_3_Desig", "1110").unwrap();
        assert_eq!(outcome, Substitution::Dropped);
        assert_eq!(xml, DATASETS);
    }

    #[test]
    fn test_tag_prefix_does_not_match_longer_tag() {
        let xml = "<_47_Date_Other>x</_47_Date_Other>";
        let (out, outcome) = substitute_field(xml, "_47_Date", "2024-01-01").unwrap();
        assert_eq!(outcome, Substitution::Dropped);
        assert_eq!(out, xml);
    }

    #[test]
    fn test_replacement_is_literal() {
        let (xml, _) = substitute_field(DATASETS, "_2_GradeRate", "$1 ${0} \\n").unwrap();
        assert!(xml.contains("<_2_GradeRate>$1 ${0} \\n</_2_GradeRate>"));
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let xml = "<a><_3_Desig\n/></a><b><_3_Desig\n/></b>";
        let (out, outcome) = substitute_field(xml, "_3_Desig", "1110").unwrap();
        assert_eq!(outcome, Substitution::Filled(2));
        assert_eq!(
            out,
            "<a><_3_Desig>1110</_3_Desig></a><b><_3_Desig>1110</_3_Desig></b>"
        );
    }

    #[test]
    fn test_patch_datasets_report() {
        let fields = vec![
            ("_1_Name_Last__First_MI_Suffix", "O'Brien & <Sons>"),
            ("_2_GradeRate", ""),
            ("_3_Desig", "1110"),
            ("_41_Comments_on_Perf", "Solid"),
        ];
        let (xml, report) = patch_datasets(DATASETS, fields).unwrap();

        assert!(xml.contains(
            "<_1_Name_Last__First_MI_Suffix>O'Brien &amp; &lt;Sons&gt;</_1_Name_Last__First_MI_Suffix>"
        ));
        assert!(xml.contains("<_2_GradeRate>ENS</_2_GradeRate>"));
        assert_eq!(report.filled, vec!["_1_Name_Last__First_MI_Suffix"]);
        assert_eq!(report.replaced, vec!["_41_Comments_on_Perf"]);
        assert_eq!(report.dropped, vec!["_3_Desig"]);
        assert_eq!(report.skipped, vec!["_2_GradeRate"]);
        assert_eq!(report.written(), 2);
        assert!(matches!(
            report.ensure_complete(),
            Err(XfaError::MissingFields(ref tags)) if tags == &["_3_Desig".to_string()]
        ));
    }
}
