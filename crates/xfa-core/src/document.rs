//! PDF Document wrapper exposing the XFA datasets packet

use crate::patch::{patch_datasets, PatchReport};
use crate::{Result, XfaError, DATASETS_LABEL};
use lopdf::{Document, Object, ObjectId};
use std::path::Path;

/// PDF form template with an embedded XFA data island
pub struct XfaDocument {
    /// The underlying lopdf document
    inner: Document,
}

impl XfaDocument {
    /// Open a PDF document from a file path
    ///
    /// # Arguments
    /// * `path` - Path to the PDF file
    ///
    /// # Example
    /// ```ignore
    /// let doc = XfaDocument::open("template.pdf")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inner = Document::load(path).map_err(|e| XfaError::OpenError(e.to_string()))?;
        tracing::info!(path = %path.display(), "opened template");

        Ok(Self { inner })
    }

    /// Open a PDF document from bytes
    ///
    /// # Arguments
    /// * `data` - PDF file bytes
    pub fn open_from_bytes(data: &[u8]) -> Result<Self> {
        let inner = Document::load_mem(data).map_err(|e| XfaError::OpenError(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Follow an indirect reference, if any
    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object> {
        match object {
            Object::Reference(id) => Ok(self.inner.get_object(*id)?),
            other => Ok(other),
        }
    }

    /// Get the `/AcroForm/XFA` array of alternating label/packet entries
    fn xfa_array(&self) -> Result<&Vec<Object>> {
        let root = self
            .inner
            .trailer
            .get(b"Root")
            .map_err(|_| XfaError::ParseError("Document trailer missing Root entry".to_string()))?;
        let catalog = self
            .resolve(root)?
            .as_dict()
            .map_err(|_| XfaError::ParseError("Catalog is not a dictionary".to_string()))?;

        let acro_form = catalog
            .get(b"AcroForm")
            .map_err(|_| XfaError::ParseError("Catalog missing AcroForm entry".to_string()))?;
        let acro_form = self
            .resolve(acro_form)?
            .as_dict()
            .map_err(|_| XfaError::ParseError("AcroForm is not a dictionary".to_string()))?;

        let xfa = acro_form
            .get(b"XFA")
            .map_err(|_| XfaError::ParseError("AcroForm missing XFA entry".to_string()))?;

        // A single-stream XFA has no labeled packets
        self.resolve(xfa)?
            .as_array()
            .map_err(|_| XfaError::DatasetsNotFound)
    }

    /// List the packet labels of the XFA array in document order
    pub fn xfa_packet_labels(&self) -> Result<Vec<String>> {
        let xfa = self.xfa_array()?;
        Ok(xfa
            .iter()
            .step_by(2)
            .filter_map(|label| self.resolve(label).ok().and_then(packet_label))
            .collect())
    }

    /// Find the object ID of the datasets stream
    fn datasets_stream_id(&self) -> Result<ObjectId> {
        let xfa = self.xfa_array()?;

        let index = (0..xfa.len())
            .step_by(2)
            .find(|&i| {
                self.resolve(&xfa[i])
                    .ok()
                    .and_then(packet_label)
                    .is_some_and(|label| label == DATASETS_LABEL)
            })
            .ok_or(XfaError::DatasetsNotFound)?;

        let entry = xfa
            .get(index + 1)
            .ok_or_else(|| XfaError::ParseError("datasets label has no packet".to_string()))?;
        entry
            .as_reference()
            .map_err(|_| XfaError::ParseError("datasets packet is not a stream reference".to_string()))
    }

    /// Read the datasets packet as UTF-8 XML text
    pub fn read_datasets(&self) -> Result<String> {
        let id = self.datasets_stream_id()?;
        let stream = self
            .inner
            .get_object(id)?
            .as_stream()
            .map_err(|_| XfaError::ParseError("datasets packet is not a stream".to_string()))?;

        // Undecodable packets are an error, never patched as text
        let content = if stream.dict.get(b"Filter").is_ok() {
            stream.decompressed_content().map_err(|e| {
                XfaError::ParseError(format!("cannot decode datasets packet: {e}"))
            })?
        } else {
            stream.content.clone()
        };

        Ok(String::from_utf8(content)?)
    }

    /// Overwrite the datasets packet with new XML text
    ///
    /// The stream is stored unfiltered; any previous `/Filter` is removed.
    pub fn write_datasets(&mut self, xml: &str) -> Result<()> {
        let id = self.datasets_stream_id()?;
        match self.inner.get_object_mut(id)? {
            Object::Stream(stream) => {
                stream.set_plain_content(xml.as_bytes().to_vec());
                Ok(())
            }
            _ => Err(XfaError::ParseError(
                "datasets packet is not a stream".to_string(),
            )),
        }
    }

    /// Substitute field values into the datasets packet
    ///
    /// # Arguments
    /// * `fields` - (template field name, value) pairs, applied in order
    ///
    /// # Returns
    /// Report of how each field was applied
    ///
    /// # Example
    /// ```ignore
    /// let mut doc = XfaDocument::open("fitrep.pdf")?;
    /// let report = doc.fill_fields([("_5_Status", "1")])?;
    /// assert!(report.dropped.is_empty());
    /// ```
    pub fn fill_fields<I, K, V>(&mut self, fields: I) -> Result<PatchReport>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let xml = self.read_datasets()?;
        let (patched, report) = patch_datasets(&xml, fields)?;
        self.write_datasets(&patched)?;

        tracing::info!(
            written = report.written(),
            dropped = report.dropped.len(),
            skipped = report.skipped.len(),
            "patched datasets"
        );
        Ok(report)
    }

    /// Save the document to a file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.inner
            .save(path)
            .map_err(|e| XfaError::SaveError(e.to_string()))?;
        tracing::info!(path = %path.display(), "saved document");
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| XfaError::SaveError(e.to_string()))?;

        Ok(buffer)
    }
}

/// Decode an XFA packet label (a PDF string or name)
fn packet_label(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) | Object::Name(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        _ => None,
    }
}

/// Fill a template and write the result to a new file
///
/// The template is opened, patched in memory and saved to `output_path`.
/// The template file itself is never modified, and nothing is written when
/// an error occurs before the save.
///
/// # Arguments
/// * `template_path` - Path to the XFA template PDF
/// * `output_path` - Path of the filled PDF (overwritten if present)
/// * `fields` - (template field name, value) pairs
pub fn fill_template<P, Q, I, K, V>(
    template_path: P,
    output_path: Q,
    fields: I,
) -> Result<PatchReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut doc = XfaDocument::open(template_path)?;
    let report = doc.fill_fields(fields)?;
    doc.save(output_path)?;
    Ok(report)
}
