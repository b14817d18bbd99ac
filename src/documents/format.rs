use std::fmt;

/// Format an upload claims to be, which selects the extraction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    /// Resolve from the part's content type, then the file name, else PDF.
    ///
    /// `application/octet-stream` carries no claim and falls through to the
    /// file name.
    pub fn resolve(content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let claimed = content_type
            .and_then(|ct| ct.parse::<mime::Mime>().ok())
            .filter(|m| m.essence_str() != mime::APPLICATION_OCTET_STREAM.essence_str())
            .or_else(|| file_name.and_then(|name| mime_guess::from_path(name).first()));

        match claimed {
            Some(m) if m.type_() == mime::TEXT => DocumentFormat::PlainText,
            _ => DocumentFormat::Pdf,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::PlainText => write!(f, "text"),
        }
    }
}
