//! MIME タイプグループ (MIME Sniffing Standard Section 4.6)
//!
//! パース済みの MIME タイプがどのグループに属するかを判定します。
//! コンテンツそのものは見ません。

use crate::mime_type::MimeType;

impl MimeType {
    fn essence_is(&self, media_type: &str, subtype: &str) -> bool {
        self.media_type() == media_type && self.subtype() == subtype
    }

    fn essence_in(&self, essences: &[&str]) -> bool {
        essences.iter().any(|essence| match essence.split_once('/') {
            Some((t, s)) => self.essence_is(t, s),
            None => false,
        })
    }

    /// image MIME type (タイプが "image")
    pub fn is_image(&self) -> bool {
        self.media_type() == "image"
    }

    /// audio or video MIME type
    pub fn is_audio_or_video(&self) -> bool {
        matches!(self.media_type(), "audio" | "video") || self.essence_is("application", "ogg")
    }

    /// font MIME type
    pub fn is_font(&self) -> bool {
        self.media_type() == "font"
            || self.essence_in(&[
                "application/font-cff",
                "application/font-off",
                "application/font-sfnt",
                "application/font-ttf",
                "application/font-woff",
                "application/vnd.ms-fontobject",
                "application/vnd.ms-opentype",
            ])
    }

    /// ZIP-based MIME type (サブタイプが "+zip" で終わるか application/zip)
    pub fn is_zip_based(&self) -> bool {
        self.subtype().ends_with("+zip") || self.essence_is("application", "zip")
    }

    /// archive MIME type
    pub fn is_archive(&self) -> bool {
        self.essence_in(&[
            "application/x-rar-compressed",
            "application/zip",
            "application/x-gzip",
        ])
    }

    /// XML MIME type
    pub fn is_xml(&self) -> bool {
        self.subtype().ends_with("+xml") || self.essence_in(&["text/xml", "application/xml"])
    }

    /// HTML MIME type
    pub fn is_html(&self) -> bool {
        self.essence_is("text", "html")
    }

    /// scriptable MIME type (XML, HTML, PDF)
    pub fn is_scriptable(&self) -> bool {
        self.is_xml() || self.is_html() || self.essence_is("application", "pdf")
    }

    /// JavaScript MIME type
    pub fn is_javascript(&self) -> bool {
        self.essence_in(&[
            "application/ecmascript",
            "application/javascript",
            "application/x-ecmascript",
            "application/x-javascript",
            "text/ecmascript",
            "text/javascript",
            "text/javascript1.0",
            "text/javascript1.1",
            "text/javascript1.2",
            "text/javascript1.3",
            "text/javascript1.4",
            "text/javascript1.5",
            "text/jscript",
            "text/livescript",
            "text/x-ecmascript",
            "text/x-javascript",
        ])
    }

    /// JSON MIME type (サブタイプが "+json" で終わるか application/json, text/json)
    pub fn is_json(&self) -> bool {
        self.subtype().ends_with("+json") || self.essence_in(&["application/json", "text/json"])
    }
}
